//! Export snapshot document types, current schema version (10.0).
//!
//! Question and survey exports are interchange files produced by the survey
//! authoring tools. They carry no conversion logic; the dispatcher parses
//! them against the current schema only.

use serde::{Deserialize, Serialize};

/// Root element of an exported question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionExport {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "question", default)]
    pub questions: Vec<ExportedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedQuestion {
    #[serde(rename = "@type")]
    pub question_type: String,
    pub text: String,
    #[serde(rename = "choice", default)]
    pub choices: Vec<String>,
}

/// Root element of an exported survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyExport {
    #[serde(rename = "@version")]
    pub version: String,
    pub name: String,
    #[serde(rename = "page", default)]
    pub pages: Vec<SurveyPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPage {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "question", default)]
    pub questions: Vec<ExportedQuestion>,
}
