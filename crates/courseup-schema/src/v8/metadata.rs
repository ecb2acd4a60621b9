//! Metadata document types, schema version 8.0.
//!
//! This version replaces the bare content reference with a content choice
//! and moves the quadrant literal inside a `presentAt` wrapper.

use serde::{Deserialize, Serialize};

/// Root element of a version 8.0 metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub content: Content,
    pub present_at: PresentAt,
    pub concepts: Concepts,
}

/// The content this metadata describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "$value")]
    pub reference: ContentRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentRef {
    #[serde(rename = "simple")]
    Simple(SimpleRef),
    #[serde(rename = "trainingApp")]
    TrainingApp(TrainingAppRef),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleRef {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAppRef {
    pub value: String,
}

/// Where in the adaptive flow this content may be presented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentAt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merrill_quadrant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concepts {
    #[serde(rename = "concept", default)]
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(rename = "@name")]
    pub name: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "attribute", default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "@value")]
    pub value: String,
}
