//! Learner configuration document types, schema version 8.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 8.0 learner configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfiguration {
    #[serde(rename = "@version")]
    pub version: String,
    pub inputs: Inputs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(rename = "input", default)]
    pub inputs: Vec<Input>,
}

/// One interpretation pipeline: producers feed a classifier, a predictor,
/// and a translator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producers: Option<Producers>,
    pub classifier: Classifier,
    pub predictor: Predictor,
    pub translator: Translator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Producers {
    #[serde(rename = "$value", default)]
    pub producers: Vec<Producer>,
}

/// A producer is a sensor stream or a training application state stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Producer {
    Sensor(Sensor),
    TrainingAppState(TrainingAppState),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "@type")]
    pub sensor_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAppState {
    #[serde(rename = "@type")]
    pub state_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classifier {
    pub classifier_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predictor {
    pub predictor_impl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    pub translator_impl: String,
}
