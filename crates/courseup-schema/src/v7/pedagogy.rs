//! Pedagogy configuration document types, schema version 7.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 7.0 pedagogy configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedagogyConfiguration {
    #[serde(rename = "@version")]
    pub version: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "attribute", default)]
    pub attributes: Vec<Attribute>,
}

/// Maps one learner state to the metadata attributes preferred during a
/// named instruction quadrant (e.g. `"Rule Quadrant"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(rename = "@type")]
    pub learner_state: String,
    pub quadrant: String,
    pub metadata_attributes: MetadataAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttributes {
    #[serde(rename = "metadataAttribute", default)]
    pub attributes: Vec<MetadataAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    #[serde(rename = "@value")]
    pub value: String,
}
