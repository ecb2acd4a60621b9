//! Metadata document types, schema version 6.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 6.0 metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub simple_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merrill_quadrant: Option<String>,
    pub concepts: Concepts,
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

/// One metadata attribute; the quadrant-specific marker restricts the
/// attribute to a single instruction quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(
        rename = "@quadrantSpecific",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quadrant_specific: Option<bool>,
}
