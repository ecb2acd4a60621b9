//! Sensor configuration document types, schema version 8.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 8.0 sensor configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorsConfiguration {
    #[serde(rename = "@version")]
    pub version: String,
    pub sensors: Sensors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Writers>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensors {
    #[serde(rename = "sensor", default)]
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub name: String,
    pub sensor_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer_instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribute_externally: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(rename = "filter", default)]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub name: String,
    pub filter_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer_instance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Writers {
    #[serde(rename = "writer", default)]
    pub writers: Vec<Writer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writer {
    pub name: String,
    pub writer_impl: String,
}
