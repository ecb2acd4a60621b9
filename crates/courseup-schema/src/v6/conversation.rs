//! Conversation tree document types, schema version 6.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 6.0 conversation tree file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(rename = "@version")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub start_node_id: u32,
    pub nodes: Nodes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nodes {
    #[serde(rename = "$value", default)]
    pub nodes: Vec<ConversationNode>,
}

/// Closed set of conversation node types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConversationNode {
    Message(MessageNode),
    Question(QuestionNode),
    End(EndNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageNode {
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionNode {
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    pub text: String,
    pub choices: Choices,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choices {
    #[serde(rename = "choice", default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndNode {
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
}
