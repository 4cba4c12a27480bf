use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single generation request issued by one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    text: String,
    conversation_id: String,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>, conversation_id: impl Into<String>) -> GenerateRequest {
        GenerateRequest {
            text: text.into(),
            conversation_id: conversation_id.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }
}

/// The flavour of system prompt the endpoint should use.
#[derive(Hash, PartialEq, Eq, Deserialize, Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    General,
    Analysis,
    Creative,
    Technical,
}

impl Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::General => write!(f, "general"),
            TaskType::Analysis => write!(f, "analysis"),
            TaskType::Creative => write!(f, "creative"),
            TaskType::Technical => write!(f, "technical"),
        }
    }
}
