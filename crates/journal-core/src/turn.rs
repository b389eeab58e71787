//! Conversation transcript entries.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message in a chat transcript.
///
/// Turns only live for the duration of one chat exchange and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Role: "system", "user", or "assistant"
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ConversationTurn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.role == Role::System
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let turn = ConversationTurn::assistant("hi");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = serde_json::from_str::<ConversationTurn>(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }
}
