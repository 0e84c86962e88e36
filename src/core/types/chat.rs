//! Chat request and message types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat message in the OpenAI-like convention
///
/// `content` is kept as raw JSON so text and multi-part content both survive,
/// and any extra fields the client sent are carried along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: MessageRole,
    /// Message content
    #[serde(default)]
    pub content: Value,
    /// Fields this relay does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    /// Create a text message
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Value::String(content.into()),
            extra: Map::new(),
        }
    }
}

/// Stop sequences as clients send them: a single string or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopSequences {
    One(String),
    Many(Vec<String>),
}

impl StopSequences {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StopSequences::One(stop) => vec![stop],
            StopSequences::Many(stops) => stops,
        }
    }
}

/// Inbound chat request in the OpenAI-like convention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Ordered conversation
    pub messages: Vec<ChatMessage>,
    /// Client model override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Client stop sequence override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopSequences>,
}

impl ChatCompletionRequest {
    /// Split off the system prompt.
    ///
    /// The first `system` message becomes the prompt, unless its content is
    /// null or missing; every non-system message is returned in order, unmodified.
    pub fn split_system(self) -> (Option<Value>, Vec<ChatMessage>) {
        let mut system = None;
        let mut conversation = Vec::with_capacity(self.messages.len());

        for message in self.messages {
            if message.role == MessageRole::System {
                if system.is_none() {
                    system = Some(message.content);
                }
            } else {
                conversation.push(message);
            }
        }

        (system.filter(|content: &Value| !content.is_null()), conversation)
    }
}

/// Uniform response wrapper: `{choices: [{message: {role, content}}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// Single choice of a [`ChatCompletionResponse`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Wrap assistant text into the uniform shape
    pub fn from_assistant_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChatMessage::new(MessageRole::Assistant, text),
            }],
        }
    }
}

/// Require `field` to be a JSON array, the shape check every route shares
pub fn require_array<'a>(payload: &'a Value, field: &str) -> Option<&'a Vec<Value>> {
    payload.get(field).and_then(Value::as_array)
}
