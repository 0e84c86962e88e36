//! Shared request and response types

pub mod chat;

pub use chat::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, MessageRole,
    StopSequences, require_array,
};
