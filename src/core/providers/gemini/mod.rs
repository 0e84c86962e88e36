//! Google Gemini Provider
//!
//! Relays `generateContent` calls to the Gemini API.

pub mod config;
pub mod provider;

pub use config::GeminiConfig;
pub use provider::GeminiProvider;
