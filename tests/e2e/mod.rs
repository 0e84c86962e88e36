//! End-to-end tests for chat-relay
//!
//! These tests call the real providers and require API keys.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - GEMINI_API_KEY: For Gemini tests
//! - CLAUDE_API_KEY: For Anthropic tests
//! - OPENROUTER_API_KEY: For OpenRouter tests

pub mod live_providers;
