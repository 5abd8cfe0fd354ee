//! LLM integration for bugforge.
//!
//! This module provides the completion-provider seam used by the debug
//! orchestrator: the [`LlmProvider`] trait plus a reqwest-backed client for
//! the Groq OpenAI-compatible chat-completions API.
//!
//! The client is a stateless handle holding only static configuration (API
//! base, credential, default model). It is `Send + Sync` and safe to share
//! behind an `Arc` across concurrent requests.
//!
//! ```ignore
//! use bugforge::llm::{GroqClient, GenerationRequest, LlmProvider, Message};
//!
//! let client = GroqClient::from_env()?;
//! let request = GenerationRequest::new("", vec![Message::user("Fix this code...")])
//!     .with_temperature(0.6)
//!     .with_max_tokens(2000);
//! let response = client.generate(request).await?;
//! let text = response.first_content().unwrap_or_default();
//! ```

pub mod client;

pub use client::{
    Choice, GenerationRequest, GenerationResponse, GroqClient, LlmProvider, Message, Usage,
};
