//! # Remote Module
//!
//! Alternate suggestion strategy: delegate generation to a hosted
//! chat-completion model instead of the local template engine. The prompt
//! embeds the structured profile fields; the reply is a single text blob.

pub mod adapter;
pub mod prompt;

pub use adapter::{RemoteModelAdapter, ERROR_PREFIX, NO_RESPONSE};
pub use prompt::build_prompt;
