//! Validation Engine
//!
//! Orchestration of validators over documents, separate from the rules themselves.

pub mod engine;

pub use engine::{ValidationResult, validate_document, validate_sentence, validate_sentences};
