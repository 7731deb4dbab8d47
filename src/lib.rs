//! Sentence Inspector
//!
//! A rule-based inspection engine for prose.
//!
//! This library provides:
//! - A validator contract with configuration-driven construction
//! - Sentence length and word count rules
//! - Sentence extraction and document validation
//! - Configuration management

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod validation;
pub mod validator;

// Re-exports for clean public API
pub use config::{
    Config, ConfigurationAccessor, InspectorConfig, SymbolTable, ValidatorConfiguration,
};
pub use error::{ConfigurationError, ValidationError};
pub use model::{Position, Sentence};
pub use validation::{ValidationResult, validate_document};
pub use validator::{
    ConfigurableValidator, SentenceLengthValidator, Validator, ValidatorRegistry,
    WordNumberValidator,
};
