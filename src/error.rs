//! Error Types
//!
//! Violations are plain values returned by validators. Configuration
//! problems are real errors raised while building a validator.

use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

use crate::model::Sentence;

/// One rule violation found in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the rule that produced the error
    pub validator: &'static str,
    pub message: String,
    pub sentence: Sentence,
}

impl ValidationError {
    pub fn new(validator: &'static str, message: impl Into<String>, sentence: &Sentence) -> Self {
        Self {
            validator,
            message: message.into(),
            sentence: sentence.clone(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}] {}",
            self.sentence.position, self.validator, self.message
        )
    }
}

/// Failure to build a validator from its configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid value '{value}' for attribute '{attribute}' of validator '{validator}': {source}")]
    InvalidAttribute {
        validator: String,
        attribute: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown validator '{0}'")]
    UnknownValidator(String),
}
