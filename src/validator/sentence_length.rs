//! Maximum sentence length rule.

use super::{ConfigurableValidator, Validator, integer_attribute};
use crate::config::{ConfigurationAccessor, SymbolTable};
use crate::error::{ConfigurationError, ValidationError};
use crate::model::Sentence;

/// Default maximum number of characters in a sentence
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Reports sentences with more characters than allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceLengthValidator {
    max_length: usize,
}

impl SentenceLengthValidator {
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for SentenceLengthValidator {
    fn default() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }
}

impl Validator for SentenceLengthValidator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let mut result = Vec::new();

        // Measured in characters, on the content verbatim
        let length = sentence.content.chars().count();
        if length > self.max_length {
            result.push(ValidationError::new(
                Self::NAME,
                format!("The length of the line exceeds the maximum {}.", length),
                sentence,
            ));
        }

        result
    }
}

impl ConfigurableValidator for SentenceLengthValidator {
    const NAME: &'static str = "SentenceLength";

    fn from_config(
        config: &dyn ConfigurationAccessor,
        _symbols: &SymbolTable,
    ) -> Result<Self, ConfigurationError> {
        let max_length = integer_attribute(config, Self::NAME, "max_length", DEFAULT_MAX_LENGTH)?;
        Ok(Self { max_length })
    }
}
