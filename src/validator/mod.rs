//! Validators
//!
//! Every rule implements [`Validator`] for inspection and
//! [`ConfigurableValidator`] for construction from configuration.

pub mod registry;
pub mod sentence_length;
pub mod word_number;

pub use registry::{ValidatorFactory, ValidatorRegistry};
pub use sentence_length::SentenceLengthValidator;
pub use word_number::WordNumberValidator;

use crate::config::{ConfigurationAccessor, SymbolTable};
use crate::error::{ConfigurationError, ValidationError};
use crate::model::Sentence;

/// A rule that inspects one sentence at a time
///
/// Implementations hold only tunables fixed at construction, so a single
/// instance can be shared across threads.
pub trait Validator: Send + Sync {
    /// Rule identity reported in every error
    fn name(&self) -> &'static str;

    /// Inspect a sentence; an empty vector means no violation
    fn validate(&self, sentence: &Sentence) -> Vec<ValidationError>;
}

/// A validator that can be built from configuration
///
/// `Default` is the no-configuration constructor and must yield the
/// documented defaults.
pub trait ConfigurableValidator: Validator + Default + Sized {
    /// Name used in configuration files
    const NAME: &'static str;

    fn from_config(
        config: &dyn ConfigurationAccessor,
        symbols: &SymbolTable,
    ) -> Result<Self, ConfigurationError>;
}

/// Look up an integer attribute, falling back to `default` when absent
///
/// A present value that does not parse is an error, never a silent default.
pub fn integer_attribute(
    config: &dyn ConfigurationAccessor,
    validator: &str,
    attribute: &str,
    default: usize,
) -> Result<usize, ConfigurationError> {
    match config.attribute(attribute) {
        None => {
            log::info!(
                "{} was not set for {}, using the default value {}.",
                attribute,
                validator,
                default
            );
            Ok(default)
        }
        Some(value) => value
            .parse()
            .map_err(|source| ConfigurationError::InvalidAttribute {
                validator: validator.to_string(),
                attribute: attribute.to_string(),
                value: value.to_string(),
                source,
            }),
    }
}
