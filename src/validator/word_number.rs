//! Maximum word count rule.

use super::{ConfigurableValidator, Validator, integer_attribute};
use crate::config::{ConfigurationAccessor, SymbolTable};
use crate::error::{ConfigurationError, ValidationError};
use crate::model::Sentence;

/// Default maximum number of words in one sentence
pub const DEFAULT_MAX_WORD_NUMBER: usize = 30;

/// Reports sentences with more words than allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNumberValidator {
    max_word_number: usize,
}

impl WordNumberValidator {
    pub fn with_max_word_number(max_word_number: usize) -> Self {
        Self { max_word_number }
    }

    pub fn max_word_number(&self) -> usize {
        self.max_word_number
    }
}

impl Default for WordNumberValidator {
    fn default() -> Self {
        Self::with_max_word_number(DEFAULT_MAX_WORD_NUMBER)
    }
}

/// Count words separated by a single ASCII space
///
/// Only `' '` separates words; tabs and newlines stay inside tokens.
/// Empty tokens between consecutive spaces are counted, trailing empty
/// tokens are not, and text without any space is one word (even when empty).
pub fn count_words(content: &str) -> usize {
    if !content.contains(' ') {
        return 1;
    }

    content
        .split(' ')
        .rev()
        .skip_while(|token| token.is_empty())
        .count()
}

impl Validator for WordNumberValidator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let mut result = Vec::new();

        let word_number = count_words(&sentence.content);
        if word_number > self.max_word_number {
            result.push(ValidationError::new(
                Self::NAME,
                format!("The number of the words exceeds the maximum {}", word_number),
                sentence,
            ));
        }

        result
    }
}

impl ConfigurableValidator for WordNumberValidator {
    const NAME: &'static str = "WordNumber";

    fn from_config(
        config: &dyn ConfigurationAccessor,
        _symbols: &SymbolTable,
    ) -> Result<Self, ConfigurationError> {
        let max_word_number =
            integer_attribute(config, Self::NAME, "max_word_num", DEFAULT_MAX_WORD_NUMBER)?;
        Ok(Self { max_word_number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfiguration;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one two three four"), 4);
        assert_eq!(count_words("single"), 1);
        assert_eq!(count_words(""), 1);
        // Consecutive spaces yield counted empty tokens
        assert_eq!(count_words("one  two"), 3);
        assert_eq!(count_words(" leading"), 2);
        // Trailing separators are ignored
        assert_eq!(count_words("one two "), 2);
        assert_eq!(count_words("one two   "), 2);
        assert_eq!(count_words("   "), 0);
        // Only the space character separates
        assert_eq!(count_words("one\ttwo\nthree"), 1);
    }

    #[test]
    fn test_too_many_words() {
        let validator = WordNumberValidator::with_max_word_number(3);
        let errors = validator.validate(&Sentence::from_text("one two three four"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].validator, "WordNumber");
        assert_eq!(
            errors[0].message,
            "The number of the words exceeds the maximum 4"
        );
    }

    #[test]
    fn test_word_count_at_limit() {
        let validator = WordNumberValidator::with_max_word_number(3);
        assert!(validator.validate(&Sentence::from_text("one two")).is_empty());
        assert!(validator.validate(&Sentence::from_text("one two three")).is_empty());
    }

    #[test]
    fn test_configured_max_word_number() {
        let config = ValidatorConfiguration::new("WordNumber").with_attribute("max_word_num", "12");
        let validator = WordNumberValidator::from_config(&config, &SymbolTable::new()).unwrap();
        assert_eq!(validator.max_word_number(), 12);
    }

    #[test]
    fn test_missing_attribute_uses_default() {
        let config = ValidatorConfiguration::new("WordNumber");
        let validator = WordNumberValidator::from_config(&config, &SymbolTable::new()).unwrap();
        assert_eq!(validator, WordNumberValidator::default());
    }

    #[test]
    fn test_other_validators_attribute_is_ignored() {
        let config = ValidatorConfiguration::new("WordNumber").with_attribute("max_length", "abc");
        let validator = WordNumberValidator::from_config(&config, &SymbolTable::new()).unwrap();
        assert_eq!(validator.max_word_number(), DEFAULT_MAX_WORD_NUMBER);
    }

    #[test]
    fn test_malformed_attribute_fails() {
        let config = ValidatorConfiguration::new("WordNumber").with_attribute("max_word_num", "many");
        assert!(WordNumberValidator::from_config(&config, &SymbolTable::new()).is_err());
    }
}
