//! Validation Engine
//!
//! Runs a set of validators over sentences and collects every error.
//! Validators never see each other; the engine only aggregates.

use serde::Serialize;

use crate::document::split_sentences;
use crate::error::ValidationError;
use crate::model::Sentence;
use crate::validator::Validator;

/// Result of validating a document or a set of sentences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Errors reported by one validator
    pub fn by_validator<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.validator == name)
    }
}

/// Validate a single sentence against every validator, in order
pub fn validate_sentence(sentence: &Sentence, validators: &[Box<dyn Validator>]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for validator in validators {
        result.errors.extend(validator.validate(sentence));
    }

    result
}

/// Validate sentences in order
pub fn validate_sentences(
    sentences: &[Sentence],
    validators: &[Box<dyn Validator>],
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for sentence in sentences {
        result.extend(validate_sentence(sentence, validators));
    }

    result
}

/// Split a document into sentences and validate all of them
pub fn validate_document(content: &str, validators: &[Box<dyn Validator>]) -> ValidationResult {
    let sentences = split_sentences(content);
    log::debug!(
        "Validating {} sentences with {} validators",
        sentences.len(),
        validators.len()
    );
    validate_sentences(&sentences, validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use crate::validator::{SentenceLengthValidator, WordNumberValidator};

    fn validators() -> Vec<Box<dyn Validator>> {
        vec![
            Box::new(SentenceLengthValidator::with_max_length(10)),
            Box::new(WordNumberValidator::with_max_word_number(2)),
        ]
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        let sentence = Sentence::from_text("x");
        result.errors.push(ValidationError::new("Test", "Test error", &sentence));
        assert!(!result.is_valid());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_no_validators_no_errors() {
        let result = validate_document("Anything at all goes here.", &[]);
        assert!(result.is_valid());
    }

    #[test]
    fn test_errors_follow_validator_order() {
        let sentence = Sentence::from_text("one two three four");
        let result = validate_sentence(&sentence, &validators());
        let names: Vec<_> = result.errors.iter().map(|e| e.validator).collect();
        assert_eq!(names, vec!["SentenceLength", "WordNumber"]);
    }

    #[test]
    fn test_validate_document_positions() {
        let result = validate_document("Short. Fine.\nThis one is far too long.", &validators());
        assert_eq!(result.len(), 2);
        assert!(result.errors.iter().all(|e| e.sentence.position == Position::new(2, 0)));
        assert_eq!(result.by_validator("WordNumber").count(), 1);
    }
}
