//! Validator Registry
//!
//! Maps configuration names to validator constructors.

use super::{ConfigurableValidator, SentenceLengthValidator, Validator, WordNumberValidator};
use crate::config::{InspectorConfig, SymbolTable, ValidatorConfiguration};
use crate::error::ConfigurationError;
use std::collections::BTreeMap;

/// Builds a boxed validator from its configuration
pub type ValidatorFactory =
    fn(&ValidatorConfiguration, &SymbolTable) -> Result<Box<dyn Validator>, ConfigurationError>;

/// In-memory name → factory registry
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    factories: BTreeMap<&'static str, ValidatorFactory>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ValidatorRegistry {
    /// Registry without any validator
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry with every validator shipped in this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register::<SentenceLengthValidator>();
        registry.register::<WordNumberValidator>();
        registry
    }

    /// Register a validator type under its configuration name
    ///
    /// `V` must be `'static` because built validators are boxed as `dyn Validator`.
    pub fn register<V: ConfigurableValidator + 'static>(&mut self) {
        self.register_factory(V::NAME, build::<V>);
    }

    /// Register a factory function, replacing any factory with the same name
    pub fn register_factory(&mut self, name: &'static str, factory: ValidatorFactory) {
        self.factories.insert(name, factory);
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build one validator from its configuration
    pub fn create(
        &self,
        config: &ValidatorConfiguration,
        symbols: &SymbolTable,
    ) -> Result<Box<dyn Validator>, ConfigurationError> {
        let factory = self
            .factories
            .get(config.name.as_str())
            .ok_or_else(|| ConfigurationError::UnknownValidator(config.name.clone()))?;
        factory(config, symbols)
    }

    /// Build every validator selected by a configuration file
    ///
    /// Without an explicit list every registered validator runs with its defaults.
    pub fn build_all(
        &self,
        config: &InspectorConfig,
    ) -> Result<Vec<Box<dyn Validator>>, ConfigurationError> {
        match &config.validators {
            Some(entries) => entries
                .iter()
                .map(|entry| self.create(entry, &config.symbols))
                .collect(),
            None => self
                .names()
                .into_iter()
                .map(|name| self.create(&ValidatorConfiguration::new(name), &config.symbols))
                .collect(),
        }
    }
}

fn build<V: ConfigurableValidator + 'static>(
    config: &ValidatorConfiguration,
    symbols: &SymbolTable,
) -> Result<Box<dyn Validator>, ConfigurationError> {
    Ok(Box::new(V::from_config(config, symbols)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = ValidatorRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["SentenceLength", "WordNumber"]);
        assert!(registry.contains("WordNumber"));
        assert!(!registry.contains("Spelling"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ValidatorRegistry::new();
        assert!(registry.names().is_empty());
        let result = registry.create(&ValidatorConfiguration::new("SentenceLength"), &SymbolTable::new());
        assert!(matches!(result, Err(ConfigurationError::UnknownValidator(_))));
    }

    #[test]
    fn test_create_by_name() {
        let registry = ValidatorRegistry::with_builtin();
        let validator = registry
            .create(&ValidatorConfiguration::new("WordNumber"), &SymbolTable::new())
            .expect("create validator");
        assert_eq!(validator.name(), "WordNumber");
    }

    #[test]
    fn test_unknown_validator() {
        let registry = ValidatorRegistry::with_builtin();
        let result = registry.create(&ValidatorConfiguration::new("Spelling"), &SymbolTable::new());
        match result {
            Err(ConfigurationError::UnknownValidator(name)) => assert_eq!(name, "Spelling"),
            _ => panic!("Expected unknown validator error"),
        }
    }

    #[test]
    fn test_build_all_defaults() {
        let registry = ValidatorRegistry::with_builtin();
        let validators = registry
            .build_all(&InspectorConfig::default())
            .expect("build validators");
        let names: Vec<_> = validators.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["SentenceLength", "WordNumber"]);
    }

    #[test]
    fn test_build_all_keeps_configured_order() {
        let config = InspectorConfig {
            symbols: SymbolTable::new(),
            validators: Some(vec![
                ValidatorConfiguration::new("WordNumber"),
                ValidatorConfiguration::new("SentenceLength").with_attribute("max_length", "5"),
            ]),
        };
        let validators = ValidatorRegistry::with_builtin()
            .build_all(&config)
            .expect("build validators");
        let names: Vec<_> = validators.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["WordNumber", "SentenceLength"]);
    }

    #[test]
    fn test_build_all_propagates_configuration_error() {
        let config = InspectorConfig {
            symbols: SymbolTable::new(),
            validators: Some(vec![
                ValidatorConfiguration::new("SentenceLength").with_attribute("max_length", "abc"),
            ]),
        };
        let result = ValidatorRegistry::with_builtin().build_all(&config);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidAttribute { .. })
        ));
    }
}
