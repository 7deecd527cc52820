//! Model sampling configuration.
//!
//! [`ModelConfig`] carries the model id and sampling parameters used for
//! both the router and the responder. It is a static value object: built
//! once at startup and handed to the use cases.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Lowest accepted temperature
pub const MIN_TEMPERATURE: f32 = 0.0;
/// Highest accepted temperature
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Model selection and sampling parameters.
///
/// # Example
///
/// ```
/// use searchlight_domain::{Model, ModelConfig};
///
/// let config = ModelConfig::default().with_temperature(0.4);
/// assert_eq!(config.model, Model::Llama31Instant8b);
/// assert_eq!(config.temperature, 0.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: Model,
    pub temperature: f32,
    /// Upper bound on reply tokens; provider default when `None`.
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl ModelConfig {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature_in_range(&self) -> bool {
        (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.model, Model::Llama31Instant8b);
        assert_eq!(config.temperature, 0.7);
        assert!(config.max_tokens.is_none());
        assert!(config.temperature_in_range());
    }

    #[test]
    fn test_temperature_range() {
        assert!(ModelConfig::default().with_temperature(0.0).temperature_in_range());
        assert!(ModelConfig::default().with_temperature(2.0).temperature_in_range());
        assert!(!ModelConfig::default().with_temperature(2.5).temperature_in_range());
        assert!(!ModelConfig::default().with_temperature(-0.1).temperature_in_range());
    }
}
