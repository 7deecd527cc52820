//! Model value object representing a chat-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat-completion models served by the OpenAI-compatible provider (Value Object)
///
/// The well-known variants are the Groq-hosted models the agent is tuned for;
/// anything else is carried through verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama models
    Llama31Instant8b,
    Llama33Versatile70b,
    // Gemma models
    Gemma2It9b,
    // Mixtral models
    Mixtral8x7b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the provider
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31Instant8b => "llama-3.1-8b-instant",
            Model::Llama33Versatile70b => "llama-3.3-70b-versatile",
            Model::Gemma2It9b => "gemma2-9b-it",
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama-3.1-8b-instant)
    fn default() -> Self {
        Model::Llama31Instant8b
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.1-8b-instant" => Model::Llama31Instant8b,
            "llama-3.3-70b-versatile" => Model::Llama33Versatile70b,
            "gemma2-9b-it" => Model::Gemma2It9b,
            "mixtral-8x7b-32768" => Model::Mixtral8x7b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_parses() {
        let model: Model = "llama-3.3-70b-versatile".parse().unwrap();
        assert_eq!(model, Model::Llama33Versatile70b);
        assert_eq!(model.to_string(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "qwen-2.5-32b".parse().unwrap();
        assert_eq!(model, Model::Custom("qwen-2.5-32b".to_string()));
        assert_eq!(model.to_string(), "qwen-2.5-32b");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Llama31Instant8b);
    }

    #[test]
    fn test_model_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Gemma2It9b).unwrap();
        assert_eq!(json, "\"gemma2-9b-it\"");
        let back: Model = serde_json::from_str("\"mixtral-8x7b-32768\"").unwrap();
        assert_eq!(back, Model::Mixtral8x7b);
    }
}
