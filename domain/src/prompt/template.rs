//! Prompt templates for the turn pipeline

use crate::turn::mode::RetrievalMode;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the router
    pub fn router_system() -> &'static str {
        r#"You decide if a question needs a web search or not.
Reply with ONLY 'search' or 'chat'. Nothing else.
- Use 'search' for: current events, news, prices, weather, recent facts
- Use 'chat' for: casual talk, general knowledge, opinions, advice"#
    }

    /// Persona shared by every reply
    pub fn persona() -> &'static str {
        "You are a chill, friendly assistant. Keep replies short and casual."
    }

    /// System prompt for the responder.
    ///
    /// With context, the persona is followed by a grounding block whose
    /// wording depends on where the context came from.
    pub fn responder_system(context: Option<&str>, mode: RetrievalMode) -> String {
        let Some(context) = context else {
            return Self::persona().to_string();
        };

        match mode {
            RetrievalMode::Summary => format!(
                "{}\n\nWeb search results:\n{}\n\nUse this to answer.",
                Self::persona(),
                context
            ),
            RetrievalMode::Structured => format!(
                "{}\n\nHere is content fetched from the web:\n{}\n\nUse this to give an accurate answer.",
                Self::persona(),
                context
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_prompt_names_both_labels() {
        let prompt = PromptTemplate::router_system();
        assert!(prompt.contains("'search'"));
        assert!(prompt.contains("'chat'"));
        assert!(prompt.contains("weather"));
    }

    #[test]
    fn test_responder_without_context_is_persona_only() {
        assert_eq!(
            PromptTemplate::responder_system(None, RetrievalMode::Structured),
            PromptTemplate::persona()
        );
    }

    #[test]
    fn test_responder_summary_context() {
        let prompt = PromptTemplate::responder_system(Some("Paris: 24°C"), RetrievalMode::Summary);
        assert!(prompt.starts_with(PromptTemplate::persona()));
        assert!(prompt.contains("Web search results:\nParis: 24°C"));
        assert!(prompt.ends_with("Use this to answer."));
    }

    #[test]
    fn test_responder_fetched_context() {
        let prompt =
            PromptTemplate::responder_system(Some("Source: x\ntext"), RetrievalMode::Structured);
        assert!(prompt.contains("Here is content fetched from the web:\nSource: x\ntext"));
        assert!(prompt.ends_with("Use this to give an accurate answer."));
    }
}
