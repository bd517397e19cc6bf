use crate::domain::ports::TextGenerator;

pub const PLACEHOLDER_OUTPUT: &str =
    "Placeholder LLM output. Replace with a real text generator if desired.";

/// Stand-in generator that ignores the prompt. Swap in a model-backed
/// implementation of [`TextGenerator`] for real tips.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTextGenerator;

impl TextGenerator for PlaceholderTextGenerator {
    fn generate(&self, prompt: &str) -> String {
        tracing::debug!("Placeholder generator called with {} byte prompt", prompt.len());
        PLACEHOLDER_OUTPUT.to_string()
    }
}
