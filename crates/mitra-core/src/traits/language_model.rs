use crate::errors::MitraResult;

/// Text-in, text-out language model.
pub trait ILanguageModel: Send + Sync {
    /// Complete a prompt.
    fn generate(&self, prompt: &str) -> MitraResult<String>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
