use std::fmt;

use serde::{Deserialize, Serialize};

/// Reasoning depth selector for models that understand the /think and
/// /no_think suffix tokens (e.g. Qwen3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningMode {
    Think,
    NoThink,
}

impl fmt::Display for ReasoningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasoningMode::Think => write!(f, "think"),
            ReasoningMode::NoThink => write!(f, "no_think"),
        }
    }
}

/// Target language for the translation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    English,
    French,
    Hindi,
    Chinese,
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetLanguage::English => "English",
            TargetLanguage::French => "French",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Chinese => "Chinese",
        };
        write!(f, "{}", name)
    }
}

/// Append the reasoning mode suffix the model expects: `{prompt} /{mode}`.
pub fn with_reasoning_mode(prompt: &str, mode: ReasoningMode) -> String {
    format!("{} /{}", prompt, mode)
}

/// Wrap the prompt in a translation instruction. English is the passthrough
/// language: the prompt is forwarded unmodified.
pub fn for_translation(prompt: &str, lang: TargetLanguage) -> String {
    if lang == TargetLanguage::English {
        prompt.to_string()
    } else {
        format!("Translate to {}: {}", lang, prompt)
    }
}
