use serde::{Deserialize, Serialize};
use std::fmt;

/// Snippet language, as a closed set.
///
/// Anything outside the known set is carried as [`Language::Other`] with
/// the tag as written; rendering degrades to escaped passthrough for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tag")]
pub enum Language {
    Html,
    Css,
    Javascript,
    Other(String),
}

impl Language {
    /// Interpret a snippet's `lang` attribute. Matching is
    /// case-insensitive; a missing attribute maps to `Other("text")`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => match tag.to_ascii_lowercase().as_str() {
                "html" => Language::Html,
                "css" => Language::Css,
                "javascript" => Language::Javascript,
                _ => Language::Other(tag.to_string()),
            },
            None => Language::Other("text".to_string()),
        }
    }

    /// Label shown on the fragment's listing block
    pub fn label(&self) -> &str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One collected snippet: position in declaration order, language, and the
/// newline-trimmed original text. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub position: usize,
    pub language: Language,
    pub source: String,
}

impl Fragment {
    pub fn new(position: usize, language: Language, source: impl Into<String>) -> Self {
        Self {
            position,
            language,
            source: source.into(),
        }
    }
}
