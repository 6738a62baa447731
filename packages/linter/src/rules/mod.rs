mod empty_snippet;
mod markup_in_passthrough;
mod unknown_language;

pub use empty_snippet::EmptySnippetRule;
pub use markup_in_passthrough::MarkupInPassthroughRule;
pub use unknown_language::UnknownLanguageRule;

use crate::diagnostic::Diagnostic;
use codeframe_parser::ast::{PreviewBlock, SnippetBlock};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a preview block as a whole
    fn check_preview(&self, _preview: &PreviewBlock) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check a single snippet block
    fn check_snippet(&self, _snippet: &SnippetBlock) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(UnknownLanguageRule),
                Box::new(EmptySnippetRule),
                Box::new(MarkupInPassthroughRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
