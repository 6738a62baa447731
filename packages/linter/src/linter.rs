use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use codeframe_parser::ast::{Document, PreviewBlock};

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses the built-in set if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a parsed document and return diagnostics
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for preview in document.previews() {
        diagnostics.extend(lint_preview(preview, &registry));
    }

    diagnostics
}

fn lint_preview(preview: &PreviewBlock, registry: &RuleRegistry) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check_preview(preview));
    }

    for snippet in &preview.snippets {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_snippet(snippet));
        }
    }

    diagnostics
}
