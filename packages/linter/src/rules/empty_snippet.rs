use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use codeframe_parser::ast::SnippetBlock;

/// Warns when a snippet body is empty after newline trimming.
pub struct EmptySnippetRule;

impl LintRule for EmptySnippetRule {
    fn name(&self) -> &'static str {
        "empty-snippet"
    }

    fn description(&self) -> &'static str {
        "Snippet blocks should not be empty"
    }

    fn check_snippet(&self, snippet: &SnippetBlock) -> Vec<Diagnostic> {
        if !snippet.body.trim().is_empty() {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "empty-snippet",
            "Snippet block has an empty body",
            snippet.span.clone(),
        )
        .with_suggestion("Add the snippet's source, or remove the block")]
    }
}
