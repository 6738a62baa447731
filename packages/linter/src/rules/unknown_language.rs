use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use codeframe_parser::ast::SnippetBlock;

const KNOWN_LANGUAGES: &[&str] = &["html", "css", "javascript"];

/// Warns when a snippet's language tag is not one the renderer knows.
///
/// Such snippets still build — they fall back to escaped passthrough — but
/// the author usually meant one of the known tags.
pub struct UnknownLanguageRule;

impl LintRule for UnknownLanguageRule {
    fn name(&self) -> &'static str {
        "unknown-language"
    }

    fn description(&self) -> &'static str {
        "Snippet language tags should be html, css, or javascript"
    }

    fn check_snippet(&self, snippet: &SnippetBlock) -> Vec<Diagnostic> {
        let Some(language) = &snippet.language else {
            return Vec::new();
        };

        if KNOWN_LANGUAGES.contains(&language.to_ascii_lowercase().as_str()) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "unknown-language",
            format!(
                "Unknown snippet language '{}'; the body will render as escaped text",
                language
            ),
            snippet.span.clone(),
        )
        .with_suggestion("Use one of: html, css, javascript")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeframe_parser::ast::Span;

    fn snippet(language: Option<&str>) -> SnippetBlock {
        SnippetBlock {
            language: language.map(String::from),
            body: "x".to_string(),
            span: Span::new(0, 1, "test-1".to_string()),
        }
    }

    #[test]
    fn test_flags_unknown_tag() {
        let diagnostics = UnknownLanguageRule.check_snippet(&snippet(Some("coffeescript")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "unknown-language");
    }

    #[test]
    fn test_allows_known_tags() {
        for tag in ["html", "css", "javascript", "CSS"] {
            assert!(UnknownLanguageRule.check_snippet(&snippet(Some(tag))).is_empty());
        }
    }

    #[test]
    fn test_missing_tag_is_not_flagged() {
        assert!(UnknownLanguageRule.check_snippet(&snippet(None)).is_empty());
    }
}
