use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use codeframe_parser::ast::SnippetBlock;

const KNOWN_LANGUAGES: &[&str] = &["html", "css", "javascript"];

/// Warns when an untagged or unknown-language snippet body looks like
/// markup. Passthrough bodies are escaped, so the markup would show up as
/// literal text in the surface — almost always a missing `lang="html"`.
pub struct MarkupInPassthroughRule;

impl LintRule for MarkupInPassthroughRule {
    fn name(&self) -> &'static str {
        "markup-in-passthrough"
    }

    fn description(&self) -> &'static str {
        "Markup in an untagged snippet renders as escaped text"
    }

    fn check_snippet(&self, snippet: &SnippetBlock) -> Vec<Diagnostic> {
        let known = snippet
            .language
            .as_deref()
            .map(|tag| KNOWN_LANGUAGES.contains(&tag.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if known {
            return Vec::new();
        }

        if !looks_like_markup(&snippet.body) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "markup-in-passthrough",
            "Snippet body looks like markup but will render as escaped text",
            snippet.span.clone(),
        )
        .with_suggestion("Tag the snippet with lang=\"html\" if the body is markup")]
    }
}

/// A `<` immediately followed by a letter or `/` is treated as a tag start.
fn looks_like_markup(body: &str) -> bool {
    let bytes = body.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'<'
            && bytes
                .get(i + 1)
                .map(|&next| next.is_ascii_alphabetic() || next == b'/')
                .unwrap_or(false)
    })
}
