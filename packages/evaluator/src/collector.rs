use crate::escape::{escape_text, unescape_text};
use crate::fragment::{Fragment, Language};
use codeframe_parser::ast::PreviewBlock;
use tracing::warn;

/// Accumulates fragments for one preview widget, in declaration order.
///
/// The collecting → rendering state machine is encoded in ownership:
/// `finish()` consumes the collector and returns the read-only
/// [`CollectedFragments`] the renderer works from. A collector never
/// outlives its widget's evaluation, so state cannot leak across widgets.
#[derive(Debug)]
pub struct Collector {
    fragments: Vec<Fragment>,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Register one snippet: interpret its language tag, trim leading and
    /// trailing newlines exactly once, and store the fragment at the next
    /// position. Returns the assigned position.
    pub fn collect(&mut self, language_tag: Option<&str>, raw_body: &str) -> usize {
        let language = Language::from_tag(language_tag);
        if let (Language::Other(tag), Some(_)) = (&language, language_tag) {
            warn!(tag = %tag, "unrecognized snippet language, falling back to passthrough");
        }

        let position = self.fragments.len();
        self.fragments.push(Fragment::new(
            position,
            language,
            trim_newlines(raw_body),
        ));
        position
    }

    /// End the collecting phase. The returned fragments are read-only.
    pub fn finish(self) -> CollectedFragments {
        CollectedFragments {
            fragments: self.fragments,
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete, immutable fragment set for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFragments {
    fragments: Vec<Fragment>,
}

impl CollectedFragments {
    /// Iterate fragments in ascending position order, which is declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Evaluate a parsed preview block into its collected fragments.
pub fn evaluate_preview(preview: &PreviewBlock) -> CollectedFragments {
    let mut collector = Collector::new();
    for snippet in &preview.snippets {
        collector.collect(snippet.language.as_deref(), &snippet.body);
    }
    collector.finish()
}

/// Wrap a fragment body in the boilerplate that makes it independently
/// valid inside the embeddable surface.
pub fn wrap_source(language: &Language, source: &str) -> String {
    match language {
        Language::Css => format!("<style>{}</style>", source),
        Language::Html => source.to_string(),
        Language::Javascript => format!("<script>{}</script>", source),
        Language::Other(_) => escape_text(source),
    }
}

/// Strip the boilerplate applied by [`wrap_source`], recovering the
/// original body byte-for-byte.
pub fn unwrap_source(language: &Language, wrapped: &str) -> String {
    match language {
        Language::Css => strip_wrapper(wrapped, "<style>", "</style>"),
        Language::Html => wrapped.to_string(),
        Language::Javascript => strip_wrapper(wrapped, "<script>", "</script>"),
        Language::Other(_) => unescape_text(wrapped),
    }
}

fn strip_wrapper(wrapped: &str, prefix: &str, suffix: &str) -> String {
    wrapped
        .strip_prefix(prefix)
        .and_then(|s| s.strip_suffix(suffix))
        .unwrap_or(wrapped)
        .to_string()
}

/// Trim leading and trailing newline characters only; interior whitespace
/// and indentation are untouched.
fn trim_newlines(text: &str) -> &str {
    text.trim_matches(|c| c == '\n' || c == '\r')
}
