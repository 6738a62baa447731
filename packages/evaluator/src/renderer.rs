use crate::collector::{wrap_source, CollectedFragments};
use crate::escape::{escape_attribute, escape_text};
use crate::fragment::Language;
use crate::highlight::highlight;

/// Sandbox token set for the embeddable surface: scripts may execute,
/// same-origin document access is never granted, in either direction.
pub const SANDBOX_TOKENS: &str = "allow-scripts";

/// Minimal reset applied inside the surface document
const DOCUMENT_RESET: &str =
    "<style>html,body{margin:0;padding:8px;font-family:system-ui,sans-serif}</style>";

/// Options for widget rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render listing blocks expanded (`<details open>`)
    pub open_listing: bool,
    /// Accessible title for the surface iframe
    pub frame_title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            open_listing: false,
            frame_title: None,
        }
    }
}

/// Concatenate the wrapped forms of all fragments.
///
/// Style fragments come first so their rules are in effect before markup
/// renders; within the style group and within the markup/script group,
/// declaration order is preserved.
pub fn compose_fragments(fragments: &CollectedFragments) -> String {
    let mut out = String::new();
    for fragment in fragments
        .iter()
        .filter(|f| matches!(f.language, Language::Css))
    {
        out.push_str(&wrap_source(&fragment.language, &fragment.source));
    }
    for fragment in fragments
        .iter()
        .filter(|f| !matches!(f.language, Language::Css))
    {
        out.push_str(&wrap_source(&fragment.language, &fragment.source));
    }
    out
}

/// The complete surface document: shell plus composed fragments.
pub fn compose_document(fragments: &CollectedFragments) -> String {
    format!(
        "<!doctype html>{}{}",
        DOCUMENT_RESET,
        compose_fragments(fragments)
    )
}

/// Render one preview widget: the sandboxed surface followed by the
/// listing, with the fixed class hooks external stylesheets target.
pub fn render_preview(fragments: &CollectedFragments, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"code-preview\">\n");

    // Surface
    let title = options.frame_title.as_deref().unwrap_or("code preview");
    out.push_str("<div class=\"code-preview__surface\">\n");
    out.push_str(&format!(
        "<iframe class=\"code-preview__frame\" sandbox=\"{}\" title=\"{}\" srcdoc=\"{}\"></iframe>\n",
        SANDBOX_TOKENS,
        escape_attribute(title),
        escape_attribute(&compose_document(fragments)),
    ));
    out.push_str("</div>\n");

    // Listing, ascending position order
    out.push_str("<div class=\"code-preview__listing\">\n");
    for fragment in fragments.iter() {
        let open = if options.open_listing { " open" } else { "" };
        out.push_str(&format!(
            "<details class=\"code-preview__fragment\"{}>\n<summary>{}</summary>\n",
            open,
            escape_text(fragment.language.label()),
        ));
        out.push_str(&format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n</details>\n",
            escape_attribute(fragment.language.label()),
            highlight(&fragment.language, &fragment.source),
        ));
    }
    out.push_str("</div>\n</div>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Collector;
    use crate::escape::unescape_attribute;

    fn demo_fragments() -> CollectedFragments {
        let mut collector = Collector::new();
        collector.collect(Some("html"), "<p>hi</p>");
        collector.collect(Some("css"), ".x{color:red}");
        collector.finish()
    }

    #[test]
    fn test_styles_are_hoisted_ahead_of_markup() {
        assert_eq!(
            compose_fragments(&demo_fragments()),
            "<style>.x{color:red}</style><p>hi</p>"
        );
    }

    #[test]
    fn test_document_shell() {
        let document = compose_document(&demo_fragments());
        assert!(document.starts_with("<!doctype html><style>"));
        assert!(document.ends_with("<style>.x{color:red}</style><p>hi</p>"));
    }

    #[test]
    fn test_sandbox_allows_scripts_only() {
        let html = render_preview(&demo_fragments(), &RenderOptions::default());
        let sandbox = html
            .split("sandbox=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("sandbox attribute present");

        let tokens: Vec<_> = sandbox.split_whitespace().collect();
        assert!(tokens.contains(&"allow-scripts"));
        assert!(!tokens.contains(&"allow-same-origin"));
    }

    #[test]
    fn test_srcdoc_decodes_to_composed_document() {
        let fragments = demo_fragments();
        let html = render_preview(&fragments, &RenderOptions::default());
        let srcdoc = html
            .split("srcdoc=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("srcdoc attribute present");

        assert_eq!(unescape_attribute(srcdoc), compose_document(&fragments));
    }

    #[test]
    fn test_listing_matches_declaration_order() {
        let html = render_preview(&demo_fragments(), &RenderOptions::default());
        let html_pos = html.find("<summary>html</summary>").unwrap();
        let css_pos = html.find("<summary>css</summary>").unwrap();
        assert!(html_pos < css_pos, "listing must follow declaration order");
    }

    #[test]
    fn test_listing_shows_original_not_wrapped() {
        let html = render_preview(&demo_fragments(), &RenderOptions::default());
        let listing = html.split("code-preview__listing").nth(1).unwrap();
        // The css listing block shows the bare rule, not the style wrapper
        assert!(!listing.contains("&lt;style&gt;.x"));
    }

    #[test]
    fn test_empty_widget_renders_shell_only() {
        let fragments = Collector::new().finish();
        let html = render_preview(&fragments, &RenderOptions::default());
        assert!(html.contains("code-preview__frame"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_open_listing_option() {
        let options = RenderOptions {
            open_listing: true,
            ..Default::default()
        };
        let html = render_preview(&demo_fragments(), &options);
        assert!(html.contains("<details class=\"code-preview__fragment\" open>"));
    }

    #[test]
    fn test_frame_title_is_attribute_escaped() {
        let options = RenderOptions {
            frame_title: Some("say \"hi\"".to_string()),
            ..Default::default()
        };
        let html = render_preview(&demo_fragments(), &options);
        assert!(html.contains("title=\"say &quot;hi&quot;\""));
    }
}
