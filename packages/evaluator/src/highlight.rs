//! Build-time syntax highlighting for listing blocks.
//!
//! Each supported language gets a small logos lexer that classifies tokens
//! into a fixed set of `hl-*` span classes; everything else (including
//! unknown languages) is emitted as escaped plain text. The output is
//! static markup — no highlighter runs in the visitor's browser.

use crate::escape::escape_text;
use crate::fragment::Language;
use logos::Logos;

/// Highlight a fragment body for its listing block. The result is
/// HTML-escaped and safe for the HTML text context.
pub fn highlight(language: &Language, source: &str) -> String {
    match language {
        Language::Css => highlight_with::<CssToken>(source),
        Language::Javascript => highlight_with::<JsToken>(source),
        Language::Html => highlight_with::<HtmlToken>(source),
        Language::Other(_) => escape_text(source),
    }
}

/// Token class assignment for one language's lexer
trait ClassifiedToken {
    fn class(&self) -> Option<&'static str>;
}

fn highlight_with<'src, T>(source: &'src str) -> String
where
    T: Logos<'src, Source = str> + ClassifiedToken,
    T::Extras: Default,
{
    let mut lexer = T::lexer(source);
    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // Bytes logos skipped over (shouldn't happen without skip rules,
        // but never drop input)
        if span.start > cursor {
            out.push_str(&escape_text(&source[cursor..span.start]));
        }

        let slice = &source[span.clone()];
        match result.ok().and_then(|token| token.class()) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&escape_text(slice));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_text(slice)),
        }
        cursor = span.end;
    }

    if cursor < source.len() {
        out.push_str(&escape_text(&source[cursor..]));
    }
    out
}

#[derive(Logos, Debug, Clone, PartialEq)]
enum CssToken {
    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    Comment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    #[regex(r"@[a-zA-Z-]+")]
    AtKeyword,

    #[regex(r"#[0-9a-fA-F]{3,8}")]
    Color,

    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|em|rem|%|vh|vw|s|ms|fr|deg)?", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z_-][a-zA-Z0-9_-]*")]
    Ident,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl ClassifiedToken for CssToken {
    fn class(&self) -> Option<&'static str> {
        match self {
            CssToken::Comment => Some("hl-comment"),
            CssToken::String => Some("hl-string"),
            CssToken::AtKeyword => Some("hl-keyword"),
            CssToken::Color | CssToken::Number => Some("hl-number"),
            CssToken::Ident | CssToken::Whitespace => None,
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
enum JsToken {
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    Comment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r"`([^`\\]|\\.)*`")]
    String,

    #[regex(
        r"(break|case|catch|class|const|continue|default|do|else|export|extends|false|finally|for|function|if|import|in|instanceof|let|new|null|of|return|super|switch|this|throw|true|try|typeof|undefined|var|while|yield|async|await)",
        priority = 10
    )]
    Keyword,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl ClassifiedToken for JsToken {
    fn class(&self) -> Option<&'static str> {
        match self {
            JsToken::Comment => Some("hl-comment"),
            JsToken::String => Some("hl-string"),
            JsToken::Keyword => Some("hl-keyword"),
            JsToken::Number => Some("hl-number"),
            JsToken::Ident | JsToken::Whitespace => None,
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
enum HtmlToken {
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->")]
    Comment,

    #[regex(r"</?[a-zA-Z][a-zA-Z0-9-]*")]
    TagName,

    #[token(">")]
    #[token("/>")]
    TagEnd,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Word,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl ClassifiedToken for HtmlToken {
    fn class(&self) -> Option<&'static str> {
        match self {
            HtmlToken::Comment => Some("hl-comment"),
            HtmlToken::TagName | HtmlToken::TagEnd => Some("hl-keyword"),
            HtmlToken::String => Some("hl-string"),
            HtmlToken::Word | HtmlToken::Whitespace => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop the highlight spans, leaving only the escaped text content.
    fn strip_spans(html: &str) -> String {
        let mut out = String::new();
        let mut rest = html;
        while let Some(start) = rest.find("<span class=\"") {
            out.push_str(&rest[..start]);
            match rest[start..].find('>') {
                Some(end) => rest = &rest[start + end + 1..],
                None => break,
            }
        }
        out.push_str(rest);
        out.replace("</span>", "")
    }

    #[test]
    fn test_highlight_never_alters_text_content() {
        let cases = [
            (Language::Css, ".x { color: #ff0000; margin: 4px; }"),
            (Language::Javascript, "const x = \"a < b\"; // note"),
            (Language::Html, "<p class=\"x\">hi &amp; bye</p>"),
            (Language::Other("foo".to_string()), "plain <text>"),
        ];
        for (language, source) in &cases {
            let highlighted = highlight(language, source);
            assert_eq!(
                strip_spans(&highlighted),
                escape_text(source),
                "language: {:?}",
                language
            );
        }
    }

    #[test]
    fn test_css_classes() {
        let highlighted = highlight(&Language::Css, "/* note */ .x { color: #fff; width: 10px; }");
        assert!(highlighted.contains("<span class=\"hl-comment\">/* note */</span>"));
        assert!(highlighted.contains("<span class=\"hl-number\">#fff</span>"));
        assert!(highlighted.contains("<span class=\"hl-number\">10px</span>"));
    }

    #[test]
    fn test_js_keywords_and_strings() {
        let highlighted = highlight(&Language::Javascript, "const greeting = 'hi';");
        assert!(highlighted.contains("<span class=\"hl-keyword\">const</span>"));
        assert!(highlighted.contains("<span class=\"hl-string\">'hi'</span>"));
        // `greeting` is an identifier, not a keyword
        assert!(!highlighted.contains("<span class=\"hl-keyword\">greeting</span>"));
    }

    #[test]
    fn test_js_keyword_prefix_is_not_keyword() {
        let highlighted = highlight(&Language::Javascript, "constant");
        assert!(!highlighted.contains("hl-keyword"));
    }

    #[test]
    fn test_html_output_is_escaped() {
        let highlighted = highlight(&Language::Html, "<p>hi</p>");
        assert!(!highlighted.contains("<p>"));
        assert!(highlighted.contains("&lt;p"));
        assert!(highlighted.contains("<span class=\"hl-keyword\">&lt;p</span>"));
    }

    #[test]
    fn test_unknown_language_is_plain_escaped() {
        let highlighted = highlight(&Language::Other("foo".to_string()), "a < b");
        assert_eq!(highlighted, "a &lt; b");
    }
}
