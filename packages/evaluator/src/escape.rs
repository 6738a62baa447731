//! Context-aware escaping as four pure function pairs, one per embedding
//! context: HTML text, HTML attribute, CSS string, JS string.
//!
//! Every pair satisfies `unescape(escape(x)) == x` for all `x`. The inverse
//! functions exist so wrapping and embedding stay reversible; they are not
//! general-purpose HTML/CSS/JS decoders.

/// Escape text for the HTML text context (between tags).
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inverse of [`escape_text`]. `&amp;` is resolved last so escaped
/// sequences in the original text survive the round trip.
pub fn unescape_text(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Escape a value for a double-quoted HTML attribute.
///
/// Every character with special meaning in the attribute context is
/// replaced, so the browser reconstructs exactly the intended value when it
/// decodes the attribute.
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inverse of [`escape_attribute`], mirroring an HTML-attribute-decoding
/// routine for the entities the escaper emits.
pub fn unescape_attribute(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Escape a value for a double-quoted CSS string.
///
/// Newlines are not valid inside CSS strings, so they become hex escapes
/// with a terminating space (`\a `).
pub fn escape_css(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape_css`].
pub fn unescape_css(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('a') | Some('A') => {
                out.push('\n');
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            Some('d') | Some('D') => {
                out.push('\r');
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Escape a value for a double-quoted JS string literal.
///
/// `/` becomes `\/` so a `</script` sequence inside the value can never
/// terminate an enclosing script element.
pub fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' => out.push_str("\\/"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape_js`].
pub fn unescape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('/') => out.push('/'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NASTY: &[&str] = &[
        "",
        "plain",
        "<p class=\"x\">hi & 'bye'</p>",
        "a < b > c & d \" e ' f",
        "&amp; already escaped",
        "line\none\r\nline two",
        "back\\slash \\a \\n",
        "</script><script>alert(1)</script>",
        ".x { content: \"}\"; }",
    ];

    #[test]
    fn test_text_round_trip() {
        for case in NASTY {
            assert_eq!(unescape_text(&escape_text(case)), *case, "case: {:?}", case);
        }
    }

    #[test]
    fn test_attribute_round_trip() {
        for case in NASTY {
            assert_eq!(
                unescape_attribute(&escape_attribute(case)),
                *case,
                "case: {:?}",
                case
            );
        }
    }

    #[test]
    fn test_css_round_trip() {
        for case in NASTY {
            assert_eq!(unescape_css(&escape_css(case)), *case, "case: {:?}", case);
        }
    }

    #[test]
    fn test_js_round_trip() {
        for case in NASTY {
            assert_eq!(unescape_js(&escape_js(case)), *case, "case: {:?}", case);
        }
    }

    #[test]
    fn test_attribute_escapes_quotes() {
        let escaped = escape_attribute("srcdoc=\"boom\"");
        assert!(!escaped.contains('"'));
        assert!(escaped.contains("&quot;"));
    }

    #[test]
    fn test_text_leaves_quotes_alone() {
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_js_neutralizes_closing_script() {
        let escaped = escape_js("</script>");
        assert!(!escaped.contains("</script"));
        assert_eq!(unescape_js(&escaped), "</script>");
    }
}
