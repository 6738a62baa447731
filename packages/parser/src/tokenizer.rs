use logos::Logos;
use std::fmt;

/// Document-level tokens for `.cf` sources.
///
/// A source alternates between raw text runs and `{{ … }}` tags. Tag
/// internals are lexed separately with [`TagToken`]; attribute values may
/// not contain braces.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// A complete `{{ … }}` tag, delimiters included
    #[regex(r"\{\{[^{}]*\}\}", |lex| lex.slice())]
    Tag(&'src str),

    /// A raw text run containing no `{{` sequence
    #[regex(r"([^{]|\{[^{])+", |lex| lex.slice())]
    Text(&'src str),
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tag(s) => write!(f, "tag {}", s),
            Token::Text(_) => write!(f, "text"),
        }
    }
}

/// Tokens inside a `{{ … }}` tag: a name, an optional closing slash, and
/// `key="value"` attributes.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TagToken<'src> {
    #[token("/")]
    Slash,

    #[token("=")]
    Equals,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    String(&'src str),
}

impl<'src> fmt::Display for TagToken<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagToken::Slash => write!(f, "/"),
            TagToken::Equals => write!(f, "="),
            TagToken::Ident(s) => write!(f, "identifier '{}'", s),
            TagToken::String(s) => write!(f, "string {}", s),
        }
    }
}

/// Tokenize a source string into text runs and tags.
///
/// Lexer errors (a lone `{` at end of input, an unterminated `{{`) are
/// degraded to text tokens so no input is ever dropped; the parser merges
/// adjacent text runs.
pub fn tokenize(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => (token, span),
            Err(_) => (Token::Text(&source[span.clone()]), span),
        })
        .collect()
}

/// Tokenize the contents of a tag (the text between `{{` and `}}`).
///
/// Returns `None` if the contents contain anything that is not a name,
/// slash, equals sign, or quoted string.
pub fn tokenize_tag(inner: &str) -> Option<Vec<TagToken>> {
    TagToken::lexer(inner)
        .map(|result| result.ok())
        .collect()
}

/// Strip the surrounding quotes from a lexed string token and resolve
/// backslash escapes.
pub fn unquote_string(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(quoted);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(esc) => out.push(esc),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_tags() {
        let tokens = tokenize("hello {{ preview }} world");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].0, Token::Text("hello "));
        assert_eq!(tokens[1].0, Token::Tag("{{ preview }}"));
        assert_eq!(tokens[2].0, Token::Text(" world"));
    }

    #[test]
    fn test_single_braces_are_text() {
        let tokens = tokenize(".box { display: flex; }");
        assert!(tokens.iter().all(|(t, _)| matches!(t, Token::Text(_))));
    }

    #[test]
    fn test_trailing_brace_survives() {
        let tokens = tokenize("body {");
        let text: String = tokens
            .iter()
            .map(|(t, _)| match t {
                Token::Text(s) => *s,
                Token::Tag(s) => *s,
            })
            .collect();
        assert_eq!(text, "body {");
    }

    #[test]
    fn test_tag_tokens() {
        let tokens = tokenize_tag(r#" snippet lang="css" "#).unwrap();
        assert_eq!(tokens[0], TagToken::Ident("snippet"));
        assert_eq!(tokens[1], TagToken::Ident("lang"));
        assert_eq!(tokens[2], TagToken::Equals);
        assert_eq!(tokens[3], TagToken::String("\"css\""));
    }

    #[test]
    fn test_closing_tag_tokens() {
        let tokens = tokenize_tag(" /preview ").unwrap();
        assert_eq!(tokens[0], TagToken::Slash);
        assert_eq!(tokens[1], TagToken::Ident("preview"));
    }

    #[test]
    fn test_unquote_string() {
        assert_eq!(unquote_string("\"css\""), "css");
        assert_eq!(unquote_string(r#""a \"b\" c""#), "a \"b\" c");
        assert_eq!(unquote_string(r#""line\nbreak""#), "line\nbreak");
    }
}
