use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::id_generator::IDGenerator;
use crate::tokenizer::{tokenize, tokenize_tag, unquote_string, TagToken, Token};

/// Parse a `.cf` source into a document.
pub fn parse(source: &str) -> ParseResult<Document> {
    parse_with_path(source, "untitled.cf")
}

/// Parse a `.cf` source, seeding span ids from the file path.
pub fn parse_with_path(source: &str, path: &str) -> ParseResult<Document> {
    Parser::new(source, IDGenerator::new(path)).parse_document()
}

/// A `{{ … }}` tag split into its name, closing flag, and attributes.
#[derive(Debug)]
struct ParsedTag {
    name: String,
    closing: bool,
    attributes: Vec<(String, String)>,
}

impl ParsedTag {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Recursive-descent parser over the document token stream
pub struct Parser<'src> {
    tokens: Vec<(Token<'src>, std::ops::Range<usize>)>,
    pos: usize,
    id_generator: IDGenerator,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, id_generator: IDGenerator) -> Self {
        let tokens = tokenize(source);
        Self {
            tokens,
            pos: 0,
            id_generator,
        }
    }

    #[cfg(test)]
    pub fn new_with_path(source: &'src str, path: &str) -> Self {
        Self::new(source, IDGenerator::new(path))
    }

    /// Parse a complete document
    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let mut doc = Document::new();
        let mut markup = String::new();
        let mut markup_start = 0;
        let mut markup_end = 0;

        while let Some((token, range)) = self.peek().cloned() {
            match token {
                Token::Text(text) => {
                    if markup.is_empty() {
                        markup_start = range.start;
                    }
                    markup.push_str(text);
                    markup_end = range.end;
                    self.advance();
                }
                Token::Tag(raw) => {
                    match classify_tag(raw, range.start)? {
                        Some(tag) if !tag.closing && tag.name == "preview" => {
                            self.flush_markup(&mut doc, &mut markup, markup_start, markup_end);
                            self.advance();
                            let preview = self.parse_preview(range.start, &tag)?;
                            doc.nodes.push(Node::Preview(preview));
                        }
                        Some(tag) if !tag.closing && tag.name == "snippet" => {
                            return Err(ParseError::unexpected_block(
                                "snippet",
                                range.start,
                                "snippet blocks may only appear inside a preview block",
                            ));
                        }
                        Some(tag) if tag.closing => {
                            return Err(ParseError::unexpected_closing_tag(tag.name, range.start));
                        }
                        // Unknown tag names and non-tag `{{ … }}` text pass
                        // through as page markup.
                        _ => {
                            if markup.is_empty() {
                                markup_start = range.start;
                            }
                            markup.push_str(raw);
                            markup_end = range.end;
                            self.advance();
                        }
                    }
                }
            }
        }

        self.flush_markup(&mut doc, &mut markup, markup_start, markup_end);
        Ok(doc)
    }

    fn flush_markup(
        &mut self,
        doc: &mut Document,
        markup: &mut String,
        start: usize,
        end: usize,
    ) {
        if markup.is_empty() {
            return;
        }
        doc.nodes.push(Node::Markup {
            text: std::mem::take(markup),
            span: Span::new(start, end, self.id_generator.new_id()),
        });
    }

    /// Parse the inside of a preview block, after its opening tag
    fn parse_preview(&mut self, start: usize, open: &ParsedTag) -> ParseResult<PreviewBlock> {
        let title = open.attribute("title").map(String::from);
        let mut snippets = Vec::new();

        loop {
            let Some((token, range)) = self.peek().cloned() else {
                return Err(ParseError::unclosed_block("preview", start));
            };

            match token {
                Token::Text(text) => {
                    // Whitespace between snippets is insignificant
                    if !text.trim().is_empty() {
                        return Err(ParseError::unexpected_content(
                            range.start,
                            "only snippet blocks may appear inside a preview block",
                        ));
                    }
                    self.advance();
                }
                Token::Tag(raw) => match classify_tag(raw, range.start)? {
                    Some(tag) if tag.closing && tag.name == "preview" => {
                        self.advance();
                        return Ok(PreviewBlock {
                            title,
                            snippets,
                            span: Span::new(start, range.end, self.id_generator.new_id()),
                        });
                    }
                    Some(tag) if tag.closing => {
                        return Err(ParseError::unexpected_closing_tag(tag.name, range.start));
                    }
                    Some(tag) if tag.name == "snippet" => {
                        self.advance();
                        snippets.push(self.parse_snippet(range.start, &tag)?);
                    }
                    Some(_) => {
                        return Err(ParseError::unexpected_block(
                            "preview",
                            range.start,
                            "preview blocks cannot be nested",
                        ));
                    }
                    None => {
                        return Err(ParseError::unexpected_content(
                            range.start,
                            "only snippet blocks may appear inside a preview block",
                        ));
                    }
                },
            }
        }
    }

    /// Parse a snippet body, after its opening tag.
    ///
    /// The body is everything up to the matching `{{ /snippet }}`, verbatim.
    /// Tag-shaped sequences that are not the closing tag are part of the
    /// body.
    fn parse_snippet(&mut self, start: usize, open: &ParsedTag) -> ParseResult<SnippetBlock> {
        let language = open.attribute("lang").map(String::from);
        let mut body = String::new();

        loop {
            let Some((token, range)) = self.peek().cloned() else {
                return Err(ParseError::unclosed_block("snippet", start));
            };

            match token {
                Token::Text(text) => {
                    body.push_str(text);
                    self.advance();
                }
                Token::Tag(raw) => {
                    if let Ok(Some(tag)) = classify_tag(raw, range.start) {
                        if tag.closing && tag.name == "snippet" {
                            self.advance();
                            return Ok(SnippetBlock {
                                language,
                                body,
                                span: Span::new(start, range.end, self.id_generator.new_id()),
                            });
                        }
                    }
                    body.push_str(raw);
                    self.advance();
                }
            }
        }
    }

    fn peek(&self) -> Option<&(Token<'src>, std::ops::Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Split a raw `{{ … }}` tag into name, closing flag, and attributes.
///
/// Returns `Ok(None)` for tag-shaped text that is not a codeframe directive
/// (unknown name, or contents that do not lex as a tag) — callers treat
/// those as ordinary text. Returns an error only when a known directive is
/// written with malformed attributes.
fn classify_tag(raw: &str, pos: usize) -> ParseResult<Option<ParsedTag>> {
    let inner = &raw[2..raw.len() - 2];
    let Some(tokens) = tokenize_tag(inner) else {
        return Ok(None);
    };

    let mut iter = tokens.into_iter().peekable();

    let closing = matches!(iter.peek(), Some(TagToken::Slash));
    if closing {
        iter.next();
    }

    let name = match iter.next() {
        Some(TagToken::Ident(name)) => name.to_string(),
        _ => return Ok(None),
    };

    if name != "preview" && name != "snippet" {
        return Ok(None);
    }

    if closing {
        if iter.next().is_some() {
            return Err(ParseError::malformed_tag(
                pos,
                format!("closing tag '{{{{ /{} }}}}' takes no attributes", name),
            ));
        }
        return Ok(Some(ParsedTag {
            name,
            closing,
            attributes: Vec::new(),
        }));
    }

    let mut attributes = Vec::new();
    while let Some(token) = iter.next() {
        let key = match token {
            TagToken::Ident(key) => key.to_string(),
            other => {
                return Err(ParseError::malformed_tag(
                    pos,
                    format!("expected attribute name, found {}", other),
                ));
            }
        };
        match iter.next() {
            Some(TagToken::Equals) => {}
            _ => {
                return Err(ParseError::malformed_tag(
                    pos,
                    format!("expected '=' after attribute '{}'", key),
                ));
            }
        }
        let value = match iter.next() {
            Some(TagToken::String(quoted)) => unquote_string(quoted),
            _ => {
                return Err(ParseError::malformed_tag(
                    pos,
                    format!("expected quoted value for attribute '{}'", key),
                ));
            }
        };
        attributes.push((key, value));
    }

    Ok(Some(ParsedTag {
        name,
        closing,
        attributes,
    }))
}
