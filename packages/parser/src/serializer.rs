use crate::ast::*;

/// Serialize a document back to canonical `.cf` source.
pub fn serialize(document: &Document) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize_document(document);
    serializer.into_output()
}

/// Writes a document as canonical source text.
///
/// Markup runs are emitted verbatim. Preview and snippet tags are placed on
/// their own lines, and snippet bodies are emitted with exactly one leading
/// and trailing newline, so reparsing yields the same trimmed fragments.
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn serialize_document(&mut self, document: &Document) {
        for node in &document.nodes {
            match node {
                Node::Markup { text, .. } => self.output.push_str(text),
                Node::Preview(preview) => self.serialize_preview(preview),
            }
        }
    }

    fn serialize_preview(&mut self, preview: &PreviewBlock) {
        self.output.push_str("{{ preview");
        if let Some(title) = &preview.title {
            self.output.push_str(" title=\"");
            self.output.push_str(&escape_attribute_value(title));
            self.output.push('"');
        }
        self.output.push_str(" }}\n");

        for snippet in &preview.snippets {
            self.serialize_snippet(snippet);
        }

        self.output.push_str("{{ /preview }}");
    }

    fn serialize_snippet(&mut self, snippet: &SnippetBlock) {
        self.output.push_str("{{ snippet");
        if let Some(language) = &snippet.language {
            self.output.push_str(" lang=\"");
            self.output.push_str(&escape_attribute_value(language));
            self.output.push('"');
        }
        self.output.push_str(" }}\n");

        self.output
            .push_str(snippet.body.trim_matches(|c| c == '\n' || c == '\r'));
        self.output.push_str("\n{{ /snippet }}\n");
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_attribute_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_serialize_round_trip() {
        let source = concat!(
            "intro\n",
            "{{ preview title=\"Demo\" }}\n",
            "{{ snippet lang=\"css\" }}\n.x{color:red}\n{{ /snippet }}\n",
            "{{ /preview }}",
        );
        let doc = parse(source).unwrap();
        let reparsed = parse(&serialize(&doc)).unwrap();

        let original: Vec<_> = doc.previews().collect();
        let round_tripped: Vec<_> = reparsed.previews().collect();
        assert_eq!(original.len(), round_tripped.len());

        for (a, b) in original.iter().zip(&round_tripped) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.snippets.len(), b.snippets.len());
            for (sa, sb) in a.snippets.iter().zip(&b.snippets) {
                assert_eq!(sa.language, sb.language);
                assert_eq!(
                    sa.body.trim_matches(|c| c == '\n' || c == '\r'),
                    sb.body.trim_matches(|c| c == '\n' || c == '\r'),
                );
            }
        }
    }

    #[test]
    fn test_serialize_escapes_title_quotes() {
        let doc = parse("{{ preview title=\"a \\\"b\\\"\" }}{{ /preview }}").unwrap();
        let out = serialize(&doc);
        assert!(out.contains("title=\"a \\\"b\\\"\""));

        let reparsed = parse(&out).unwrap();
        assert_eq!(
            reparsed.previews().next().unwrap().title.as_deref(),
            Some("a \"b\"")
        );
    }
}
