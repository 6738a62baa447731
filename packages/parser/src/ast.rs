use serde::{Deserialize, Serialize};

/// Span information for source location tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub id: String,
}

impl Span {
    pub fn new(start: usize, end: usize, id: String) -> Self {
        Self { start, end, id }
    }
}

/// Root document node: an ordered sequence of markup runs and preview
/// widgets, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

/// One top-level document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Passthrough page markup, emitted verbatim
    Markup { text: String, span: Span },

    /// A code-preview widget
    Preview(PreviewBlock),
}

/// Outer widget block: declares zero or more snippets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewBlock {
    /// Optional display title, from the `title` attribute
    pub title: Option<String>,
    pub snippets: Vec<SnippetBlock>,
    pub span: Span,
}

/// Inner snippet block: a language tag and a verbatim body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetBlock {
    /// The `lang` attribute as written; `None` when absent
    pub language: Option<String>,
    /// Raw text between the snippet tags, untrimmed
    pub body: String,
    pub span: Span,
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Iterate over all preview widgets in document order
    pub fn previews(&self) -> impl Iterator<Item = &PreviewBlock> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Preview(preview) => Some(preview),
            Node::Markup { .. } => None,
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_serialize_with_type_tag() {
        let doc = Document {
            nodes: vec![Node::Markup {
                text: "<p>hi</p>".to_string(),
                span: Span::new(0, 9, "doc-1".to_string()),
            }],
        };

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"type\":\"Markup\""));

        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
