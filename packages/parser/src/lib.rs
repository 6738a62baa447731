//! # Codeframe Parser
//!
//! Parses `.cf` page sources into a [`ast::Document`].
//!
//! A page is ordinary markup text with embedded preview widgets written as
//! two-level tag blocks:
//!
//! ```text
//! {{ preview title="Flexbox demo" }}
//! {{ snippet lang="css" }}
//! .box { display: flex; }
//! {{ /snippet }}
//! {{ /preview }}
//! ```
//!
//! Everything outside a `preview` block is passthrough markup. Snippet
//! bodies are taken verbatim between their tags; no escaping or trimming
//! happens at parse time.

pub mod ast;
pub mod error;
pub mod id_generator;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_with_path, Parser};
pub use serializer::{serialize, Serializer};
pub use tokenizer::{tokenize, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_basic() {
        let source = "before {{ preview }} after";
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 3);
    }
}
