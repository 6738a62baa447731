use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Unclosed '{block}' block starting at {pos}")]
    UnclosedBlock { block: String, pos: usize },

    #[error("Unexpected closing tag '{{{{ /{block} }}}}' at {pos}")]
    UnexpectedClosingTag { block: String, pos: usize },

    #[error("Unexpected '{block}' block at {pos}: {message}")]
    UnexpectedBlock {
        block: String,
        pos: usize,
        message: String,
    },

    #[error("Malformed tag at {pos}: {message}")]
    MalformedTag { pos: usize, message: String },

    #[error("Unexpected content at {pos}: {message}")]
    UnexpectedContent { pos: usize, message: String },
}

impl ParseError {
    pub fn unclosed_block(block: impl Into<String>, pos: usize) -> Self {
        Self::UnclosedBlock {
            block: block.into(),
            pos,
        }
    }

    pub fn unexpected_closing_tag(block: impl Into<String>, pos: usize) -> Self {
        Self::UnexpectedClosingTag {
            block: block.into(),
            pos,
        }
    }

    pub fn unexpected_block(
        block: impl Into<String>,
        pos: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::UnexpectedBlock {
            block: block.into(),
            pos,
            message: message.into(),
        }
    }

    pub fn malformed_tag(pos: usize, message: impl Into<String>) -> Self {
        Self::MalformedTag {
            pos,
            message: message.into(),
        }
    }

    pub fn unexpected_content(pos: usize, message: impl Into<String>) -> Self {
        Self::UnexpectedContent {
            pos,
            message: message.into(),
        }
    }

    /// Byte offset of the error in the source
    pub fn pos(&self) -> usize {
        match self {
            Self::UnclosedBlock { pos, .. }
            | Self::UnexpectedClosingTag { pos, .. }
            | Self::UnexpectedBlock { pos, .. }
            | Self::MalformedTag { pos, .. }
            | Self::UnexpectedContent { pos, .. } => *pos,
        }
    }
}

#[cfg(feature = "pretty-errors")]
pub mod pretty {
    use super::ParseError;
    use ariadne::{Label, Report, ReportKind, Source};

    /// Format a parse error as a caret diagnostic against the source text.
    pub fn format_error(err: &ParseError, file_name: &str, source: &str) -> String {
        let pos = err.pos().min(source.len());
        let end = source[pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| pos + i)
            .unwrap_or(source.len());

        let mut buffer = Vec::new();
        let result = Report::build(ReportKind::Error, file_name, pos)
            .with_message(err.to_string())
            .with_label(Label::new((file_name, pos..end)).with_message("here"))
            .finish()
            .write((file_name, Source::from(source)), &mut buffer);

        match result {
            Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(_) => err.to_string(),
        }
    }
}
