use crc32fast::Hasher;

/// Derive a stable document seed from a source path using CRC32.
///
/// Span ids are `<seed>-<n>`, so diagnostics and downstream tooling can
/// correlate nodes across builds of the same file.
pub fn document_seed(path: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(path.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for AST nodes within a document
#[derive(Clone)]
pub struct IDGenerator {
    seed: String,
    count: u32,
}

impl IDGenerator {
    pub fn new(path: &str) -> Self {
        Self {
            seed: document_seed(path),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(document_seed("posts/flexbox.cf"), document_seed("posts/flexbox.cf"));
        assert_ne!(document_seed("posts/flexbox.cf"), document_seed("posts/grid.cf"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = IDGenerator::new("posts/flexbox.cf");
        let first = generator.new_id();
        let second = generator.new_id();

        assert!(first.ends_with("-1"));
        assert!(second.ends_with("-2"));
        assert!(first.starts_with(generator.seed()));
    }
}
