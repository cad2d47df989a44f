//! Resource ID Generator
//!
//! Generates the string identifiers used as primary keys: a resource-type
//! prefix followed by a dash and 21 random alphanumeric characters
//! (e.g. `thread-h_W1Plfpj0TY7wyT2PUPP` style ids).

use rand::{distr::Alphanumeric, Rng};

/// Number of random characters after the prefix.
const ID_LENGTH: usize = 21;

/// Prefixed random ID generator, injected into services as a shared handle.
#[derive(Debug, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate an id of the form `<prefix>-<21 alphanumeric chars>`.
    pub fn generate(&self, prefix: &str) -> String {
        let random: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect();

        format!("{}-{}", prefix, random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let generator = IdGenerator::new();

        let id = generator.generate("thread");

        assert!(id.starts_with("thread-"));
    }

    #[test]
    fn test_generate_length() {
        let generator = IdGenerator::new();

        let id = generator.generate("comment");

        assert_eq!(id.len(), "comment-".len() + ID_LENGTH);
    }

    #[test]
    fn test_generate_unique() {
        let generator = IdGenerator::new();

        let first = generator.generate("like");
        let second = generator.generate("like");

        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_alphanumeric_suffix() {
        let generator = IdGenerator::new();

        let id = generator.generate("reply");
        let suffix = id.strip_prefix("reply-").unwrap();

        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
