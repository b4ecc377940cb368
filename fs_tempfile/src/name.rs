//! Assembling randomized file names.

use rand::distr::Alphanumeric;
use rand::Rng;

/// The number of random characters in a generated name, unless configured
/// otherwise.
pub const DEFAULT_RANDOM_LENGTH: usize = 5;

/// The fixed parts of a generated name. The full name has the form
/// `prefix + random + suffix`, followed by `.extension` if an extension is
/// given.
///
/// # Examples
///
/// ```
/// use fs_tempfile::NameSpec;
///
/// let spec = NameSpec::new().prefix("romain").suffix("neutron").extension("io");
/// assert_eq!(spec.file_name("abcde"), "romainabcdeneutron.io");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSpec {
    prefix: Option<String>,
    suffix: Option<String>,
    extension: Option<String>,
}

impl NameSpec {
    /// A spec with no prefix, suffix or extension.
    pub fn new() -> Self { Self::default() }

    /// Sets the text placed before the random part. The factory refuses
    /// parts containing path separators.
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        Self { prefix: Some(prefix.into()), ..self }
    }

    /// Sets the text placed after the random part.
    pub fn suffix(self, suffix: impl Into<String>) -> Self {
        Self { suffix: Some(suffix.into()), ..self }
    }

    /// Sets the extension, without the dot.
    pub fn extension(self, extension: impl Into<String>) -> Self {
        Self { extension: Some(extension.into()), ..self }
    }

    /// Checks, if any of the fixed parts contains a path separator. Such a
    /// name would not stay directly inside its directory.
    pub fn has_separator(&self) -> bool {
        [&self.prefix, &self.suffix, &self.extension]
            .iter()
            .filter_map(|part| part.as_deref())
            .any(|part| part.chars().any(std::path::is_separator))
    }

    /// Builds the full file name around the given random token. An empty
    /// extension counts as no extension.
    pub fn file_name(&self, token: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        match self.extension.as_deref() {
            Some(extension) if !extension.is_empty() =>
                format!("{}{}{}.{}", prefix, token, suffix, extension),
            _ => format!("{}{}{}", prefix, token, suffix),
        }
    }
}

/// A source of random name parts.
pub trait TokenSource {
    /// Returns a fresh token of `len` alphanumeric characters.
    fn token(&self, len: usize) -> String;
}

/// Draws tokens from the thread-local generator of `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn token(&self, len: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_combinations() {
        let token = "a1B2c";
        assert_eq!(NameSpec::new().file_name(token), "a1B2c");
        assert_eq!(NameSpec::new().prefix("romain").file_name(token), "romaina1B2c");
        assert_eq!(NameSpec::new().suffix("neutron").file_name(token), "a1B2cneutron");
        assert_eq!(NameSpec::new().extension("io").file_name(token), "a1B2c.io");
        assert_eq!(
            NameSpec::new().prefix("romain").extension("io").file_name(token),
            "romaina1B2c.io"
        );
        assert_eq!(
            NameSpec::new().suffix("neutron").extension("io").file_name(token),
            "a1B2cneutron.io"
        );
        assert_eq!(
            NameSpec::new().prefix("romain").suffix("neutron").extension("io").file_name(token),
            "romaina1B2cneutron.io"
        );
    }

    #[test]
    fn test_empty_extension_is_ignored() {
        assert_eq!(NameSpec::new().extension("").file_name("abcde"), "abcde");
    }

    #[test]
    fn test_has_separator() {
        assert!(!NameSpec::new().has_separator());
        assert!(!NameSpec::new().prefix("romain").suffix("neutron").extension("io").has_separator());
        assert!(NameSpec::new().prefix("../x").has_separator());
        assert!(NameSpec::new().suffix("a/").has_separator());
        assert!(NameSpec::new().extension("io/x").has_separator());
    }

    #[test]
    fn test_random_tokens() {
        let token = RandomTokens.token(DEFAULT_RANDOM_LENGTH);
        assert_eq!(token.len(), DEFAULT_RANDOM_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(RandomTokens.token(0), "");
    }

    #[test]
    fn test_random_tokens_vary() {
        // 62^16 possibilities, a repeat here means the generator is stuck
        let first = RandomTokens.token(16);
        let second = RandomTokens.token(16);
        assert_ne!(first, second);
    }
}
