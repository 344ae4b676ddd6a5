//! Settings shared by the index builder and the writer.

use crate::writer::Format;
use crate::{Error, Result};

/// Documents written per line by default in the text format.
pub const DEFAULT_PER_LINE: usize = 5;

/// Configures how documents are tokenized and how the index is written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Postings per line in the text format
    pub per_line: usize,
    /// Whether terms are folded to lowercase before indexing
    pub lowercase: bool,
    pub format: Format,
    /// Whether an existing output file may be replaced
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            per_line: DEFAULT_PER_LINE,
            lowercase: true,
            format: Format::Text,
            overwrite: false,
        }
    }
}

impl Config {
    pub fn with_per_line(mut self, per_line: usize) -> Config {
        self.per_line = per_line;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Config {
        self.lowercase = lowercase;
        self
    }

    pub fn with_format(mut self, format: Format) -> Config {
        self.format = format;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Config {
        self.overwrite = overwrite;
        self
    }

    /// Checks that the settings can be used together.
    pub fn validate(&self) -> Result<()> {
        if self.per_line == 0 {
            return Err(Error::InvalidArgument("postings per line must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.per_line, 5);
        assert!(config.lowercase);
        assert_eq!(config.format, Format::Text);
        assert!(!config.overwrite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
                         .with_per_line(2)
                         .with_lowercase(false)
                         .with_format(Format::Json)
                         .with_overwrite(true);
        assert_eq!(config.per_line, 2);
        assert!(!config.lowercase);
        assert_eq!(config.format, Format::Json);
        assert!(config.overwrite);
    }

    #[test]
    fn test_zero_per_line() {
        let config = Config::default().with_per_line(0);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }
}
