//! Configuration handling for delimtab

/// Delimiters tried while sniffing a header line, in priority order
pub const DEFAULT_CANDIDATES: [char; 4] = [';', ',', ':', '\t'];

/// Delimiter used when the header contains no candidate
pub const DEFAULT_FALLBACK: char = ';';

/// Delimiter used by the writer unless told otherwise
pub const DEFAULT_WRITE_DELIMITER: char = ',';

/// Output format for the demo binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Options for reading and writing tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Candidate delimiters, tested in order; the last one present wins
    pub delimiter_candidates: Vec<char>,
    /// Delimiter used when no candidate appears in the header
    pub fallback_delimiter: char,
    /// Forced input delimiter, skips sniffing
    pub delimiter: Option<char>,
    /// Delimiter used by the writer
    pub write_delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter_candidates: DEFAULT_CANDIDATES.to_vec(),
            fallback_delimiter: DEFAULT_FALLBACK,
            delimiter: None,
            write_delimiter: DEFAULT_WRITE_DELIMITER,
        }
    }
}

impl Config {
    /// Create a new Config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sniffing candidates
    pub fn with_delimiter_candidates(mut self, candidates: Vec<char>) -> Self {
        self.delimiter_candidates = candidates;
        self
    }

    /// Set the fallback delimiter
    pub fn with_fallback_delimiter(mut self, delimiter: char) -> Self {
        self.fallback_delimiter = delimiter;
        self
    }

    /// Force the input delimiter instead of sniffing it
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the writer delimiter
    pub fn with_write_delimiter(mut self, delimiter: char) -> Self {
        self.write_delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.delimiter_candidates, vec![';', ',', ':', '\t']);
        assert_eq!(config.fallback_delimiter, ';');
        assert_eq!(config.delimiter, None);
        assert_eq!(config.write_delimiter, ',');
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_delimiter('|')
            .with_write_delimiter('\t')
            .with_fallback_delimiter(',');
        assert_eq!(config.delimiter, Some('|'));
        assert_eq!(config.write_delimiter, '\t');
        assert_eq!(config.fallback_delimiter, ',');
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
