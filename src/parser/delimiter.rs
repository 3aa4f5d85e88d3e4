//! Delimiter sniffing on the header line

/// Pick the delimiter for a header line.
///
/// Every candidate that occurs in `header` overrides the previous pick, so the
/// last candidate present in `candidates` order wins. Frequency and position
/// are not considered.
pub fn detect_delimiter(header: &str, candidates: &[char], fallback: char) -> char {
    let mut delimiter = fallback;
    for &candidate in candidates {
        if header.contains(candidate) {
            delimiter = candidate;
        }
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CANDIDATES, DEFAULT_FALLBACK};

    fn detect(header: &str) -> char {
        detect_delimiter(header, &DEFAULT_CANDIDATES, DEFAULT_FALLBACK)
    }

    #[test]
    fn test_single_candidate() {
        assert_eq!(detect("a,b,c"), ',');
        assert_eq!(detect("a;b;c"), ';');
        assert_eq!(detect("a:b"), ':');
        assert_eq!(detect("a\tb"), '\t');
    }

    #[test]
    fn test_later_candidate_wins() {
        assert_eq!(detect("a;b,c"), ',');
        assert_eq!(detect("a\tb;c"), '\t');
        assert_eq!(detect("a,b:c;d"), ':');
        assert_eq!(detect("a;b,c:d\te"), '\t');
    }

    #[test]
    fn test_frequency_is_ignored() {
        assert_eq!(detect("a;b;c;d,e"), ',');
    }

    #[test]
    fn test_fallback() {
        assert_eq!(detect("single"), ';');
        assert_eq!(detect(""), ';');
        assert_eq!(detect_delimiter("a|b", &['|'], ';'), '|');
        assert_eq!(detect_delimiter("a|b", &[], '#'), '#');
    }
}
