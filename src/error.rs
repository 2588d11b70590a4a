//! Error types for attack configuration.

/// Error returned when an attack is configured with invalid parameters.
///
/// Comparisons and measurements never fail; only the search space and trial
/// count are validated, before any oracle query is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The charset contains no candidates.
    EmptyCharset,

    /// A candidate is outside ASCII.
    ///
    /// Probes are built and compared byte by byte, so every candidate must
    /// occupy exactly one byte.
    NonAsciiCandidate(char),

    /// A candidate appears more than once in the charset.
    DuplicateCandidate(char),

    /// The placeholder sentinel is also a candidate.
    ///
    /// A placeholder that can match the secret would let filler positions
    /// extend the matched prefix and corrupt the timing signal.
    PlaceholderInCharset(char),

    /// The trial count is zero, leaving no samples to average.
    ZeroTrials,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCharset => write!(f, "charset must contain at least one candidate"),
            Self::NonAsciiCandidate(c) => {
                write!(f, "charset candidate {:?} is not ASCII", c)
            }
            Self::DuplicateCandidate(c) => {
                write!(f, "charset candidate {:?} appears more than once", c)
            }
            Self::PlaceholderInCharset(c) => write!(
                f,
                "placeholder {:?} is also a charset candidate and could match the secret",
                c
            ),
            Self::ZeroTrials => write!(f, "trials per candidate must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for attack configuration.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_character() {
        let msg = Error::PlaceholderInCharset('_').to_string();
        assert!(msg.contains("'_'"), "{}", msg);

        let msg = Error::NonAsciiCandidate('é').to_string();
        assert!(msg.contains("not ASCII"), "{}", msg);
    }
}
