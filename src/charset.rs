//! Candidate character sets searched at each secret position.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered set of ASCII candidates tried at every position.
///
/// Order matters: candidates are probed in this order, and when two share
/// the maximum mean latency the one probed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charset {
    candidates: Vec<u8>,
}

impl Charset {
    /// Build a charset from the characters of `chars`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `chars` is empty, contains a non-ASCII character,
    /// or lists a character twice.
    pub fn new(chars: &str) -> Result<Self> {
        let mut candidates = Vec::with_capacity(chars.len());
        for c in chars.chars() {
            if !c.is_ascii() {
                return Err(Error::NonAsciiCandidate(c));
            }
            let byte = c as u8;
            if candidates.contains(&byte) {
                return Err(Error::DuplicateCandidate(c));
            }
            candidates.push(byte);
        }
        if candidates.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self { candidates })
    }

    /// ASCII letters (lowercase, then uppercase) followed by digits.
    pub fn alphanumeric() -> Self {
        let candidates = (b'a'..=b'z')
            .chain(b'A'..=b'Z')
            .chain(b'0'..=b'9')
            .collect();
        Self { candidates }
    }

    /// Candidates in probe order.
    pub fn candidates(&self) -> &[u8] {
        &self.candidates
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a validated charset; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether `byte` is one of the candidates.
    pub fn contains(&self, byte: u8) -> bool {
        self.candidates.contains(&byte)
    }

    /// Check that `placeholder` can never match a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaceholderInCharset`] when it collides.
    pub fn check_placeholder(&self, placeholder: u8) -> Result<()> {
        if self.contains(placeholder) {
            Err(Error::PlaceholderInCharset(char::from(placeholder)))
        } else {
            Ok(())
        }
    }

    /// Draw a secret of `len` characters uniformly from this charset.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.candidates[rng.random_range(0..self.candidates.len())]))
            .collect()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_has_62_unique_candidates() {
        let charset = Charset::alphanumeric();
        assert_eq!(charset.len(), 62);
        assert_eq!(charset.candidates()[0], b'a');
        assert_eq!(charset.candidates()[61], b'9');

        let mut sorted = charset.candidates().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 62);
    }

    #[test]
    fn test_new_preserves_order() {
        let charset = Charset::new("zabc").unwrap();
        assert_eq!(charset.candidates(), b"zabc");
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert_eq!(Charset::new(""), Err(Error::EmptyCharset));
        assert_eq!(Charset::new("abca"), Err(Error::DuplicateCandidate('a')));
        assert_eq!(Charset::new("abλ"), Err(Error::NonAsciiCandidate('λ')));
    }

    #[test]
    fn test_placeholder_check() {
        let charset = Charset::alphanumeric();
        assert!(charset.check_placeholder(b'_').is_ok());
        assert_eq!(
            charset.check_placeholder(b'q'),
            Err(Error::PlaceholderInCharset('q'))
        );
    }

    #[test]
    fn test_random_secret_draws_from_charset() {
        let charset = Charset::new("xyz").unwrap();
        let mut rng = rand::rng();
        let secret = charset.random_secret(&mut rng, 64);
        assert_eq!(secret.len(), 64);
        assert!(secret.bytes().all(|b| charset.contains(b)));
    }
}
