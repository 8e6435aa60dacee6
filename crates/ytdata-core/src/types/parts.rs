//! The `part` parameter.

use std::fmt;

/// The resource parts an operation should include, e.g. `snippet,statistics`.
///
/// Every API method takes a `part` parameter. For reads it selects which
/// nested objects come back; for writes it names the parts the payload sets.
///
/// # Example
///
/// ```
/// use ytdata_core::Parts;
///
/// let parts = Parts::from("snippet, statistics");
/// assert_eq!(parts.to_string(), "snippet,statistics");
/// assert!(parts.contains("statistics"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parts(Vec<String>);

impl Parts {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for part in parts {
            for piece in part.as_ref().split(',') {
                let piece = piece.trim();
                if !piece.is_empty() && !out.iter().any(|p| p == piece) {
                    out.push(piece.to_string());
                }
            }
        }
        Self(out)
    }

    pub fn contains(&self, part: &str) -> bool {
        self.0.iter().any(|p| p == part)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<&str> for Parts {
    fn from(s: &str) -> Self {
        Parts::new([s])
    }
}

impl From<String> for Parts {
    fn from(s: String) -> Self {
        Parts::new([s])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Parts {
    fn from(parts: Vec<S>) -> Self {
        Parts::new(parts)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Parts {
    fn from(parts: [S; N]) -> Self {
        Parts::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_dedups() {
        let parts = Parts::from(vec!["snippet,statistics", "snippet", " status "]);
        assert_eq!(parts.to_string(), "snippet,statistics,status");
    }

    #[test]
    fn empty_pieces_are_dropped() {
        assert!(Parts::from(",,").is_empty());
    }
}
