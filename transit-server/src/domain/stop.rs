//! Stop name type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when parsing an invalid stop name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name: {reason}")]
pub struct InvalidStopName {
    reason: &'static str,
}

/// A validated stop name.
///
/// Stops are identified by name alone; there is no separate numeric ID.
/// Matching is case-insensitive: equality and hashing use a lowercased
/// form of the name, while the originally-supplied casing is retained
/// for display.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StopName;
///
/// let stop = StopName::parse("Baker Street").unwrap();
/// assert_eq!(stop.as_str(), "Baker Street");
///
/// // Comparison ignores case
/// assert_eq!(stop, StopName::parse("BAKER STREET").unwrap());
///
/// // Blank names are rejected
/// assert!(StopName::parse("").is_err());
/// assert!(StopName::parse("   ").is_err());
/// ```
#[derive(Clone)]
pub struct StopName {
    display: String,
    folded: String,
}

impl StopName {
    /// Parse a stop name from a string.
    ///
    /// Surrounding whitespace is trimmed; the result must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStopName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStopName {
                reason: "must not be blank",
            });
        }

        Ok(StopName {
            display: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// Returns the stop name in its original casing.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Returns the case-folded form used for comparison and as a graph key.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialEq for StopName {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for StopName {}

impl Hash for StopName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Debug for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopName({})", self.display)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
