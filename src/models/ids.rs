//! Identifier for submission attempts
//!
//! Every call to the endpoint gets its own id so the log lines of one attempt
//! can be told apart from a second, overlapping one.

use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "sub-";

/// Identifies a single submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(Uuid);

impl AttemptId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(AttemptId::new(), AttemptId::new());
    }

    #[test]
    fn test_display_is_short_and_prefixed() {
        let id = AttemptId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("sub-"));
        assert_eq!(shown.len(), 12);
    }
}
