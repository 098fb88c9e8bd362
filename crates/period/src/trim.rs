//! Partial-term trimming policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which partially covered terms to drop from a term range request.
///
/// A term is partial at the leading edge when it starts before the requested
/// start date, and at the trailing edge when it has not closed by the
/// requested end date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrimPolicy {
    /// Drop a leading term that began before the requested start.
    #[serde(default)]
    pub leading: bool,
    /// Drop a trailing term that has not closed by the requested end.
    #[serde(default)]
    pub trailing: bool,
}

impl TrimPolicy {
    /// Keep partial terms at both edges.
    pub const NONE: Self = Self {
        leading: false,
        trailing: false,
    };

    /// Drop partial terms at both edges.
    pub const BOTH: Self = Self {
        leading: true,
        trailing: true,
    };

    /// Creates a policy from the two edge flags.
    pub const fn new(leading: bool, trailing: bool) -> Self {
        Self { leading, trailing }
    }

    /// Drop only the leading partial term.
    pub const fn leading() -> Self {
        Self::new(true, false)
    }

    /// Drop only the trailing partial term.
    pub const fn trailing() -> Self {
        Self::new(false, true)
    }
}

impl fmt::Display for TrimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.leading, self.trailing) {
            (false, false) => "no trim",
            (true, false) => "leading trim",
            (false, true) => "trailing trim",
            (true, true) => "leading and trailing trim",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(TrimPolicy::default(), TrimPolicy::NONE);
        assert_eq!(TrimPolicy::new(true, true), TrimPolicy::BOTH);
        assert_eq!(TrimPolicy::leading(), TrimPolicy::new(true, false));
        assert_eq!(TrimPolicy::trailing(), TrimPolicy::new(false, true));
    }

    #[test]
    fn display() {
        assert_eq!(TrimPolicy::NONE.to_string(), "no trim");
        assert_eq!(TrimPolicy::leading().to_string(), "leading trim");
        assert_eq!(TrimPolicy::trailing().to_string(), "trailing trim");
        assert_eq!(TrimPolicy::BOTH.to_string(), "leading and trailing trim");
    }
}
