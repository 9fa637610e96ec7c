//! Train operator code type.

use std::fmt;

/// Error returned when parsing an invalid operator code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator code: {reason}")]
pub struct InvalidOperatorCode {
    reason: &'static str,
}

/// A validated operator short code, e.g. "vr".
///
/// Operator codes in the timetable feed are lowercase ASCII letters and
/// digits, optionally joined by hyphens ("vr-track").
///
/// # Examples
///
/// ```
/// use station_board::domain::OperatorCode;
///
/// let vr = OperatorCode::parse("vr").unwrap();
/// assert!(vr.matches("vr"));
/// assert!(!vr.matches("VR"));
///
/// assert!(OperatorCode::parse("VR").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OperatorCode(String);

impl OperatorCode {
    /// Parse an operator code.
    pub fn parse(s: &str) -> Result<Self, InvalidOperatorCode> {
        if s.is_empty() {
            return Err(InvalidOperatorCode {
                reason: "must not be empty",
            });
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(InvalidOperatorCode {
                reason: "must not start or end with a hyphen",
            });
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(InvalidOperatorCode {
                reason: "must be lowercase ASCII letters, digits or hyphens",
            });
        }

        Ok(OperatorCode(s.to_string()))
    }

    /// The operator running most passenger services on the network.
    pub fn vr() -> Self {
        OperatorCode("vr".to_string())
    }

    /// Whether a raw operator code from the feed names this operator.
    ///
    /// The comparison is exact, as the feed is consistent about case.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OperatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperatorCode({})", self.0)
    }
}

impl fmt::Display for OperatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(OperatorCode::parse("vr").is_ok());
        assert!(OperatorCode::parse("vr-track").is_ok());
        assert!(OperatorCode::parse("ralb").is_ok());
        assert!(OperatorCode::parse("op1").is_ok());
    }

    #[test]
    fn reject_invalid_codes() {
        assert!(OperatorCode::parse("").is_err());
        assert!(OperatorCode::parse("VR").is_err());
        assert!(OperatorCode::parse("v r").is_err());
        assert!(OperatorCode::parse("-vr").is_err());
        assert!(OperatorCode::parse("vr-").is_err());
    }

    #[test]
    fn vr_constant() {
        assert_eq!(OperatorCode::vr(), OperatorCode::parse("vr").unwrap());
    }

    #[test]
    fn matches_is_exact() {
        let vr = OperatorCode::vr();
        assert!(vr.matches("vr"));
        assert!(!vr.matches("VR"));
        assert!(!vr.matches("vr-track"));
        assert!(!vr.matches(""));
    }

    #[test]
    fn display_and_debug() {
        let code = OperatorCode::vr();
        assert_eq!(format!("{}", code), "vr");
        assert_eq!(format!("{:?}", code), "OperatorCode(vr)");
    }
}
