//! Station code and station types.

use std::fmt;

/// Error returned when parsing an invalid station short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// Longest short code accepted. Real codes are 1-4 letters.
const MAX_CODE_CHARS: usize = 6;

/// A validated station short code, e.g. "HKI" for Helsinki.
///
/// Short codes are uppercase letters and may include the Finnish
/// letters Ä and Ö (e.g. "ÄHT").
///
/// # Examples
///
/// ```
/// use station_board::domain::StationCode;
///
/// let hki = StationCode::parse("HKI").unwrap();
/// assert_eq!(hki.as_str(), "HKI");
///
/// // Lowercase is rejected by `parse` but accepted by `parse_normalized`
/// assert!(StationCode::parse("hki").is_err());
/// assert_eq!(StationCode::parse_normalized("hki").unwrap(), hki);
///
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code. The input must already be uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let count = s.chars().count();
        if count == 0 {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }
        if count > MAX_CODE_CHARS {
            return Err(InvalidStationCode {
                reason: "too long",
            });
        }
        if !s.chars().all(|c| c.is_alphabetic() && c.is_uppercase()) {
            return Err(InvalidStationCode {
                reason: "must be uppercase letters",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Parse a station code from user input, trimming and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station offered to the user: one with passenger traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub code: StationCode,
    pub name: String,
}
