//! Egyptian mobile phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input is not exactly 11 characters.
    #[error("phone number must be exactly {expected} digits, got {got}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the input.
        got: usize,
    },
    /// The input does not start with `01`.
    #[error("phone number must start with 01")]
    BadPrefix,
    /// The third digit does not name a known mobile network.
    #[error("third digit `{0}` does not match a known network (0, 1, 2 or 5)")]
    UnknownNetwork(char),
    /// A character past the network prefix is not a decimal digit.
    #[error("non-digit character `{found}` at position {at}")]
    NonDigit {
        /// Offending character.
        found: char,
        /// Zero-based position in the input.
        at: usize,
    },
}

/// Egyptian mobile network operators, identified by the `01x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// `010` numbers.
    Vodafone,
    /// `011` numbers.
    Etisalat,
    /// `012` numbers.
    Orange,
    /// `015` numbers.
    We,
}

impl Network {
    /// Returns the three-digit dialing prefix for this network.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Vodafone => "010",
            Self::Etisalat => "011",
            Self::Orange => "012",
            Self::We => "015",
        }
    }
}

/// An Egyptian mobile phone number.
///
/// ## Constraints
///
/// - Exactly 11 characters
/// - Starts with `01`
/// - Third character is one of `0`, `1`, `2`, `5` (the mobile network)
/// - Remaining 8 characters are decimal digits
///
/// ## Examples
///
/// ```
/// use connect_shop_core::PhoneNumber;
///
/// // Valid numbers
/// assert!(PhoneNumber::parse("01012345678").is_ok());
/// assert!(PhoneNumber::parse("01512345678").is_ok());
///
/// // Invalid numbers
/// assert!(PhoneNumber::parse("").is_err());            // empty
/// assert!(PhoneNumber::parse("0101234567").is_err());  // too short
/// assert!(PhoneNumber::parse("01312345678").is_err()); // no 013 network
/// assert!(PhoneNumber::parse("0101234567a").is_err()); // non-digit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Length of an Egyptian mobile number.
    pub const LENGTH: usize = 11;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is not exactly 11 characters
    /// - Does not start with `01`
    /// - Has a third digit outside `{0, 1, 2, 5}`
    /// - Contains a non-digit character
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let len = s.chars().count();
        if len != Self::LENGTH {
            return Err(PhoneError::WrongLength {
                expected: Self::LENGTH,
                got: len,
            });
        }

        let mut chars = s.chars().enumerate();
        // len == 11, so the first three always exist
        let first = chars.next().map(|(_, c)| c);
        let second = chars.next().map(|(_, c)| c);
        if first != Some('0') || second != Some('1') {
            return Err(PhoneError::BadPrefix);
        }

        match chars.next().map(|(_, c)| c) {
            Some('0' | '1' | '2' | '5') => {}
            Some(c) => return Err(PhoneError::UnknownNetwork(c)),
            None => return Err(PhoneError::BadPrefix),
        }

        for (at, found) in chars {
            if !found.is_ascii_digit() {
                return Err(PhoneError::NonDigit { found, at });
            }
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns true iff `s` parses as a valid Egyptian mobile number.
    ///
    /// Convenience form of [`PhoneNumber::parse`] for callers that only
    /// need the yes/no answer. Never panics.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the mobile network this number belongs to.
    #[must_use]
    pub fn network(&self) -> Network {
        // parse() guarantees the third character is one of 0, 1, 2, 5
        match self.0.as_bytes().get(2) {
            Some(b'0') => Network::Vodafone,
            Some(b'1') => Network::Etisalat,
            Some(b'2') => Network::Orange,
            _ => Network::We,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Rusqlite support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl rusqlite::types::ToSql for PhoneNumber {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

#[cfg(feature = "sqlite")]
impl rusqlite::types::FromSql for PhoneNumber {
    fn column_result(
        value: rusqlite::types::ValueRef<'_>,
    ) -> rusqlite::types::FromSqlResult<Self> {
        let s = String::column_result(value)?;
        Self::parse(&s).map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))
    }
}
