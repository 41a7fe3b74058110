//! Transfer amount type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// A character is not a decimal digit.
    #[error("non-digit character `{found}` at position {at}")]
    NonDigit {
        /// Offending character.
        found: char,
        /// Zero-based position in the input.
        at: usize,
    },
}

/// A whole-pound transfer amount.
///
/// The USSD transfer menu only accepts whole amounts, so an `Amount` is a
/// non-empty string of decimal digits. Signs, decimal points and whitespace
/// are rejected.
///
/// ## Examples
///
/// ```
/// use connect_shop_core::Amount;
///
/// assert!(Amount::parse("100").is_ok());
/// assert!(Amount::parse("").is_err());    // empty
/// assert!(Amount::parse("1.5").is_err()); // fractional
/// assert!(Amount::parse("-5").is_err());  // signed
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    /// Parse an `Amount` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains any character
    /// that is not an ASCII decimal digit.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        for (at, found) in s.chars().enumerate() {
            if !found.is_ascii_digit() {
                return Err(AmountError::NonDigit { found, at });
            }
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns true iff `s` parses as a valid amount.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the amount as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Amount` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Amount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert!(Amount::parse("100").is_ok());
        assert!(Amount::parse("0").is_ok());
        assert!(Amount::parse("007").is_ok());
        assert!(Amount::parse("999999999999").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Amount::parse(""), Err(AmountError::Empty)));
    }

    #[test]
    fn test_parse_rejects_fraction() {
        assert!(matches!(
            Amount::parse("1.5"),
            Err(AmountError::NonDigit { found: '.', at: 1 })
        ));
    }

    #[test]
    fn test_parse_rejects_sign() {
        assert!(matches!(
            Amount::parse("-5"),
            Err(AmountError::NonDigit { found: '-', at: 0 })
        ));
        assert!(matches!(
            Amount::parse("+5"),
            Err(AmountError::NonDigit { found: '+', at: 0 })
        ));
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(Amount::parse(" 5").is_err());
        assert!(Amount::parse("5 ").is_err());
        assert!(Amount::parse("5 0").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Amount::is_valid("100"));
        assert!(!Amount::is_valid("1.5"));
        assert!(!Amount::is_valid(""));
        assert!(!Amount::is_valid("-5"));
    }

    #[test]
    fn test_display() {
        let amount = Amount::parse("50").unwrap();
        assert_eq!(format!("{amount}"), "50");
    }

    #[test]
    fn test_from_str() {
        let amount: Amount = "50".parse().unwrap();
        assert_eq!(amount.as_str(), "50");
    }
}
