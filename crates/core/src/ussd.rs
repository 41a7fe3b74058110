//! USSD transfer-code generation.
//!
//! The payment service is driven through the carrier's `*9*7` transfer
//! menu: dialing `*9*7*{phone}*{amount}#` sends `{amount}` pounds to
//! `{phone}`. The trailing `#` must be URL-encoded as `%23` when the code
//! is embedded in a `tel:` dial URI, and kept literal when the code is
//! shown to the user or copied to a clipboard.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Amount, PhoneNumber};

/// Short code of the carrier's money-transfer menu.
pub const SERVICE_PREFIX: &str = "*9*7";

/// How the trailing `#` of a USSD code is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminator {
    /// URL-encoded `%23`, for embedding in a `tel:` dial URI.
    Encoded,
    /// Literal `#`, for display or clipboard copy.
    Literal,
}

impl Terminator {
    /// Returns the terminator as it appears in the code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encoded => "%23",
            Self::Literal => "#",
        }
    }
}

/// Build a transfer code from raw strings.
///
/// Pure string formatting: no validation is performed, so callers must
/// validate `phone` and `amount` first. Unvalidated input produces a
/// syntactically malformed but still well-formed string; there is no fail
/// state.
#[must_use]
pub fn build_code(phone: &str, amount: &str, terminator: Terminator) -> String {
    format!("{SERVICE_PREFIX}*{phone}*{amount}{}", terminator.as_str())
}

/// A validated transfer request, ready to be rendered as a USSD code.
///
/// ## Examples
///
/// ```
/// use connect_shop_core::{Amount, PhoneNumber, TransferCode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let code = TransferCode::new(PhoneNumber::parse("01012345678")?, Amount::parse("50")?);
/// assert_eq!(code.display_code(), "*9*7*01012345678*50#");
/// assert_eq!(code.dial_uri(), "tel:*9*7*01012345678*50%23");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCode {
    phone: PhoneNumber,
    amount: Amount,
}

impl TransferCode {
    /// Create a transfer code from a validated phone and amount.
    #[must_use]
    pub const fn new(phone: PhoneNumber, amount: Amount) -> Self {
        Self { phone, amount }
    }

    /// The recipient phone number.
    #[must_use]
    pub const fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// The transfer amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Code with a URL-encoded terminator, for a dial intent.
    #[must_use]
    pub fn dial_code(&self) -> String {
        build_code(self.phone.as_str(), self.amount.as_str(), Terminator::Encoded)
    }

    /// Code with a literal `#`, for display or clipboard copy.
    #[must_use]
    pub fn display_code(&self) -> String {
        build_code(self.phone.as_str(), self.amount.as_str(), Terminator::Literal)
    }

    /// `tel:` URI that triggers the dial intent.
    #[must_use]
    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.dial_code())
    }
}

impl fmt::Display for TransferCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_code_encoded() {
        assert_eq!(
            build_code("01012345678", "50", Terminator::Encoded),
            "*9*7*01012345678*50%23"
        );
    }

    #[test]
    fn test_build_code_literal() {
        assert_eq!(
            build_code("01012345678", "50", Terminator::Literal),
            "*9*7*01012345678*50#"
        );
    }

    #[test]
    fn test_build_code_is_pure_formatting() {
        // No validation: garbage in, well-formed garbage out
        assert_eq!(build_code("abc", "", Terminator::Literal), "*9*7*abc*#");
    }

    #[test]
    fn test_transfer_code() {
        let code = TransferCode::new(
            PhoneNumber::parse("01012345678").unwrap(),
            Amount::parse("50").unwrap(),
        );
        assert_eq!(code.display_code(), "*9*7*01012345678*50#");
        assert_eq!(code.dial_code(), "*9*7*01012345678*50%23");
        assert_eq!(code.dial_uri(), "tel:*9*7*01012345678*50%23");
        assert_eq!(format!("{code}"), "*9*7*01012345678*50#");
    }
}
