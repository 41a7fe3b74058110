//! Verification and code-generation commands.
//!
//! # Usage
//!
//! ```bash
//! # Check a transfer before dialing
//! connect-shop verify 01012345678 01012345678 50
//!
//! # Print the copyable code
//! connect-shop code 01012345678 50
//!
//! # Print the tel: dial URI instead
//! connect-shop code 01012345678 50 --dial
//! ```

use connect_shop_core::{Amount, AmountError, PhoneError, PhoneNumber, TransferCode};

/// Errors that can occur while verifying transfer inputs.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The phone number does not have the Egyptian mobile shape.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// The phone and its confirmation differ.
    #[error("Phone number and confirmation do not match")]
    ConfirmationMismatch,

    /// The amount is not a plain digit string.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

/// Verify a phone, its confirmation, and an amount.
///
/// Mirrors the original form's verify action: phone shape first, then the
/// confirmation match, then the amount.
///
/// # Errors
///
/// Returns the first failed check as a `VerifyError`.
pub fn verify(phone: &str, confirm: &str, amount: &str) -> Result<(), VerifyError> {
    let phone = PhoneNumber::parse(phone)?;
    if phone.as_str() != confirm {
        return Err(VerifyError::ConfirmationMismatch);
    }
    let amount = Amount::parse(amount)?;

    tracing::info!(
        "Verified: {} pounds to {} ({:?})",
        amount,
        phone,
        phone.network()
    );
    Ok(())
}

/// Build and print the transfer code for a validated phone and amount.
///
/// With `dial` set, prints the `tel:` URI with the URL-encoded terminator;
/// otherwise prints the literal-`#` code for copying.
///
/// # Errors
///
/// Returns `VerifyError` if the phone or amount fails validation.
pub fn code(phone: &str, amount: &str, dial: bool) -> Result<(), VerifyError> {
    let code = TransferCode::new(PhoneNumber::parse(phone)?, Amount::parse(amount)?);

    if dial {
        tracing::info!("{}", code.dial_uri());
    } else {
        tracing::info!("{}", code.display_code());
    }
    Ok(())
}
