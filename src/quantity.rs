//! Wire-format quantity conversions.
//!
//! Quantities are non-negative integers encoded as `0x` prefixed hexadecimal
//! strings with no superfluous leading zeros (zero itself is `0x0`). Decoding
//! additionally accepts leading zeros and uppercase digits.

use chrono::{DateTime, Utc};
use ethprim::{AsU256, U256};
use thiserror::Error;

/// A malformed quantity string.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvalidQuantity {
    #[error("quantity missing '0x' prefix")]
    MissingPrefix,
    #[error("quantity has no digits")]
    Empty,
    #[error("quantity contains invalid hex digits")]
    InvalidDigits,
    #[error("quantity out of range")]
    OutOfRange,
}

/// Decodes a quantity string into an unsigned integer.
pub fn quantity_to_integer(quantity: &str) -> Result<U256, InvalidQuantity> {
    let hex = quantity
        .strip_prefix("0x")
        .ok_or(InvalidQuantity::MissingPrefix)?;
    if hex.is_empty() {
        return Err(InvalidQuantity::Empty);
    }
    // `from_str_radix` also accepts a leading sign character.
    if !hex.bytes().all(|digit| digit.is_ascii_hexdigit()) {
        return Err(InvalidQuantity::InvalidDigits);
    }

    U256::from_str_radix(hex, 16).map_err(|_| InvalidQuantity::OutOfRange)
}

/// Encodes an unsigned integer as a quantity string.
pub fn integer_to_quantity(integer: impl AsU256) -> String {
    format!("{:#x}", integer.as_u256())
}

/// Decodes a transaction or block nonce, which fits in 8 bytes.
pub fn nonce_to_integer(quantity: &str) -> Result<u64, InvalidQuantity> {
    let integer = quantity_to_integer(quantity)?;
    u64::try_from(integer).map_err(|_| InvalidQuantity::OutOfRange)
}

/// Decodes a quantity holding seconds since the Unix epoch into a UTC
/// timestamp.
pub fn timestamp_to_datetime(quantity: &str) -> Result<DateTime<Utc>, InvalidQuantity> {
    let integer = quantity_to_integer(quantity)?;
    let seconds = u64::try_from(integer).map_err(|_| InvalidQuantity::OutOfRange)?;
    unix_to_datetime(seconds).ok_or(InvalidQuantity::OutOfRange)
}

pub(crate) fn unix_to_datetime(seconds: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(seconds).ok()?, 0)
}
