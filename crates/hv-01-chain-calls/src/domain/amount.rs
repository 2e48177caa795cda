//! # Amount Conversion
//!
//! Exact fixed-point scaling of display amounts into on-chain integer units.
//! Everything is done on decimal digit strings and `U256`; floating point
//! never touches an amount.

use shared_types::{U256, DEFAULT_TOKEN_DECIMALS};
use std::fmt::Display;

use super::errors::ChainCallError;

/// Largest precision for which `10^decimals` fits in a `U256`.
pub const MAX_DECIMALS: u32 = 77;

/// Scale `amount` by `10^decimals` and return the exact integer.
///
/// Accepts plain decimal numerals (`"1"`, `"1.5"`, `".5"`, `"1."`) through
/// anything that implements `Display`, so string and integer inputs share one
/// path. Fractional digits beyond `decimals` are only allowed when they are
/// zeros.
pub fn to_base_units<A: Display>(amount: A, decimals: u32) -> Result<U256, ChainCallError> {
    let raw = amount.to_string();
    let invalid = || ChainCallError::InvalidAmount(raw.clone());

    if decimals > MAX_DECIMALS {
        return Err(ChainCallError::InvalidAmount(format!(
            "{raw} (precision {decimals} exceeds {MAX_DECIMALS})"
        )));
    }

    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (raw.as_str(), ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let frac_significant = frac_part.trim_end_matches('0');
    if frac_significant.len() > decimals as usize {
        return Err(ChainCallError::InvalidAmount(format!(
            "{raw} (more than {decimals} fractional digits)"
        )));
    }

    let mut digits = String::with_capacity(int_part.len() + decimals as usize);
    digits.push_str(int_part);
    digits.push_str(frac_significant);
    for _ in frac_significant.len()..decimals as usize {
        digits.push('0');
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_dec_str(digits).map_err(|_| {
        ChainCallError::InvalidAmount(format!("{raw} (exceeds 256-bit range)"))
    })
}

/// Integer string form of [`to_base_units`].
pub fn convert_amount<A: Display>(amount: A, decimals: u32) -> Result<String, ChainCallError> {
    to_base_units(amount, decimals).map(|value| value.to_string())
}

/// [`convert_amount`] with the default 18-decimal precision.
pub fn convert_default<A: Display>(amount: A) -> Result<String, ChainCallError> {
    convert_amount(amount, DEFAULT_TOKEN_DECIMALS)
}

/// Render on-chain units as a display decimal without trailing zeros.
pub fn from_base_units(value: U256, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
    } else {
        digits
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
