//! Decimal amount strings to stroops.
//!
//! One lumen (or one unit of any asset) is 10^7 stroops; amounts on the wire
//! are signed 64-bit stroop counts. Form input arrives as raw strings and is
//! only parsed here, at the transaction-building boundary.

use crate::stellar::Error;

const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Parse a decimal amount with up to seven fractional digits into stroops.
/// Rejects empty, non-numeric, zero, and out-of-range input.
pub fn to_stroops(s: &str) -> Result<i64, Error> {
    let invalid = || Error::InvalidAmount(s.to_string());
    let trimmed = s.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if frac.len() > 7
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let frac_stroops: i64 = if frac.is_empty() {
        0
    } else {
        let digits: i64 = frac.parse().map_err(|_| invalid())?;
        digits * 10_i64.pow(7 - frac.len() as u32)
    };

    let stroops = whole
        .checked_mul(STROOPS_PER_UNIT)
        .and_then(|v| v.checked_add(frac_stroops))
        .ok_or_else(invalid)?;
    if stroops == 0 {
        return Err(invalid());
    }
    Ok(stroops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_amounts() {
        assert_eq!(to_stroops("100").unwrap(), 1_000_000_000);
        assert_eq!(to_stroops("1.5").unwrap(), 15_000_000);
        assert_eq!(to_stroops("0.0000001").unwrap(), 1);
        assert_eq!(to_stroops(".5").unwrap(), 5_000_000);
        assert_eq!(to_stroops(" 25 ").unwrap(), 250_000_000);
    }

    #[test]
    fn test_rejects_bad_input() {
        for bad in ["", "abc", "1.23456789", "-1", "1.2.3", "0", "0.0", "1e3"] {
            assert!(to_stroops(bad).is_err(), "accepted {bad:?}");
        }
        // Larger than the 64-bit stroop range.
        assert!(to_stroops("9223372036854775807").is_err());
    }
}
