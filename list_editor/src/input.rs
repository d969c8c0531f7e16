//! Turning command-line arguments into list values.
//!
//! [`parse_lenient`] reads arguments the way C's `atoi` does, so any argument
//! produces a value. [`parse_strict`] accepts only complete decimal `i32`s.

use crate::error::EditorError;
use log::warn;

/// Leading whitespace, optional sign, then as many decimal digits as follow.
/// Anything after the digits is ignored; no digits at all gives 0. Out of
/// range magnitudes saturate at `i32::MIN` / `i32::MAX`.
pub fn atoi(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut magnitude: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        magnitude = (magnitude * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }

    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub fn parse_lenient<S: AsRef<str>>(args: &[S]) -> Vec<i32> {
    args.iter()
        .map(|arg| {
            let raw = arg.as_ref();
            let value = atoi(raw);
            if raw.trim().parse::<i32>().ok() != Some(value) {
                warn!("argument {raw:?} is not a clean integer, using {value}");
            }
            value
        })
        .collect()
}

pub fn parse_strict<S: AsRef<str>>(args: &[S]) -> Result<Vec<i32>, EditorError> {
    args.iter()
        .map(|arg| {
            let raw = arg.as_ref();
            raw.trim().parse::<i32>().map_err(|_| EditorError::InvalidValue {
                raw: raw.to_string(),
            })
        })
        .collect()
}
