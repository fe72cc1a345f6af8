use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{AxisError, AxisResult};

/// Significant digits kept by [`remove_noise`].
pub const NOISE_SIGNIFICANT_DIGITS: i32 = 10;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> AxisResult<f64> {
    value.to_f64().ok_or_else(|| {
        AxisError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[must_use]
pub fn naive_to_unix_seconds(time: NaiveDateTime) -> f64 {
    datetime_to_unix_seconds(time.and_utc())
}

/// Converts axis seconds back into a UTC calendar time, rounded to the millisecond.
///
/// Returns `None` for non-finite input or values outside chrono's range.
#[must_use]
pub fn unix_seconds_to_naive(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

/// Snaps binary floating point artifacts (`0.30000000000000004`) back to the
/// intended decimal value by rounding to [`NOISE_SIGNIFICANT_DIGITS`].
#[must_use]
pub fn remove_noise(value: f64) -> f64 {
    remove_noise_with_digits(value, NOISE_SIGNIFICANT_DIGITS)
}

#[must_use]
pub fn remove_noise_with_digits(value: f64, significant_digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() || significant_digits <= 0 {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let exponent = significant_digits - 1 - magnitude;
    // 10^exponent must stay representable for both the scale and the unscale.
    if exponent.abs() > 300 {
        return value;
    }

    let rounded = if exponent >= 0 {
        let factor = 10_f64.powi(exponent);
        (value * factor).round() / factor
    } else {
        let factor = 10_f64.powi(-exponent);
        (value / factor).round() * factor
    };

    if rounded.is_finite() { rounded } else { value }
}

/// Order-of-magnitude exponent, rounded (`1500 -> 3`, `0.02 -> -2`).
#[must_use]
pub fn exponent(value: f64) -> f64 {
    value.abs().log10().round()
}

/// Mantissa relative to [`exponent`] (`1500 -> 1.5`).
#[must_use]
pub fn mantissa(value: f64) -> f64 {
    value / 10_f64.powf(exponent(value))
}

#[cfg(test)]
mod tests {
    use super::{remove_noise, remove_noise_with_digits, unix_seconds_to_naive};

    #[test]
    fn noise_is_removed_from_decimal_sums() {
        assert_eq!(remove_noise(0.1 + 0.2), 0.3);
        assert_eq!(remove_noise(3.0 * 0.1), 0.3);
        assert_eq!(remove_noise(-0.7 + 0.1), -0.6);
    }

    #[test]
    fn noise_removal_keeps_exact_values() {
        assert_eq!(remove_noise(0.0), 0.0);
        assert_eq!(remove_noise(100.0), 100.0);
        assert_eq!(remove_noise(1e-12), 1e-12);
        assert_eq!(remove_noise(2.5e20), 2.5e20);
        assert!(remove_noise(f64::NAN).is_nan());
        assert_eq!(remove_noise(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn fewer_digits_rounds_harder() {
        assert_eq!(remove_noise_with_digits(1.23456, 3), 1.23);
    }

    #[test]
    fn unix_seconds_reject_non_finite() {
        assert!(unix_seconds_to_naive(f64::NAN).is_none());
        assert!(unix_seconds_to_naive(0.0).is_some());
    }
}
