//! Fixed-precision rounding for monetary values.

/// Decimal digits kept on stored prices.
pub const PRICE_PRECISION: u32 = 2;

/// Round `value` to `digits` decimal digits, half away from zero.
///
/// Scales up by `10^digits`, adds a sign-preserving 0.5, truncates,
/// and scales back. Deterministic for all finite inputs. Note the
/// halfway cases follow the binary64 representation of the input, not
/// its decimal spelling.
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    (scaled + 0.5f64.copysign(scaled)).trunc() / factor
}

/// Normalize a price to the stored precision.
pub fn normalize_price(price: f64) -> f64 {
    round_to_precision(price, PRICE_PRECISION)
}
