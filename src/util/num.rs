/// Raises `base` to `exponent` in the 128-bit domain.
///
/// ## Returns
/// - `Some(i128)`: The exact power.
/// - `None`: If the power does not fit in `i128`. Such a power never fits in
///   `i64` either.
///
/// ## Example
/// ```
/// use minilang::util::num::checked_pow_wide;
///
/// assert_eq!(checked_pow_wide(2, 63), Some(1_i128 << 63));
/// assert_eq!(checked_pow_wide(-1, u64::MAX), Some(-1));
/// assert_eq!(checked_pow_wide(2, 200), None);
/// ```
#[must_use]
pub fn checked_pow_wide(base: i64, exponent: u64) -> Option<i128> {
    let mut result: i128 = 1;
    let mut square = i128::from(base);
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            square = square.checked_mul(square)?;
        }
    }
    Some(result)
}

/// Narrows a 128-bit value to `i64` if it fits.
#[must_use]
pub fn narrow(value: i128) -> Option<i64> {
    i64::try_from(value).ok()
}

/// Raises `base` to `exponent` with two's-complement wrap-around.
///
/// Unlike [`i64::wrapping_pow`] this accepts a full 64-bit exponent.
///
/// ## Example
/// ```
/// use minilang::util::num::wrapping_pow;
///
/// assert_eq!(wrapping_pow(2, 63), i64::MIN);
/// assert_eq!(wrapping_pow(2, 64), 0);
/// assert_eq!(wrapping_pow(3, 4), 81);
/// ```
#[must_use]
pub const fn wrapping_pow(base: i64, exponent: u64) -> i64 {
    let mut result: i64 = 1;
    let mut square = base;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(square);
        }
        exponent >>= 1;
        square = square.wrapping_mul(square);
    }
    result
}

/// Raises `base` to `exponent`, clamping to the `i64` range.
///
/// The sign of the clamped result is the sign of the true power: negative
/// only for a negative base and an odd exponent.
#[must_use]
pub fn saturating_pow(base: i64, exponent: u64) -> i64 {
    match checked_pow_wide(base, exponent).and_then(narrow) {
        Some(value) => value,
        None if base < 0 && exponent % 2 == 1 => i64::MIN,
        None => i64::MAX,
    }
}
