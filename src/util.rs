/// Integer power helpers.
///
/// Exponentiation is computed in the wider 128-bit domain and narrowed back to
/// 64 bits, so the evaluator can tell an exact result from an overflowing one.
/// Wrapping and saturating variants give the fallbacks for each overflow
/// policy.
pub mod num;
