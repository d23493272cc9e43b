use crate::{
    config::OverflowPolicy,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{checked_pow_wide, narrow, saturating_pow, wrapping_pow},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Non-negative exponents are computed exactly in the 128-bit domain and
    /// narrowed to 64 bits; results that do not fit go through the overflow
    /// policy. A negative exponent yields the truncated real result, which is
    /// only non-zero for bases `1` and `-1`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `policy`: Overflow handling.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the result of `base ^ exponent`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `0` raised to a negative exponent.
    /// - `Overflow` if the result does not fit and the policy is `Error`.
    ///
    /// # Example
    /// ```
    /// use minilang::{config::OverflowPolicy, interpreter::evaluator::core::Context};
    ///
    /// let wrap = OverflowPolicy::Wrap;
    /// assert_eq!(Context::eval_pow(2, 10, wrap, 1), Ok(1024));
    /// assert_eq!(Context::eval_pow(2, -1, wrap, 1), Ok(0));
    /// assert_eq!(Context::eval_pow(-1, -3, wrap, 1), Ok(-1));
    /// assert_eq!(Context::eval_pow(2, 63, wrap, 1), Ok(i64::MIN));
    /// ```
    pub fn eval_pow(base: i64,
                    exponent: i64,
                    policy: OverflowPolicy,
                    line: usize)
                    -> EvalResult<i64> {
        let Ok(exponent) = u64::try_from(exponent) else {
            return match base {
                0 => Err(RuntimeError::DivisionByZero { line }),
                1 => Ok(1),
                -1 if exponent % 2 == 0 => Ok(1),
                -1 => Ok(-1),
                _ => Ok(0),
            };
        };

        match checked_pow_wide(base, exponent).and_then(narrow) {
            Some(value) => Ok(value),
            None => policy.resolve(wrapping_pow(base, exponent),
                                   saturating_pow(base, exponent),
                                   line),
        }
    }
}
