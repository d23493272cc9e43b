use crate::{
    config::OverflowPolicy,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Adds two integers.
    pub fn eval_add(a: i64, b: i64, policy: OverflowPolicy, line: usize) -> EvalResult<i64> {
        a.checked_add(b)
         .map_or_else(|| policy.resolve(a.wrapping_add(b), a.saturating_add(b), line), Ok)
    }

    /// Subtracts `b` from `a`.
    pub fn eval_sub(a: i64, b: i64, policy: OverflowPolicy, line: usize) -> EvalResult<i64> {
        a.checked_sub(b)
         .map_or_else(|| policy.resolve(a.wrapping_sub(b), a.saturating_sub(b), line), Ok)
    }

    /// Multiplies two integers.
    pub fn eval_mul(a: i64, b: i64, policy: OverflowPolicy, line: usize) -> EvalResult<i64> {
        a.checked_mul(b)
         .map_or_else(|| policy.resolve(a.wrapping_mul(b), a.saturating_mul(b), line), Ok)
    }

    /// Divides `a` by `b`, truncating toward zero.
    ///
    /// The only overflowing case is `i64::MIN / -1`.
    ///
    /// # Example
    /// ```
    /// use minilang::{config::OverflowPolicy, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_div(7, 2, OverflowPolicy::Wrap, 1), Ok(3));
    /// assert_eq!(Context::eval_div(-7, 2, OverflowPolicy::Wrap, 1), Ok(-3));
    /// assert!(Context::eval_div(1, 0, OverflowPolicy::Wrap, 1).is_err());
    /// ```
    pub fn eval_div(a: i64, b: i64, policy: OverflowPolicy, line: usize) -> EvalResult<i64> {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        a.checked_div(b)
         .map_or_else(|| policy.resolve(a.wrapping_div(b), a.saturating_div(b), line), Ok)
    }
}
