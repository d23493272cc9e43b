use clap::ValueEnum;

use crate::error::RuntimeError;

/// What to do when an arithmetic result does not fit in 64 bits.
///
/// Applies to every operator, including the narrowing of a power computed in
/// the wider 128-bit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverflowPolicy {
    /// Two's-complement wrap-around, like fixed-width machine arithmetic.
    #[default]
    Wrap,
    /// Clamp to `i64::MIN` or `i64::MAX`.
    Saturate,
    /// Fail the run with a runtime error.
    Error,
}

impl OverflowPolicy {
    /// Picks the result for an operation that overflowed.
    ///
    /// # Parameters
    /// - `wrapped`: The wrap-around result of the operation.
    /// - `saturated`: The clamped result of the operation.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` under [`OverflowPolicy::Error`].
    ///
    /// # Example
    /// ```
    /// use minilang::config::OverflowPolicy;
    ///
    /// let wrapped = i64::MAX.wrapping_add(1);
    /// let saturated = i64::MAX.saturating_add(1);
    /// assert_eq!(OverflowPolicy::Wrap.resolve(wrapped, saturated, 1), Ok(i64::MIN));
    /// assert_eq!(OverflowPolicy::Saturate.resolve(wrapped, saturated, 1), Ok(i64::MAX));
    /// assert!(OverflowPolicy::Error.resolve(wrapped, saturated, 1).is_err());
    /// ```
    pub const fn resolve(self,
                         wrapped: i64,
                         saturated: i64,
                         line: usize)
                         -> Result<i64, RuntimeError> {
        match self {
            Self::Wrap => Ok(wrapped),
            Self::Saturate => Ok(saturated),
            Self::Error => Err(RuntimeError::Overflow { line }),
        }
    }
}

/// Settings for one interpreter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How arithmetic overflow is handled.
    pub overflow: OverflowPolicy,
}

impl Config {
    /// Creates a configuration with the given overflow policy.
    #[must_use]
    pub const fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}
