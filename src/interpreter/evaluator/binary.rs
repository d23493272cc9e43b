/// Dispatch from operator to implementation.
pub mod core;

/// Addition, subtraction, multiplication and truncating division.
pub mod scalar;

/// Exponentiation.
pub mod power;
