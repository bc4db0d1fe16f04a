//! Arithmetic error types.

use thiserror::Error;

/// Errors that can occur when applying or inverting an operation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// A divide primitive was invoked with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_has_readable_message() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }
}
