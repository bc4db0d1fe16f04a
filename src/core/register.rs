//! The numeric register operations act upon.

use super::error::CalcError;
use serde::{Deserialize, Serialize};

/// Single `f64` accumulator.
///
/// The value is only changed through the four arithmetic primitives.
/// Arithmetic follows IEEE-754 double semantics; NaN and infinities are
/// whatever the arithmetic produces.
///
/// # Example
///
/// ```rust
/// use tally::core::Register;
///
/// let mut register = Register::new();
/// register.add(6.0);
/// register.multiply(7.0);
/// assert_eq!(register.value(), 42.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Register {
    value: f64,
}

impl Register {
    /// Create a register holding `0.0`.
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current value (pure)
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, v: f64) {
        self.value += v;
    }

    pub fn subtract(&mut self, v: f64) {
        self.value -= v;
    }

    pub fn multiply(&mut self, v: f64) {
        self.value *= v;
    }

    /// Divide the value by `v`.
    ///
    /// Fails with [`CalcError::DivisionByZero`] when `v` is zero (either
    /// sign). The value is not touched on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{CalcError, Register};
    ///
    /// let mut register = Register::new();
    /// register.add(9.0);
    ///
    /// assert_eq!(register.divide(0.0), Err(CalcError::DivisionByZero));
    /// assert_eq!(register.value(), 9.0);
    ///
    /// register.divide(3.0).unwrap();
    /// assert_eq!(register.value(), 3.0);
    /// ```
    pub fn divide(&mut self, v: f64) -> Result<(), CalcError> {
        if v == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        self.value /= v;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_register_starts_at_zero() {
        assert_eq!(Register::new().value(), 0.0);
        assert_eq!(Register::default(), Register::new());
    }

    #[test]
    fn primitives_mutate_value() {
        let mut register = Register::new();

        register.add(10.0);
        assert_eq!(register.value(), 10.0);

        register.subtract(4.0);
        assert_eq!(register.value(), 6.0);

        register.multiply(3.0);
        assert_eq!(register.value(), 18.0);

        register.divide(2.0).unwrap();
        assert_eq!(register.value(), 9.0);
    }

    #[test]
    fn divide_by_zero_leaves_value_unchanged() {
        let mut register = Register::new();
        register.add(5.0);

        assert_eq!(register.divide(0.0), Err(CalcError::DivisionByZero));
        assert_eq!(register.value(), 5.0);
    }

    #[test]
    fn divide_by_negative_zero_is_rejected() {
        let mut register = Register::new();
        register.add(5.0);

        assert_eq!(register.divide(-0.0), Err(CalcError::DivisionByZero));
        assert_eq!(register.value(), 5.0);
    }

    #[test]
    fn non_finite_values_follow_float_arithmetic() {
        let mut register = Register::new();
        register.add(f64::INFINITY);
        register.subtract(f64::INFINITY);
        assert!(register.value().is_nan());

        let mut register = Register::new();
        register.add(1.0);
        register.divide(f64::NAN).unwrap();
        assert!(register.value().is_nan());
    }

    #[test]
    fn register_serializes_correctly() {
        let mut register = Register::new();
        register.add(2.5);

        let json = serde_json::to_string(&register).unwrap();
        let deserialized: Register = serde_json::from_str(&json).unwrap();
        assert_eq!(register, deserialized);
    }
}
