//! Reversible arithmetic operations.
//!
//! An operation is a plain value (kind plus operand). It holds no reference to
//! the register it acts on; the register is passed in explicitly to `apply`
//! and `invert`.

use super::error::CalcError;
use super::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reversible unit of arithmetic work.
///
/// Construction never fails, even with a zero operand. Division by zero is
/// only reported when the operation is applied or inverted.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operation, Register};
///
/// let mut register = Register::new();
/// let op = Operation::Add(10.0);
///
/// op.apply(&mut register).unwrap();
/// assert_eq!(register.value(), 10.0);
///
/// op.invert(&mut register).unwrap();
/// assert_eq!(register.value(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
}

impl Operation {
    /// The operand this operation was built with.
    pub fn operand(&self) -> f64 {
        match *self {
            Self::Add(v) | Self::Subtract(v) | Self::Multiply(v) | Self::Divide(v) => v,
        }
    }

    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Subtract(_) => "subtract",
            Self::Multiply(_) => "multiply",
            Self::Divide(_) => "divide",
        }
    }

    fn symbol(&self) -> char {
        match self {
            Self::Add(_) => '+',
            Self::Subtract(_) => '-',
            Self::Multiply(_) => '*',
            Self::Divide(_) => '/',
        }
    }

    /// The sibling operation that undoes this one.
    ///
    /// ```rust
    /// use tally::core::Operation;
    ///
    /// assert_eq!(Operation::Add(3.0).inverse(), Operation::Subtract(3.0));
    /// assert_eq!(Operation::Multiply(2.0).inverse(), Operation::Divide(2.0));
    /// ```
    pub fn inverse(&self) -> Operation {
        match *self {
            Self::Add(v) => Self::Subtract(v),
            Self::Subtract(v) => Self::Add(v),
            Self::Multiply(v) => Self::Divide(v),
            Self::Divide(v) => Self::Multiply(v),
        }
    }

    /// Check whether `invert` can ever succeed.
    ///
    /// Only `Multiply(0)` is not invertible: its inverse divides by zero.
    pub fn is_invertible(&self) -> bool {
        !matches!(self, Self::Multiply(v) if *v == 0.0)
    }

    /// Perform the forward action on `register`.
    ///
    /// Fails with [`CalcError::DivisionByZero`] for `Divide(0)`, leaving the
    /// register unchanged.
    pub fn apply(&self, register: &mut Register) -> Result<(), CalcError> {
        match *self {
            Self::Add(v) => register.add(v),
            Self::Subtract(v) => register.subtract(v),
            Self::Multiply(v) => register.multiply(v),
            Self::Divide(v) => register.divide(v)?,
        }
        Ok(())
    }

    /// Perform the algebraic inverse of `apply` on `register`.
    ///
    /// Fails with [`CalcError::DivisionByZero`] for `Multiply(0)`, leaving the
    /// register unchanged.
    pub fn invert(&self, register: &mut Register) -> Result<(), CalcError> {
        self.inverse().apply(register)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.operand())
    }
}
