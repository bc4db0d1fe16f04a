//! Tally: an arithmetic accumulator with linear undo/redo
//!
//! Tally keeps a single `f64` register and changes it only through
//! reversible operations. Every executed operation is remembered so it can be
//! undone and redone in order.
//!
//! # Core Concepts
//!
//! - **Register**: The accumulator value, starting at `0.0`
//! - **Operation**: `Add`, `Subtract`, `Multiply` or `Divide` with one operand,
//!   able to apply itself and invert its own effect
//! - **History**: Undo and redo stacks; executing a new operation discards
//!   the redo stack
//! - **Calculator**: Owns the register and the history, and is the single
//!   entry point for changes
//!
//! Division by zero is reported as [`CalcError::DivisionByZero`] and never
//! leaves the calculator half-updated.
//!
//! # Example
//!
//! ```rust
//! use tally::{CalcError, Calculator, Operation};
//!
//! let mut calc = Calculator::new();
//!
//! calc.execute(Operation::Add(10.0))?;
//! calc.execute(Operation::Subtract(5.0))?;
//! assert_eq!(calc.current_value(), 5.0);
//!
//! calc.undo()?;
//! assert_eq!(calc.current_value(), 10.0);
//!
//! calc.redo()?;
//! assert_eq!(calc.current_value(), 5.0);
//!
//! calc.execute(Operation::Multiply(2.0))?;
//! assert_eq!(calc.execute(Operation::Divide(0.0)), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.current_value(), 10.0);
//! # Ok::<(), CalcError>(())
//! ```

pub mod calculator;
pub mod core;

// Re-export commonly used types
pub use crate::calculator::Calculator;
pub use crate::core::{CalcError, Operation, OperationHistory, Register};
