//! History controller that executes, undoes and redoes operations.
//!
//! The [`Calculator`] is the sole entry point for changing the register. Every
//! state change goes through `execute`, `undo` or `redo`, and each of them is
//! atomic: when the underlying arithmetic fails, neither the register nor the
//! stacks change.

use crate::core::{CalcError, Operation, OperationHistory, Register};
use tracing::{debug, trace};

/// Accumulator with linear undo/redo history.
///
/// Owns the register exclusively. Replaying the undo stack from `0.0`
/// always reproduces `current_value()`.
///
/// # Example
///
/// ```rust
/// use tally::{Calculator, Operation};
///
/// let mut calc = Calculator::new();
///
/// calc.execute(Operation::Add(10.0)).unwrap();
/// calc.execute(Operation::Subtract(5.0)).unwrap();
/// assert_eq!(calc.current_value(), 5.0);
///
/// calc.undo().unwrap();
/// assert_eq!(calc.current_value(), 10.0);
///
/// calc.redo().unwrap();
/// assert_eq!(calc.current_value(), 5.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    register: Register,
    history: OperationHistory,
}

impl Calculator {
    /// Create a calculator at `0.0` with empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current value (pure)
    pub fn current_value(&self) -> f64 {
        self.register.value()
    }

    /// Get the register (pure)
    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Get undo/redo history (pure)
    pub fn history(&self) -> &OperationHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply `op` and record it.
    ///
    /// On success the operation lands on the undo stack and the redo stack
    /// is discarded. On failure the error is returned and nothing changes:
    /// the register keeps its value, `op` is not recorded and pending redos
    /// survive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::{CalcError, Calculator, Operation};
    ///
    /// let mut calc = Calculator::new();
    /// calc.execute(Operation::Add(10.0)).unwrap();
    ///
    /// assert_eq!(
    ///     calc.execute(Operation::Divide(0.0)),
    ///     Err(CalcError::DivisionByZero)
    /// );
    /// assert_eq!(calc.current_value(), 10.0);
    /// assert_eq!(calc.history().undo_stack().len(), 1);
    /// ```
    pub fn execute(&mut self, op: Operation) -> Result<(), CalcError> {
        if let Err(err) = op.apply(&mut self.register) {
            debug!(operation = %op, error = %err, "operation rejected");
            return Err(err);
        }
        self.history.record(op);
        debug!(operation = %op, value = self.register.value(), "executed operation");
        Ok(())
    }

    /// Invert the most recently applied operation.
    ///
    /// A no-op when there is nothing to undo. If the inverse fails (only
    /// possible for `Multiply(0)`), the operation stays on the undo stack,
    /// the register is untouched and the error is returned.
    pub fn undo(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.history.pop_undo() else {
            trace!("nothing to undo");
            return Ok(());
        };

        if let Err(err) = op.invert(&mut self.register) {
            self.history.push_undo(op);
            debug!(operation = %op, error = %err, "undo failed");
            return Err(err);
        }

        self.history.push_redo(op);
        debug!(operation = %op, value = self.register.value(), "undid operation");
        Ok(())
    }

    /// Re-apply the most recently undone operation.
    ///
    /// A no-op when there is nothing to redo. A failing re-application leaves
    /// the operation on the redo stack and the register untouched.
    pub fn redo(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.history.pop_redo() else {
            trace!("nothing to redo");
            return Ok(());
        };

        if let Err(err) = op.apply(&mut self.register) {
            self.history.push_redo(op);
            debug!(operation = %op, error = %err, "redo failed");
            return Err(err);
        }

        self.history.push_undo(op);
        debug!(operation = %op, value = self.register.value(), "redid operation");
        Ok(())
    }

    /// Return to the initial state: value `0.0`, both stacks empty.
    pub fn reset(&mut self) {
        self.register = Register::new();
        self.history.clear();
        debug!("calculator reset");
    }
}
