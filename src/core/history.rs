//! Undo/redo stacks of executed operations.
//!
//! History is linear, not a tree: recording a new operation discards every
//! pending redo.

use super::error::CalcError;
use super::operation::Operation;
use super::register::Register;
use serde::{Deserialize, Serialize};

/// Pair of LIFO stacks tracking executed and undone operations.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operation, OperationHistory};
///
/// let mut history = OperationHistory::new();
/// history.record(Operation::Add(10.0));
/// history.record(Operation::Subtract(5.0));
///
/// let undone = history.pop_undo().unwrap();
/// history.push_redo(undone);
///
/// assert_eq!(history.undo_stack(), &[Operation::Add(10.0)]);
/// assert_eq!(history.redo_stack(), &[Operation::Subtract(5.0)]);
///
/// // Recording discards the redo branch
/// history.record(Operation::Multiply(2.0));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationHistory {
    undo: Vec<Operation>,
    redo: Vec<Operation>,
}

impl OperationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly executed operation.
    ///
    /// Pushes onto the undo stack and clears the redo stack.
    pub fn record(&mut self, op: Operation) {
        self.undo.push(op);
        self.redo.clear();
    }

    /// Pop the most recently applied operation
    pub fn pop_undo(&mut self) -> Option<Operation> {
        self.undo.pop()
    }

    /// Push onto the undo stack without touching the redo stack
    pub fn push_undo(&mut self, op: Operation) {
        self.undo.push(op);
    }

    /// Pop the most recently undone operation
    pub fn pop_redo(&mut self) -> Option<Operation> {
        self.redo.pop()
    }

    /// Push onto the redo stack
    pub fn push_redo(&mut self, op: Operation) {
        self.redo.push(op);
    }

    /// Operations applied and not undone, oldest first.
    pub fn undo_stack(&self) -> &[Operation] {
        &self.undo
    }

    /// Operations undone and eligible for redo, oldest first.
    ///
    /// The last element is the next one `redo` re-applies.
    pub fn redo_stack(&self) -> &[Operation] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Next operation `undo` would invert
    pub fn peek_undo(&self) -> Option<&Operation> {
        self.undo.last()
    }

    /// Next operation `redo` would re-apply
    pub fn peek_redo(&self) -> Option<&Operation> {
        self.redo.last()
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Recompute the register value from scratch.
    ///
    /// Applies every operation on the undo stack, in order, to a register
    /// starting at `0.0`. This is a pure function of the history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Operation, OperationHistory};
    ///
    /// let mut history = OperationHistory::new();
    /// history.record(Operation::Add(3.0));
    /// history.record(Operation::Multiply(4.0));
    ///
    /// assert_eq!(history.replay(), Ok(12.0));
    /// ```
    pub fn replay(&self) -> Result<f64, CalcError> {
        let mut register = Register::new();
        for op in &self.undo {
            op.apply(&mut register)?;
        }
        Ok(register.value())
    }
}
