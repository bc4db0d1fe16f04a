//! Core accumulator types and logic.
//!
//! This module contains the building blocks the calculator is made of:
//! - The `Register` holding the current value
//! - Reversible `Operation` values
//! - The `OperationHistory` undo/redo stacks
//!
//! Nothing in here logs or owns shared state; operations receive the
//! register they act on as an explicit argument.

mod error;
mod history;
mod operation;
mod register;

pub use error::CalcError;
pub use history::OperationHistory;
pub use operation::Operation;
pub use register::Register;
