//! Calculator core: operations, history and the left-to-right reducer
//!
//! Everything here is pure. The only failure mode is division by zero.

pub mod evaluator;
pub mod history;
mod operations;

pub use evaluator::evaluate;
pub use history::{History, HistoryItem};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero right-hand operand
    #[error("Division by zero")]
    DivideByZero,
}
