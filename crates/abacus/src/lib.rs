//! Abacus - four-function calculator
//!
//! Numbers and operators are collected into a [`History`](core::History)
//! and folded strictly left to right: there is no operator precedence, so
//! `2 + 3 x 4` is `20`. Division by zero is the only error.
//!
//! The [`Session`](session::Session) wraps the reducer with the keypad
//! behaviour a frontend needs: digit entry, a single decimal separator,
//! operator chaining, evaluation and clear.
//!
//! # Example
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let mut history = History::new();
//! history.push_number(2.0);
//! history.push_operation(Operation::Add);
//! history.push_number(3.0);
//! history.push_operation(Operation::Multiply);
//! history.push_number(4.0);
//! assert_eq!(history.evaluate(), Ok(20.0));
//!
//! let mut session = Session::new();
//! session.press_all(parse_keys("10/4="));
//! assert_eq!(session.display(), "2,5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod format;
pub mod keypad;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{evaluate, CalcError, CalcResult, History, HistoryItem, Operation};
    pub use crate::format::NumberFormat;
    pub use crate::keypad::{parse_keys, Key, Keypad};
    pub use crate::session::Session;
}
