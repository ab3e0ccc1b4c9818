//! Calculation history
//!
//! An append-only list alternating numbers and operations. Items are never
//! edited in place: the history only grows or is cleared wholesale.

use crate::core::{evaluate, CalcResult, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the calculation history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HistoryItem {
    /// An operand
    Number(f64),
    /// An operator awaiting its right-hand operand
    Operation(Operation),
}

impl HistoryItem {
    /// Returns the operand, if this item is one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Operation(_) => None,
        }
    }

    /// Returns the operation, if this item is one
    #[must_use]
    pub const fn as_operation(&self) -> Option<Operation> {
        match self {
            Self::Operation(op) => Some(*op),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for HistoryItem {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operation> for HistoryItem {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

impl fmt::Display for HistoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operation(op) => write!(f, "{op}"),
        }
    }
}

/// Calculation history for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operand
    pub fn push_number(&mut self, value: f64) {
        self.items.push(HistoryItem::Number(value));
    }

    /// Appends an operation
    pub fn push_operation(&mut self, op: Operation) {
        self.items.push(HistoryItem::Operation(op));
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the most recent item
    #[must_use]
    pub fn last(&self) -> Option<&HistoryItem> {
        self.items.last()
    }

    /// Returns the items oldest first
    #[must_use]
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Returns an iterator over the items (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Folds the history left to right
    pub fn evaluate(&self) -> CalcResult<f64> {
        evaluate(&self.items)
    }

    /// Renders the history as a space-separated expression, e.g. `2 + 3 x 4`
    #[must_use]
    pub fn expression(&self) -> String {
        self.items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<HistoryItem> for History {
    fn from_iter<I: IntoIterator<Item = HistoryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<HistoryItem> for History {
    fn extend<I: IntoIterator<Item = HistoryItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryItem;
    type IntoIter = std::slice::Iter<'a, HistoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
