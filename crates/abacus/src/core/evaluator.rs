//! Left-to-right history reducer
//!
//! There is no precedence: `2 + 3 x 4` is `(2 + 3) x 4 = 20`.

use crate::core::{CalcResult, HistoryItem};

/// Folds a history into a single value.
///
/// An empty history, or one that does not start with a number, yields `0`.
/// The fold stops at the first position that is not an `(operation, number)`
/// pair and returns what has been accumulated so far, so a trailing operator
/// is ignored. Division by zero aborts the fold with no partial result.
pub fn evaluate(items: &[HistoryItem]) -> CalcResult<f64> {
    let Some((HistoryItem::Number(first), rest)) = items.split_first() else {
        return Ok(0.0);
    };

    let mut acc = *first;
    for pair in rest.chunks(2) {
        let [HistoryItem::Operation(op), HistoryItem::Number(rhs)] = pair else {
            tracing::trace!(acc, "incomplete pair, stopping fold");
            break;
        };
        acc = op.apply(acc, *rhs)?;
        tracing::trace!(%op, rhs, acc, "folded pair");
    }

    Ok(acc)
}
