//! Property-based tests for the left-to-right reducer

use abacus::prelude::*;
use proptest::prelude::*;

fn operand_strategy() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0f64
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// `(operation, operand)` pairs with no zero divisor
fn safe_pair_strategy() -> impl Strategy<Value = (Operation, f64)> {
    (operation_strategy(), operand_strategy()).prop_map(|(op, rhs)| {
        if op == Operation::Divide && rhs == 0.0 {
            (op, 1.0)
        } else {
            (op, rhs)
        }
    })
}

fn build(first: f64, pairs: &[(Operation, f64)]) -> Vec<HistoryItem> {
    let mut items = vec![HistoryItem::Number(first)];
    for (op, rhs) in pairs {
        items.push(HistoryItem::Operation(*op));
        items.push(HistoryItem::Number(*rhs));
    }
    items
}

fn manual_fold(first: f64, pairs: &[(Operation, f64)]) -> f64 {
    pairs.iter().fold(first, |acc, (op, rhs)| match op {
        Operation::Add => acc + rhs,
        Operation::Subtract => acc - rhs,
        Operation::Multiply => acc * rhs,
        Operation::Divide => acc / rhs,
    })
}

proptest! {
    /// The reducer applies pairs strictly in order
    #[test]
    fn prop_matches_manual_fold(
        first in operand_strategy(),
        pairs in prop::collection::vec(safe_pair_strategy(), 0..8),
    ) {
        let items = build(first, &pairs);
        prop_assert_eq!(evaluate(&items), Ok(manual_fold(first, &pairs)));
    }

    /// Evaluating twice gives the same answer
    #[test]
    fn prop_idempotent(
        first in operand_strategy(),
        pairs in prop::collection::vec(safe_pair_strategy(), 0..8),
    ) {
        let history: History = build(first, &pairs).into_iter().collect();
        prop_assert_eq!(history.evaluate(), history.evaluate());
    }

    /// A trailing operation never changes the result
    #[test]
    fn prop_trailing_operation_ignored(
        first in operand_strategy(),
        pairs in prop::collection::vec(safe_pair_strategy(), 0..8),
        trailing in operation_strategy(),
    ) {
        let complete = build(first, &pairs);
        let mut dangling = complete.clone();
        dangling.push(HistoryItem::Operation(trailing));
        prop_assert_eq!(evaluate(&dangling), evaluate(&complete));
    }

    /// A zero divisor anywhere in a well-formed chain fails the whole chain
    #[test]
    fn prop_zero_divisor_fails(
        first in operand_strategy(),
        before in prop::collection::vec(safe_pair_strategy(), 0..4),
        after in prop::collection::vec(safe_pair_strategy(), 0..4),
    ) {
        let mut pairs = before;
        pairs.push((Operation::Divide, 0.0));
        pairs.extend(after);
        prop_assert_eq!(evaluate(&build(first, &pairs)), Err(CalcError::DivideByZero));
    }
}

#[test]
fn test_documented_examples() {
    use abacus::core::HistoryItem::{Number as N, Operation as Op};

    assert_eq!(evaluate(&[]), Ok(0.0));
    assert_eq!(evaluate(&[N(5.0)]), Ok(5.0));
    assert_eq!(evaluate(&[N(2.0), Op(Operation::Add), N(3.0)]), Ok(5.0));
    assert_eq!(
        evaluate(&[
            N(2.0),
            Op(Operation::Add),
            N(3.0),
            Op(Operation::Multiply),
            N(4.0)
        ]),
        Ok(20.0)
    );
    assert_eq!(
        evaluate(&[N(10.0), Op(Operation::Divide), N(0.0)]),
        Err(CalcError::DivideByZero)
    );
    assert_eq!(
        evaluate(&[
            N(1.0),
            Op(Operation::Add),
            N(2.0),
            Op(Operation::Subtract)
        ]),
        Ok(3.0)
    );
}
