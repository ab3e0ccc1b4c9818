//! Keypad Session Demo
//!
//! Replays a few keypress sequences and shows the display after each key.
//!
//! Run with: cargo run --example session_demo

use abacus::prelude::*;

fn replay(sequence: &str) {
    println!("\nKeys: {sequence}");
    let mut session = Session::new();
    for key in parse_keys(sequence) {
        let outcome = session.press(key);
        match outcome {
            Some(Ok(value)) => println!("   [{key}]  {:<16} = {value}", session.display()),
            Some(Err(err)) => println!("   [{key}]  {:<16} ({err})", session.display()),
            None => println!("   [{key}]  {}", session.display()),
        }
    }
}

fn main() {
    println!("Keypad:\n{}", Keypad::new().render());

    // Strictly left to right: (2 + 3) x 4
    replay("2+3x4=");

    // Decimal separator and result formatting
    replay("10/3=");
    replay("1,5+1,25=");

    // Division by zero, then recovery on the next digit
    replay("7/0=8");

    // Trailing operator is dropped by the reducer
    let mut history = History::new();
    history.push_number(1.0);
    history.push_operation(Operation::Add);
    history.push_number(2.0);
    history.push_operation(Operation::Subtract);
    println!("\n{} -> {:?}", history.expression(), history.evaluate());
}
