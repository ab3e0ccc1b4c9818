//! Calculator keypad
//!
//! Keys a frontend can press, and the fixed button layout:
//!
//! ```text
//! [ C ] [ / ] [ x ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ , ]
//! ```

use crate::core::Operation;
use std::fmt;

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit (0-9)
    Digit(u8),
    /// The decimal separator
    Decimal,
    /// An arithmetic operation
    Operation(Operation),
    /// Evaluate the history
    Equals,
    /// Discard the history and reset the display
    Clear,
}

impl Key {
    /// Maps a typed character to a key.
    ///
    /// `,` and `.` both mean the decimal separator; `=` and newline mean
    /// equals; `c`/`C` mean clear.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            ',' | '.' => Some(Self::Decimal),
            '=' | '\n' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => Operation::from_char(c).map(Self::Operation),
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ",".to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a key sequence such as `"12+3="`, skipping characters that are
/// not keys
#[must_use]
pub fn parse_keys(input: &str) -> Vec<Key> {
    input.chars().filter_map(Key::from_char).collect()
}

/// The keypad button layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Key>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let rows = vec![
            vec![
                Key::Clear,
                Key::Operation(Operation::Divide),
                Key::Operation(Operation::Multiply),
            ],
            vec![
                Key::Digit(7),
                Key::Digit(8),
                Key::Digit(9),
                Key::Operation(Operation::Subtract),
            ],
            vec![
                Key::Digit(4),
                Key::Digit(5),
                Key::Digit(6),
                Key::Operation(Operation::Add),
            ],
            vec![Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Equals],
            vec![Key::Digit(0), Key::Decimal],
        ];
        Self { rows }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the width of the widest row
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the key at a grid position
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Key> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns every key, row by row
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Renders the layout as text, one row per line
    #[must_use]
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|key| format!("[ {key} ]"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Key::from_char(c), Some(Key::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_specials() {
        assert_eq!(Key::from_char(','), Some(Key::Decimal));
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('\n'), Some(Key::Equals));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
    }

    #[test]
    fn test_from_char_operations() {
        assert_eq!(
            Key::from_char('x'),
            Some(Key::Operation(Operation::Multiply))
        );
        assert_eq!(
            Key::from_char('*'),
            Some(Key::Operation(Operation::Multiply))
        );
        assert_eq!(Key::from_char('-'), Some(Key::Operation(Operation::Subtract)));
    }

    #[test]
    fn test_from_char_unknown() {
        assert_eq!(Key::from_char('('), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(7).label(), "7");
        assert_eq!(Key::Decimal.label(), ",");
        assert_eq!(Key::Operation(Operation::Multiply).label(), "x");
        assert_eq!(Key::Equals.to_string(), "=");
        assert_eq!(Key::Clear.to_string(), "C");
    }

    #[test]
    fn test_parse_keys_skips_unknown() {
        let keys = parse_keys("1 2+ (3)=");
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Operation(Operation::Add),
                Key::Digit(3),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.rows(), 5);
        assert_eq!(keypad.cols(), 4);
    }

    #[test]
    fn test_keypad_get() {
        let keypad = Keypad::default();
        assert_eq!(keypad.get(0, 0), Some(Key::Clear));
        assert_eq!(keypad.get(3, 3), Some(Key::Equals));
        assert_eq!(keypad.get(4, 1), Some(Key::Decimal));
        assert_eq!(keypad.get(4, 2), None);
        assert_eq!(keypad.get(9, 0), None);
    }

    #[test]
    fn test_keypad_has_every_key_once() {
        let keypad = Keypad::new();
        let keys: Vec<Key> = keypad.keys().collect();
        let unique: HashSet<Key> = keys.iter().copied().collect();
        assert_eq!(keys.len(), 17);
        assert_eq!(unique.len(), 17);
        for op in Operation::ALL {
            assert!(unique.contains(&Key::Operation(op)));
        }
    }

    #[test]
    fn test_keypad_render() {
        let rendered = Keypad::new().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[ C ] [ / ] [ x ]");
        assert_eq!(lines[4], "[ 0 ] [ , ]");
    }
}
