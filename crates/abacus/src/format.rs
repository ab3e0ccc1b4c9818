//! Display text <-> number conversion
//!
//! Decimal style without grouping. The separator defaults to `,` and results
//! are shown with at most three fraction digits.

use serde::{Deserialize, Serialize};

/// Locale-like number formatting rules for the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Character placed between the integer and fraction parts
    pub decimal_separator: char,
    /// Maximum number of fraction digits shown in formatted results
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: Self::DEFAULT_DECIMAL_SEPARATOR,
            max_fraction_digits: Self::DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

impl NumberFormat {
    /// Default decimal separator
    pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

    /// Default maximum fraction digits
    pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

    /// Creates the default format (`,` separator, 3 fraction digits)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decimal separator
    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the maximum fraction digits
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Returns true if `c` acts as a decimal separator (`.` always does)
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        c == self.decimal_separator || c == '.'
    }

    /// Parses display text into a number.
    ///
    /// Accepts an optional leading `-`, digits and at most one separator.
    /// Returns `None` for anything else, including text with no digits.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut integer = String::new();
        let mut fraction = String::new();
        let mut seen_separator = false;
        for c in body.chars() {
            if c.is_ascii_digit() {
                if seen_separator {
                    fraction.push(c);
                } else {
                    integer.push(c);
                }
            } else if self.is_separator(c) && !seen_separator {
                seen_separator = true;
            } else {
                return None;
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let normalized = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { integer.as_str() },
            if fraction.is_empty() { "0" } else { fraction.as_str() },
        );
        normalized.parse().ok()
    }

    /// Formats a number for display
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let mut text = format!("{:.*}", self.max_fraction_digits, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }

        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}
