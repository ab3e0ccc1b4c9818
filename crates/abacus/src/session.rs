//! Keypad session state machine
//!
//! Owns the display text and the history of one calculation. A frontend
//! feeds it [`Key`]s and renders [`Session::display`].

use crate::core::{CalcError, CalcResult, History, Operation};
use crate::format::NumberFormat;
use crate::keypad::Key;

/// One calculation session
#[derive(Debug, Clone)]
pub struct Session {
    display: String,
    history: History,
    /// Next digit starts a new number instead of appending
    fresh_entry: bool,
    format: NumberFormat,
    error_message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Text shown when a division by zero is evaluated
    pub const DEFAULT_ERROR_MESSAGE: &str = "Zero division";

    /// Creates a session with the default number format
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(NumberFormat::default())
    }

    /// Creates a session with a custom number format
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            display: "0".to_string(),
            history: History::new(),
            fresh_entry: false,
            format,
            error_message: Self::DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// Sets the text shown on division by zero
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the number format in use
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Returns true while the display shows the error message
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == self.error_message
    }

    /// Handles a single key press.
    ///
    /// Returns the evaluation outcome for [`Key::Equals`], `None` otherwise.
    pub fn press(&mut self, key: Key) -> Option<CalcResult<f64>> {
        tracing::debug!(%key, display = %self.display, "key pressed");
        match key {
            Key::Digit(d) => {
                self.press_digit(d);
                None
            }
            Key::Decimal => {
                self.press_decimal();
                None
            }
            Key::Operation(op) => {
                self.press_operation(op);
                None
            }
            Key::Equals => self.calculate(),
            Key::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Presses every key in order, returning the last evaluation outcome
    pub fn press_all<I>(&mut self, keys: I) -> Option<CalcResult<f64>>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().fold(None, |last, key| self.press(key).or(last))
    }

    /// Enters a digit. Values above 9 are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        self.begin_entry();
        if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    /// Enters the decimal separator unless the display already has one
    pub fn press_decimal(&mut self) {
        self.begin_entry();
        let separator = self.format.decimal_separator;
        if self.display.contains(separator) {
            return;
        }
        self.display.push(separator);
    }

    /// Records the displayed number followed by `op`
    pub fn press_operation(&mut self, op: Operation) {
        let Some(value) = self.format.parse(&self.display) else {
            tracing::debug!(display = %self.display, "operation ignored, display is not a number");
            return;
        };
        self.history.push_number(value);
        self.history.push_operation(op);
        self.fresh_entry = true;
    }

    /// Evaluates the history with the displayed number as the last operand.
    ///
    /// The history is cleared afterwards whatever the outcome. A result that
    /// overflows to infinity or NaN shows the error message like a division
    /// by zero. Returns `None` when the display holds no number.
    pub fn calculate(&mut self) -> Option<CalcResult<f64>> {
        let Some(value) = self.format.parse(&self.display) else {
            tracing::debug!(display = %self.display, "evaluation ignored, display is not a number");
            return None;
        };
        self.history.push_number(value);

        let result = self.history.evaluate();
        match result {
            Ok(value) if !value.is_finite() => {
                tracing::warn!(expression = %self.history.expression(), value, "result out of range");
                self.display.clone_from(&self.error_message);
            }
            Ok(value) => {
                tracing::debug!(expression = %self.history.expression(), value, "evaluated");
                self.display = self.format.format(value);
            }
            Err(CalcError::DivideByZero) => {
                tracing::warn!(expression = %self.history.expression(), "division by zero");
                self.display.clone_from(&self.error_message);
            }
        }

        self.history.clear();
        self.fresh_entry = true;
        Some(result)
    }

    /// Discards the history and resets the display to zero
    pub fn clear(&mut self) {
        self.history.clear();
        self.reset_display();
        self.fresh_entry = false;
    }

    fn begin_entry(&mut self) {
        if self.is_error() || self.fresh_entry {
            self.reset_display();
            self.fresh_entry = false;
        }
    }

    fn reset_display(&mut self) {
        self.display = "0".to_string();
    }
}
