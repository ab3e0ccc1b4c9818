//! CLI configuration

use crate::error::{CliError, CliResult};
use abacus::format::NumberFormat;
use abacus::keypad::Key;
use abacus::session::Session;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - info logging
    Verbose,
    /// Debug - debug logging
    Debug,
    /// Trace - every reducer step
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// Calculator settings read from the YAML config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorSettings {
    /// Decimal separator shown on the display
    pub decimal_separator: char,
    /// Maximum fraction digits in results
    pub max_fraction_digits: usize,
    /// Text shown on division by zero
    pub error_message: String,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            decimal_separator: NumberFormat::DEFAULT_DECIMAL_SEPARATOR,
            max_fraction_digits: NumberFormat::DEFAULT_MAX_FRACTION_DIGITS,
            error_message: Session::DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl CalculatorSettings {
    /// Upper bound on fraction digits
    pub const MAX_FRACTION_DIGITS: usize = 15;

    /// Loads and validates settings from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let settings = Self::from_yaml(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    /// Parses and validates settings from YAML text
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        let settings: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(text)?
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings the display cannot work with
    pub fn validate(&self) -> CliResult<()> {
        let separator = self.decimal_separator;
        if separator != ',' && separator != '.' && Key::from_char(separator).is_some() {
            return Err(CliError::config(format!(
                "decimal_separator {separator:?} collides with a keypad key"
            )));
        }
        if separator.is_whitespace() {
            return Err(CliError::config("decimal_separator cannot be whitespace"));
        }
        if self.max_fraction_digits > Self::MAX_FRACTION_DIGITS {
            return Err(CliError::config(format!(
                "max_fraction_digits must be at most {}",
                Self::MAX_FRACTION_DIGITS
            )));
        }
        if self.error_message.trim().is_empty() {
            return Err(CliError::config("error_message cannot be empty"));
        }
        if NumberFormat::new()
            .with_decimal_separator(separator)
            .parse(&self.error_message)
            .is_some()
        {
            return Err(CliError::config("error_message cannot look like a number"));
        }
        Ok(())
    }

    /// Number format described by these settings
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new()
            .with_decimal_separator(self.decimal_separator)
            .with_max_fraction_digits(self.max_fraction_digits)
    }

    /// Creates a fresh session using these settings
    #[must_use]
    pub fn session(&self) -> Session {
        Session::with_format(self.number_format()).with_error_message(self.error_message.clone())
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Calculator settings
    pub calculator: CalculatorSettings,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set calculator settings
    #[must_use]
    pub fn with_calculator(mut self, calculator: CalculatorSettings) -> Self {
        self.calculator = calculator;
        self
    }
}
