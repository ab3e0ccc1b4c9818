//! Subcommand handlers
//!
//! Handlers write to the given sinks instead of stdout so they can be driven
//! from tests.

use crate::commands::{EvalArgs, KeysArgs};
use crate::config::CalculatorSettings;
use crate::error::{CliError, CliResult};
use abacus::core::{CalcResult, History, Operation};
use abacus::format::NumberFormat;
use abacus::keypad::{parse_keys, Keypad};
use console::style;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Outcome of `eval`, as printed with `--json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Expression as entered
    pub expression: String,
    /// History handed to the reducer
    pub history: History,
    /// Numeric result on success
    pub result: Option<f64>,
    /// Display text (formatted result or error message)
    pub display: String,
    /// Error description on failure
    pub error: Option<String>,
}

impl EvalReport {
    fn new(history: History, outcome: CalcResult<f64>, settings: &CalculatorSettings) -> Self {
        let expression = history.expression();
        match outcome {
            Ok(value) => Self {
                expression,
                history,
                result: Some(value),
                display: settings.number_format().format(value),
                error: None,
            },
            Err(err) => Self {
                expression,
                history,
                result: None,
                display: settings.error_message.clone(),
                error: Some(err.to_string()),
            },
        }
    }
}

/// Builds a history from alternating number and operator tokens.
///
/// Tokens are split on whitespace first, so `"2 + 3"` and `2 + 3` are the
/// same. A trailing operator is kept; the reducer ignores it.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S], format: &NumberFormat) -> CliResult<History> {
    let mut history = History::new();
    let mut expect_number = true;

    for token in tokens.iter().flat_map(|t| t.as_ref().split_whitespace()) {
        if expect_number {
            let value = format.parse(token).ok_or_else(|| {
                CliError::invalid_argument(format!("expected a number, found {token:?}"))
            })?;
            history.push_number(value);
        } else {
            let op = Operation::from_symbol(token).ok_or_else(|| {
                CliError::invalid_argument(format!(
                    "expected an operator (+, -, x, /), found {token:?}"
                ))
            })?;
            history.push_operation(op);
        }
        expect_number = !expect_number;
    }

    if history.is_empty() {
        return Err(CliError::invalid_argument("nothing to evaluate"));
    }
    Ok(history)
}

/// Runs `eval`: reduces the tokens and prints the display or a JSON report
pub fn run_eval<W: Write>(
    args: &EvalArgs,
    settings: &CalculatorSettings,
    out: &mut W,
) -> CliResult<()> {
    let history = parse_tokens(&args.tokens, &settings.number_format())?;
    tracing::info!(expression = %history.expression(), "evaluating");

    let outcome = history.evaluate();
    let report = EvalReport::new(history, outcome, settings);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", report.display)?;
    }

    outcome.map(|_| ()).map_err(CliError::from)
}

/// Runs `keys`: replays a keypress sequence and prints the display
pub fn run_keys<W: Write>(
    args: &KeysArgs,
    settings: &CalculatorSettings,
    out: &mut W,
) -> CliResult<()> {
    let keys = parse_keys(&args.sequence);
    if keys.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "no keys in {:?}",
            args.sequence
        )));
    }

    let mut session = settings.session();
    for key in keys {
        session.press(key);
        if args.trace {
            writeln!(out, "{key}\t{}", session.display())?;
        }
    }

    if !args.trace {
        writeln!(out, "{}", render_display(session.display(), session.is_error()))?;
    }
    Ok(())
}

/// Runs the interactive loop until `q`, `quit` or end of input
pub fn run_repl<R: BufRead, W: Write>(
    settings: &CalculatorSettings,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    let mut session = settings.session();
    writeln!(out, "{}", session.display())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }
        let outcome = session.press_all(parse_keys(line));
        tracing::debug!(line, ?outcome, "line processed");
        writeln!(out, "{}", render_display(session.display(), session.is_error()))?;
    }

    Ok(())
}

/// Runs `keypad`: prints the button layout
pub fn run_keypad<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", Keypad::new().render())?;
    Ok(())
}

fn render_display(display: &str, is_error: bool) -> String {
    if is_error {
        style(display).red().to_string()
    } else {
        display.to_string()
    }
}
