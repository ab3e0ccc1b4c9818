//! CLI command definitions using clap

use crate::config::ColorChoice;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Abacus: four-function calculator that evaluates strictly left to right
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Calculator settings file (YAML)
    #[arg(long, global = true, env = "ABACUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate numbers and operators left to right, e.g. `2 + 3 x 4`
    Eval(EvalArgs),

    /// Replay a keypress sequence, e.g. `12+3=`
    Keys(KeysArgs),

    /// Interactive mode: each input line is a keypress sequence
    Repl,

    /// Show the keypad layout
    Keypad,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Alternating numbers and operators (+, -, x, /)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Print the history and outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the keys command
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Keys to press; characters that are not keys are skipped
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from(["abacus", "eval", "2", "+", "3", "--json"]).unwrap();
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.tokens, vec!["2", "+", "3"]);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_negative_operand() {
        let cli = Cli::try_parse_from(["abacus", "eval", "-5", "-", "2"]).unwrap();
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.tokens, vec!["-5", "-", "2"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_flags_after_tokens() {
        let cli = Cli::try_parse_from(["abacus", "eval", "1", "+", "2", "-v", "-q"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(cli.quiet);
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.tokens, vec!["1", "+", "2"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_fractional_negative_operand() {
        let cli = Cli::try_parse_from(["abacus", "eval", "-1.5", "x", "-2"]).unwrap();
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.tokens, vec!["-1.5", "x", "-2"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_keys_with_trace() {
        let cli = Cli::try_parse_from(["abacus", "keys", "12+3=", "--trace"]).unwrap();
        match cli.command {
            Commands::Keys(args) => {
                assert_eq!(args.sequence, "12+3=");
                assert!(args.trace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["abacus", "-vv", "--color", "never", "keypad"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorArg::Never);
        assert!(matches!(cli.command, Commands::Keypad));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["abacus"]).is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
    }
}
