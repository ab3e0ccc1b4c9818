//! Abacus CLI: four-function calculator, evaluated left to right
//!
//! ## Usage
//!
//! ```bash
//! abacus eval 2 + 3 x 4        # 20, no precedence
//! abacus keys "10/4="          # replay keypresses, prints 2,5
//! abacus repl                  # one key sequence per line
//! abacus keypad                # show the layout
//! ```

use abacus_cli::{
    handlers, logging, CalculatorSettings, Cli, CliConfig, CliResult, ColorChoice, Commands,
    Verbosity,
};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity);

    let config = build_config(&cli, verbosity)?;
    console::set_colors_enabled(config.color.should_color());
    console::set_colors_enabled_stderr(config.color.should_color());
    tracing::debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Commands::Eval(args) => handlers::run_eval(args, &config.calculator, &mut out),
        Commands::Keys(args) => handlers::run_keys(args, &config.calculator, &mut out),
        Commands::Repl => handlers::run_repl(&config.calculator, io::stdin().lock(), &mut out),
        Commands::Keypad => handlers::run_keypad(&mut out),
    };
    out.flush()?;
    result
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let color: ColorChoice = cli.color.into();

    let calculator = match &cli.config {
        Some(path) => CalculatorSettings::load(path)?,
        None => CalculatorSettings::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_calculator(calculator))
}
