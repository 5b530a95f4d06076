//! puretone CLI - Command-line interface for sine-wave WAVE file generation
//!
//! This binary provides commands for generating tones and validating tone
//! specs. Parameter validation and rendering live in the `puretone` library;
//! this crate only parses arguments, dispatches, and reports outcomes.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            frequency,
            duration,
            spec,
            sample_rate,
            bits,
            amplitude,
            output,
        } => commands::generate::run(
            frequency,
            duration,
            spec.as_deref(),
            sample_rate,
            bits,
            amplitude,
            &output,
        ),
        Commands::Validate { spec } => commands::validate::run(&spec),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
