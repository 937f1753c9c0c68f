#![allow(clippy::print_stdout)]

pub mod args;
pub mod handlers;

use crate::args::{Cli, Command};
use crate::handlers::EvaluateRequest;
use anyhow::{Context, Result};
use clap::Parser;
use geohint::kernel::config::load_geohint_config;
use geohint_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_geohint_config(cli.config.as_deref()).context("Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;

    let output = match cli.command {
        Command::Fields {} => handlers::list_fields(),
        Command::Streets { languages, all } => handlers::street_summary(&languages, all),
        Command::Parse { texts } => handlers::parse_numbers(&texts),
        Command::Plate { style, country, side, data_url } => {
            handlers::render_plate(&config, &style, &country, side, data_url)?
        },
        Command::Evaluate { dataset, field, filters, chars, languages, json } => handlers::evaluate(
            &config,
            EvaluateRequest {
                dataset: &dataset,
                field: &field,
                filters,
                chars: &chars,
                languages: languages.as_deref(),
                json,
            },
        )?,
    };

    println!("{output}");
    Ok(())
}
