//! # CLI Argument Definitions

use clap::{Parser, Subcommand, ValueEnum};
use geohint::domain::FilterSpec;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "geohint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Country hint overlays for GeoGuessr practice")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `geohint.*` in the working directory by default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the display and filter fields
    Fields {},
    /// Print the street terms summary for one or more languages
    Streets {
        #[arg(required = true)]
        languages: Vec<String>,

        /// Also print every term and abbreviation per language
        #[arg(long)]
        all: bool,
    },
    /// Parse free-form numeric text the way numeric fields are ranked
    Parse {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Render number plates from a `number_plate_config` JSON object
    Plate {
        /// JSON object with optional `front` and `rear` styles
        #[arg(short, long)]
        style: String,

        /// Text drawn on the plate
        #[arg(long, default_value = "")]
        country: String,

        /// Render only one side instead of both
        #[arg(long, value_enum)]
        side: Option<Side>,

        /// Print a `data:` URL instead of raw SVG
        #[arg(long)]
        data_url: bool,
    },
    /// Evaluate a field over a dataset and print one line per shown country
    Evaluate {
        /// JSON object mapping country names to their records
        dataset: PathBuf,

        /// Field to show (e.g. `tld`, `flag.description`, `#dynamic_street_terms`)
        #[arg(short, long)]
        field: String,

        /// Filter as `FIELD:MODE:VALUE` (MODE is `contains` or `equals`); repeatable
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<FilterSpec>,

        /// Characters that a spoken language must use
        #[arg(long, default_value = "")]
        chars: String,

        /// JSON object mapping characters to the languages using them
        #[arg(long)]
        languages: Option<PathBuf>,

        /// Print the whole overlay as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Front,
    Rear,
}

/// Parses `FIELD:MODE:VALUE`; the value may itself contain `:`.
pub fn parse_filter(raw: &str) -> Result<FilterSpec, String> {
    let mut parts = raw.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(field), Some(mode), Some(value)) if !field.is_empty() => {
            Ok(FilterSpec::new(field, mode, value))
        },
        _ => Err(format!("expected FIELD:MODE:VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use geohint::domain::MatchMode;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_triples() {
        let spec = parse_filter("flag.description:contains:red").expect("valid filter");
        assert_eq!(spec.field.to_string(), "flag.description");
        assert_eq!(spec.mode, MatchMode::Contains);
        assert_eq!(spec.value, "red");

        assert_eq!(parse_filter("camera:equals:gen 3: low").expect("valid filter").value, "gen 3: low");
        assert!(parse_filter("language:contains").is_err());
        assert!(parse_filter(":equals:x").is_err());
    }
}
