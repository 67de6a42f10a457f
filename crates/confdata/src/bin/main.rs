//! confdata command-line interface

use clap::{Parser, Subcommand};
use confdata::cli::{check, kinds, local_validator, logging, output, parse};
use std::path::PathBuf;

/// confdata command-line tool
#[derive(Parser)]
#[command(name = "confdata")]
#[command(author, version, about = "Validate and parse typed configuration values", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, pretty)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    format: String,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Directory searched for executables instead of PATH (repeatable)
    #[arg(long = "search-path", global = true)]
    search_path: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known data types
    Kinds,

    /// Check values against a data type
    Check {
        /// Data type name, e.g. "positive integer"
        kind: String,

        /// Values to check
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Only report through the exit status
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a value into its native representation
    Parse {
        /// Data type name, e.g. "date"
        kind: String,

        /// Value to parse
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init(cli.verbose);

    let format = output::OutputFormat::from_name(&cli.format);

    let result = match cli.command {
        Commands::Kinds => kinds::list(format, cli.output.as_deref()).map(|()| true),

        Commands::Check {
            kind,
            values,
            quiet,
        } => {
            let config = check::CheckConfig {
                kind,
                values,
                quiet,
                format,
                output_file: cli.output.clone(),
            };
            check::check(config, &local_validator(cli.search_path))
        }

        Commands::Parse { kind, value } => {
            let config = parse::ParseConfig {
                kind,
                value,
                format,
                output_file: cli.output.clone(),
            };
            parse::parse(config, &local_validator(cli.search_path)).map(|()| true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
