// src/bin/grand.rs
//! grand — print cryptographically-secure random byte strings, one per line

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use grand::consts::{DEFAULT_ENCODING, DEFAULT_LOG_FILTER};
use grand::{parse_count, Config, EncodingName, GrandError, SizeRange};
use rand::rngs::OsRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Grand generates cryptographically-secure random byte strings.
#[derive(Parser, Debug)]
#[command(name = "grand", version, about, long_about = None)]
struct Cli {
    #[arg(
        short = 'e',
        value_name = "encoding",
        default_value = DEFAULT_ENCODING,
        help = encoding_help(),
    )]
    encoding: String,

    /// Size of random byte strings; an integer or an inclusive range,
    /// e.g. "16-32" (if a range is specified, the size of each byte
    /// string will be a cryptographically-secure random number in the range)
    #[arg(
        short = 's',
        value_name = "size",
        default_value_t = SizeRange::default().to_string(),
        allow_hyphen_values = true
    )]
    size: String,

    /// Number of random byte strings to generate
    #[arg(
        short = 'n',
        value_name = "int",
        default_value = "1",
        allow_negative_numbers = true
    )]
    count: String,
}

impl Cli {
    /// Validate flags in the order -e, -s, -n; the first bad one ends the process
    fn config(&self) -> Config {
        let encoding = self
            .encoding
            .parse::<EncodingName>()
            .unwrap_or_else(|err| usage_error('e', &self.encoding, &err));
        let size = SizeRange::parse(&self.size)
            .map_err(GrandError::from)
            .unwrap_or_else(|err| usage_error('s', &self.size, &err));
        // parse_count only yields counts >= 1
        let count =
            parse_count(&self.count).unwrap_or_else(|err| usage_error('n', &self.count, &err));
        Config {
            encoding,
            size,
            count,
        }
    }
}

fn encoding_help() -> String {
    let mut help = String::from("Output encoding; one of:");
    for name in EncodingName::ALL {
        let quoted = format!("\"{name}\"");
        help.push_str(&format!("\n  {quoted:<7} - {}", name.description()));
    }
    help
}

/// Report a bad flag value with the full help text and exit with 2
fn usage_error(flag: char, value: &str, err: &GrandError) -> ! {
    eprintln!("invalid value {value:?} for flag -{flag}: {err}");
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(2);
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // stdout carries only the generated lines
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    debug!(?config, "starting");
    let mut out = io::stdout().lock();
    config
        .run(&mut OsRng, &mut out)
        .context("error generating random byte strings")?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
