use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ruuvilens_core::{Advertisement, AdvertisementRecord};

#[derive(Parser, Debug)]
#[command(name = "ruuvilens")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RUUVILENS_BUILD_COMMIT"),
    " ",
    env!("RUUVILENS_BUILD_DATE"),
    ")"
))]
#[command(
    about = "Decoder for RuuviTag sensor advertisements (RAWv1 / RAWv2).",
    long_about = None,
    after_help = "Examples:\n  ruuvilens decode 0512fc5394c37c0004fffc040cac364200cdcbb8334c884f\n  ruuvilens decode --input payloads.txt --pretty\n  some-ble-dumper | ruuvilens decode --stdin --manufacturer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode hex-encoded advertisement payloads into JSON records.
    #[command(
        after_help = "Examples:\n  ruuvilens decode 03291a1ece1efc18f94202ca0b53\n  ruuvilens decode --input payloads.txt\n  ruuvilens decode --stdin --strict"
    )]
    Decode {
        /// Hex-encoded payloads (a leading 0x is allowed)
        payloads: Vec<String>,

        /// Read payloads from a file, one per line ('#' starts a comment)
        #[arg(short = 'i', long, conflicts_with = "stdin")]
        input: Option<PathBuf>,

        /// Read payloads from stdin, one per line
        #[arg(long)]
        stdin: bool,

        /// Payloads carry the 2-byte manufacturer id before the format tag
        #[arg(long)]
        manufacturer: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress per-payload diagnostics on stderr
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any payload fails to decode
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            payloads,
            input,
            stdin,
            manufacturer,
            pretty,
            compact: _,
            quiet,
            strict,
        } => cmd_decode(payloads, input, stdin, manufacturer, pretty, quiet, strict),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    payloads: Vec<String>,
    input: Option<PathBuf>,
    stdin: bool,
    manufacturer: bool,
    pretty: bool,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    let entries = gather_payloads(payloads, input.as_deref(), stdin)?;
    if entries.is_empty() {
        return Err(CliError::new(
            "no payloads to decode",
            Some("pass hex payloads as arguments, or use --input/--stdin".to_string()),
        ));
    }

    let mut failures = 0usize;
    for entry in &entries {
        match decode_entry(entry, manufacturer) {
            Ok(record) => {
                let json = serialize_record(&record, pretty)?;
                println!("{}", json);
            }
            Err(reason) => {
                failures += 1;
                if !quiet {
                    eprintln!("skipped '{}': {}", entry, reason);
                }
            }
        }
    }

    if failures == entries.len() {
        return Err(CliError::new(
            "no payload could be decoded",
            Some("check the hex input; see stderr for per-payload reasons".to_string()),
        ));
    }
    if strict && failures > 0 {
        return Err(CliError::new(
            format!("{} of {} payloads failed to decode", failures, entries.len()),
            Some("drop --strict to keep going past bad payloads".to_string()),
        ));
    }
    Ok(())
}

fn gather_payloads(
    payloads: Vec<String>,
    input: Option<&Path>,
    stdin: bool,
) -> Result<Vec<String>, CliError> {
    if !payloads.is_empty() {
        return Ok(payloads);
    }
    if let Some(path) = input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        return Ok(payload_lines(&text));
    }
    if stdin {
        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            lines.push(line);
        }
        return Ok(payload_lines(&lines.join("\n")));
    }
    Ok(Vec::new())
}

fn payload_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn decode_entry(entry: &str, manufacturer: bool) -> Result<AdvertisementRecord, String> {
    let bytes = parse_hex(entry)?;
    let advert = if manufacturer {
        Advertisement::from_manufacturer_data(&bytes)
    } else {
        Advertisement::decode(&bytes)
    };
    advert.map(|advert| advert.to_record()).map_err(|err| err.to_string())
}

fn parse_hex(entry: &str) -> Result<Vec<u8>, String> {
    let trimmed = entry.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|err| format!("not valid hex: {}", err))
}

fn serialize_record(record: &AdvertisementRecord, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(record)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(record)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
