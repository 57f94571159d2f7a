//! `btu` — convert Broadlink IR capture codes to MOES UFO-R11 Tuya-Stream codes.
//!
//! A thin wrapper over the [`btu`] library; the HTTP façade and file-upload
//! validation layer this converts from are out of scope here.

use std::fs;
use std::process::ExitCode;

use btu::{Config, CompressionLevel, Converter};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "btu", version, about = "Broadlink IR to UFO-R11 (Tuya) converter")]
struct Args {
    /// Compression level: none, fast, balanced, optimal.
    #[arg(long, global = true, default_value = "balanced")]
    level: LevelArg,

    /// Log level passed to the tracing subscriber when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum LevelArg {
    None,
    Fast,
    Balanced,
    Optimal,
}

impl From<LevelArg> for CompressionLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::None => CompressionLevel::None,
            LevelArg::Fast => CompressionLevel::Fast,
            LevelArg::Balanced => CompressionLevel::Balanced,
            LevelArg::Optimal => CompressionLevel::Optimal,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single Broadlink Base64 code to UFO-R11 Base64.
    Convert {
        /// The Broadlink capture code.
        code: String,
        /// Wrap the result in an MQTT publish payload.
        #[arg(long)]
        mqtt: bool,
    },
    /// Convert every command in a SmartIR device definition JSON file.
    Smartir {
        /// Path to the SmartIR JSON file.
        path: String,
        /// Don't wrap converted commands in `{"ir_code_to_send": "..."}`.
        #[arg(long)]
        no_wrap: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from_env();
    btu::cli::init_tracing(&args.log_level, config.debug);

    tracing::debug!(app = %config.app_name, version = %config.version, "starting up");

    let converter = Converter::new(args.level.into());

    let result = match args.command {
        Command::Convert { code, mqtt } => run_convert(&converter, &code, mqtt),
        Command::Smartir { path, no_wrap } => run_smartir(&converter, &path, !no_wrap),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_convert(converter: &Converter, code: &str, mqtt: bool) -> anyhow::Result<String> {
    if mqtt {
        Ok(converter.convert_to_mqtt_payload(code)?)
    } else {
        Ok(converter.convert(code)?)
    }
}

fn run_smartir(converter: &Converter, path: &str, wrap_with_ir_code: bool) -> anyhow::Result<String> {
    let content = fs::read_to_string(path)?;
    let data: serde_json::Value = serde_json::from_str(&content)?;
    let processed = converter.process_smartir_data(&data, wrap_with_ir_code)?;
    Ok(serde_json::to_string_pretty(&processed)?)
}
