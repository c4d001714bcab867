//! repeater-config: command-line entry point for the settings tool.
//!
//! Runs the same load/save code the controller uses against a directory on the
//! host, so settings files can be checked and normalized before they are
//! copied to the device.
//!
//! # Usage
//!
//! ```text
//! repeater-config [OPTIONS] <COMMAND>
//!
//! Commands:
//!   load  <FILE> [--json]       Gate, parse and apply FILE; print the result
//!   check <FILE>                Only run the filename gate
//!   save  <FILE> --from <SRC>   Load SRC, then write it canonically to FILE
//!   keys                        List every recognized key
//!
//! Options:
//!   --root     <DIR>       Directory device paths resolve under [default: .]
//!   --callsign <CALLSIGN>  Identity currently configured on the device
//! ```
//!
//! `REPEATER_CONFIG_ROOT` overrides the `--root` default.  Logs go to stderr
//! (level from `RUST_LOG`, default `info`) so stdout carries only the output.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use repeater_config::application::ConfigService;
use repeater_config::infrastructure::storage::DiskFs;
use repeater_core::domain::gate::expected_filename;
use repeater_core::{write_lines, FileGate, RepeaterSettings, ValueKind};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Load, check and save repeater controller INI settings files.
#[derive(Debug, Parser)]
#[command(
    name = "repeater-config",
    about = "Load, check and save repeater controller settings files",
    version
)]
struct Cli {
    /// Directory that device paths such as `/YO3HJV.ini` resolve under.
    #[arg(long, global = true, default_value = ".", env = "REPEATER_CONFIG_ROOT")]
    root: PathBuf,

    /// Callsign currently configured on the device.
    ///
    /// Leave empty for a device that has not been configured yet.
    #[arg(long, global = true, default_value = "")]
    callsign: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Gate, parse and apply FILE onto default settings, then print them.
    Load {
        file: String,
        /// Print the settings as JSON instead of INI.
        #[arg(long)]
        json: bool,
    },
    /// Run only the filename gate for FILE.
    Check { file: String },
    /// Load SOURCE and write it to FILE in canonical form.
    Save {
        file: String,
        #[arg(long = "from")]
        source: String,
    },
    /// List every recognized key with its aliases and value kind.
    Keys,
}

impl Cli {
    /// Settings as they are on the device before any file is loaded.
    fn initial_settings(&self) -> RepeaterSettings {
        RepeaterSettings {
            callsign: self.callsign.clone(),
            ..Default::default()
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn open_service(cli: &Cli) -> ConfigService<DiskFs> {
    let service = ConfigService::new(DiskFs::new(&cli.root));
    debug!("settings root: {}", service.fs().root().display());
    service
}

fn run_load<W: Write>(cli: &Cli, file: &str, json: bool, out: &mut W) -> anyhow::Result<()> {
    let service = open_service(cli);
    let mut settings = cli.initial_settings();
    service
        .load_settings(file, &mut settings)
        .with_context(|| format!("failed to load {file}"))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &settings)
            .context("failed to serialize settings as JSON")?;
        writeln!(out)?;
    } else {
        write_lines(out, service.registry().serialize(&settings))
            .context("failed to write settings")?;
    }
    Ok(())
}

fn run_check<W: Write>(cli: &Cli, file: &str, out: &mut W) -> anyhow::Result<()> {
    match FileGate::accept(file, &cli.callsign) {
        Ok(admission) => {
            writeln!(out, "allowed: {file} ({admission:?})")?;
            Ok(())
        }
        Err(e) => match expected_filename(&cli.callsign) {
            Some(expected) => bail!("denied: {e} (expected file: {expected})"),
            None => bail!("denied: {e}"),
        },
    }
}

/// Returns the warning to show when `file` would be refused by the device
/// once `callsign` is configured.
fn placement_warning(file: &str, callsign: &str) -> Option<String> {
    if FileGate::is_allowed(file, callsign) {
        return None;
    }
    Some(match expected_filename(callsign) {
        Some(expected) => format!("{file} will not load on the device; name it {expected}"),
        None => format!("{file} will not load on the device"),
    })
}

/// Loads `source`, saves it as `file`, and returns the placement warning
/// that was logged, if any.
fn run_save(cli: &Cli, file: &str, source: &str) -> anyhow::Result<Option<String>> {
    let service = open_service(cli);
    let mut settings = cli.initial_settings();
    service
        .load_settings(source, &mut settings)
        .with_context(|| format!("failed to load {source}"))?;

    let report = service
        .save_settings(file, &settings)
        .with_context(|| format!("failed to save {file}"))?;
    info!("wrote {} lines to {}", report.lines, report.path);

    // The saved file must pass the gate for the callsign it now carries.
    let warning = placement_warning(file, &settings.callsign);
    if let Some(message) = &warning {
        warn!("{message}");
    }
    Ok(warning)
}

fn run_keys<W: Write>(service: &ConfigService<DiskFs>, out: &mut W) -> io::Result<()> {
    for record in service.registry().records() {
        let kind = match record.kind() {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::HexInt => "hex",
            ValueKind::Text => "text",
        };
        let aliases = record.aliases.join(", ");
        writeln!(out, "{:<28} {:<5} {aliases}", record.key, kind)?;
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Load { file, json } => run_load(&cli, file, *json, &mut out),
        Command::Check { file } => run_check(&cli, file, &mut out),
        Command::Save { file, source } => run_save(&cli, file, source).map(|_| ()),
        Command::Keys => Ok(run_keys(&open_service(&cli), &mut out)?),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
