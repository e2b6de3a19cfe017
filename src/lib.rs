// Module declarations for the crate's components
pub mod command;   // Planner subcommands and their translation
pub mod commands;  // Request builders: primitive settings, modes, refresh planning
pub mod config;    // Configuration management
pub mod encoding;  // Time and date encoders
pub mod error;     // Error handling and types
pub mod givenergy; // Device models, time slots and request types
pub mod options;   // Command line options parsing
pub mod prelude;   // Common imports and types
pub mod register;  // Holding register map

// Get the package version from Cargo.toml
const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::prelude::*;
use std::io::Write;

/// Logs go to stderr so that stdout only carries the planned requests.
///
/// Without `RUST_LOG` everything is let through the env_logger filter and the level is
/// capped with `log::set_max_level`, first at info and later at the configured level.
fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .try_init()?;

    if !env_logger_overridden() {
        log::set_max_level(log::LevelFilter::Info);
    }

    Ok(())
}

fn env_logger_overridden() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

/// Plans the requests for one subcommand and writes them to `out`, one JSON object per line.
///
/// Nothing is sent anywhere; the output is meant for whatever transport drives the inverter.
pub fn plan(command: &Command, config: &Config, out: &mut impl Write) -> Result<usize> {
    let builder = config.command_builder();
    let requests = command.requests(&builder, config)?;

    info!("{} planned {} requests", command.name(), requests.len());
    for request in &requests {
        debug!("  {}", request);
        serde_json::to_writer(&mut *out, request)?;
        writeln!(out)?;
    }

    Ok(requests.len())
}

/// Main application entry point
pub fn app(options: Options) -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    info!("givenergy-commands {} starting", CARGO_PKG_VERSION);

    let config = Config::new(options.config_file.clone()).map_err(|err| {
        error!("Failed to load config {}: {:?}", options.config_file, err);
        err
    })?;

    if !env_logger_overridden() {
        log::set_max_level(config.log_level());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    plan(&options.command, &config, &mut out)?;

    Ok(())
}
