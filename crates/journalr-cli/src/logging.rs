//! Logging bootstrap for the CLI.
//!
//! Logs go to stderr through `flexi_logger`; stdout stays reserved for
//! command output. `RUST_LOG`, when set, overrides the resolved level.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

use journalr_core::VERSION;

/// Level used when neither flags nor config choose one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Start the stderr logger. Keep the returned handle alive for the whole run.
pub fn init_logging(level: &str) -> anyhow::Result<LoggerHandle> {
    let level = normalize_level(level)?;
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|e| anyhow::anyhow!("Invalid log level {}: {}", level, e))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| anyhow::anyhow!("Failed to start logger: {}", e))?;

    info!(
        "event=app_start module=cli status=ok platform={} version={}",
        std::env::consts::OS,
        VERSION
    );

    Ok(handle)
}

/// Level implied by the number of `-v` flags, if any were given.
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

pub fn normalize_level(level: &str) -> anyhow::Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(anyhow::anyhow!(
            "Unsupported log level {} (use off|error|warn|info|debug|trace)",
            other
        )),
    }
}
