//! Rendering of run results on stdout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::cli::OutputFormat;

/// JSON response envelope for module-style callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub msg: String,
    pub alerts: String,
    pub changed: bool,
    pub failed: bool,
}

impl Response {
    pub fn done(alerts: String) -> Self {
        Self {
            msg: "done".to_string(),
            alerts,
            ..Default::default()
        }
    }

    pub fn failure(msg: String) -> Self {
        Self {
            msg,
            failed: true,
            ..Default::default()
        }
    }
}

/// Write the outcome of a run to `out` in the requested format.
///
/// YAML output goes to `out` only on success; errors are left to the caller
/// to print on stderr. JSON output always produces an envelope.
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    result: &std::result::Result<String, anyhow::Error>,
) -> Result<()> {
    match (format, result) {
        (OutputFormat::Yaml, Ok(alerts)) => {
            out.write_all(alerts.as_bytes()).context("failed to write output")?;
        }
        (OutputFormat::Yaml, Err(_)) => {}
        (OutputFormat::Json, result) => {
            let response = match result {
                Ok(alerts) => Response::done(alerts.clone()),
                Err(e) => Response::failure(format!("{e:#}")),
            };
            let json = serde_json::to_string(&response).context("failed to encode response")?;
            writeln!(out, "{json}").context("failed to write output")?;
        }
    }
    out.flush().context("failed to flush output")
}
