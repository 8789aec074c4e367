mod cli;
mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

use promerge_rules::loader::RuleLoader;
use promerge_rules::pipeline::run_inputs;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{CliConfig, ModuleArgs};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the merged rules.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let (format, result) = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => (config.resolve_format(&args), execute(&args, &config)),
        Err(e) => (
            args.format.unwrap_or_default(),
            Err(e.context("failed to load configuration")),
        ),
    };

    let mut stdout = std::io::stdout().lock();
    let yaml_to_file = format == OutputFormat::Yaml && args.output.is_some();
    if !yaml_to_file {
        if let Err(e) = output::render(&mut stdout, format, &result) {
            error!(error = %format!("{e:#}"), "failed to write result");
            return ExitCode::FAILURE;
        }
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if format == OutputFormat::Yaml {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Resolve inputs, merge, apply overrides, and optionally write the output file.
fn execute(args: &CliArgs, config: &CliConfig) -> Result<String> {
    let mut inputs = args.inputs.clone();
    if let Some(ref args_file) = args.args_file {
        let module_args = ModuleArgs::load(Path::new(args_file))?;
        inputs.push(module_args.rules_path);
    }
    if inputs.is_empty() {
        bail!("no rule inputs provided");
    }

    let loader = RuleLoader::new(config.loader_options(args));
    let yaml = run_inputs(&loader, &inputs, &config.export_options(args))
        .context("failed to merge rule files")?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &yaml)
            .with_context(|| format!("failed to write output file: {path}"))?;
        info!(path = %path, "wrote merged rules");
    }

    Ok(yaml)
}
