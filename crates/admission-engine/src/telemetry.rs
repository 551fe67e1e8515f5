//! Tracing subscriber setup. Events go to stderr so JSON written to stdout stays parseable.

use crate::config::TelemetryConfig;
use std::io::IsTerminal;
use thiserror::Error;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

const ENGINE_TARGET: &str = "admission_engine";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("unable to install tracing subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Each `verbosity` step raises the engine's own
/// events one level (debug, then trace) without touching other targets.
pub fn init(config: &TelemetryConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let filter = build_filter(
        &config.log_level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        verbosity,
    )?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(
    configured: &str,
    env_override: Option<String>,
    verbosity: u8,
) -> Result<EnvFilter, TelemetryError> {
    let spec = env_override
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());
    let filter = parse_filter(&spec)?;

    let engine_level = match verbosity {
        0 => return Ok(filter),
        1 => "debug",
        _ => "trace",
    };
    let directive = format!("{ENGINE_TARGET}={engine_level}");
    let directive = directive
        .parse::<Directive>()
        .map_err(|source| TelemetryError::Filter {
            value: directive.clone(),
            source,
        })?;

    Ok(filter.add_directive(directive))
}

fn parse_filter(spec: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(spec).map_err(|source| TelemetryError::Filter {
        value: spec.to_string(),
        source,
    })
}
