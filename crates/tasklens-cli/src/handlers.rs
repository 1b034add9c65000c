use std::io::{self, IsTerminal as _, Read as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{DateTime, FixedOffset};
use tasklens_analyzer::{IntentClassifier, SuggestionBuilder, TaskTextAnalyzer, TextAnalyzer as _};
use tasklens_core::{
    Error as CoreError, LoggingConfig, TasklensConfig, parse_reference_time, reference_now,
};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::cli::{Cli, Commands};
use crate::render::Renderer;

/// Filter used when neither `RUST_LOG` nor the config yields a valid one.
const FALLBACK_FILTER: &str = "warn";

/// Configuration plus where it came from.
struct LoadedConfig {
    config: TasklensConfig,
    path: PathBuf,
    /// Why the default file was ignored, if it was
    fallback: Option<CoreError>,
}

/// Execute a parsed command line.
///
/// # Errors
/// Returns an error if the configuration, reference time or input is invalid,
/// or output cannot be written
pub fn run(cli: Cli) -> Result<()> {
    let LoadedConfig {
        config,
        path,
        fallback,
    } = load_config(cli.config.as_deref())?;

    init_logging(&config.logging);
    if let Some(error) = fallback {
        tracing::warn!(
            "Failed to load config from {}: {error}; using defaults",
            path.display()
        );
    }

    let format = cli.format.map_or(config.output.format, Into::into);
    let renderer = Renderer::new(format, config.output.pretty);
    let offset = config.analysis.offset()?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Analyze { now, text } => {
            let now = resolve_now(now.as_deref(), offset)?;
            let text = collect_text(&text)?;
            let result = TaskTextAnalyzer.analyze(&text, now);
            renderer.analysis(&mut out, &result)?;
        }
        Commands::Suggest { now, text } => {
            let now = resolve_now(now.as_deref(), offset)?;
            let text = collect_text(&text)?;
            let suggestion = SuggestionBuilder::new(TaskTextAnalyzer).suggest(&text, now);
            renderer.suggestion(&mut out, &suggestion)?;
        }
        Commands::Intent { text } => {
            let text = collect_text(&text)?;
            renderer.intent(&mut out, IntentClassifier.classify(&text))?;
        }
        Commands::Config => renderer.config(&mut out, &path, &config)?,
    }

    out.flush()?;
    Ok(())
}

/// Load the explicit config strictly; fall back to defaults for the implicit
/// one so a broken `~/.tasklens/config.toml` never blocks analysis.
fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let config = TasklensConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        return Ok(LoadedConfig {
            config,
            path: path.to_path_buf(),
            fallback: None,
        });
    }

    let path = TasklensConfig::config_path()?;
    Ok(match TasklensConfig::load_or_create() {
        Ok(config) => LoadedConfig {
            config,
            path,
            fallback: None,
        },
        Err(error) => LoadedConfig {
            config: TasklensConfig::default(),
            path,
            fallback: Some(error),
        },
    })
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(true)
                .with_level(true),
        )
        .init();
}

fn resolve_now(
    explicit: Option<&str>,
    offset: Option<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    explicit.map_or_else(
        || Ok(reference_now(offset)),
        |input| parse_reference_time(input).map_err(Into::into),
    )
}

/// Join command-line words, or read all of stdin when there are none.
fn collect_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read task text from stdin")?;
    Ok(input)
}
