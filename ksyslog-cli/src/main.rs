//! Emits kernel log messages through a configured syslog backend.
//!
//! The backend is bound once at start-up from an optional TOML file, with command-line flags taking precedence.
//! `--interrupt` emits the message from a simulated interrupt handler, which exercises the fallback console and the
//! silent drop of task-only backends.

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::Parser;
use ksyslog::{Level, Outcome};
use ksyslog_osal_std::context::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use self::config::{Backend, Config};

mod config;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
    /// Backend configuration file.
    #[arg(long, env = "KSYSLOG_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Overrides the configured backend.
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Prefixes messages with the time since start-up.
    #[arg(long)]
    timestamps: bool,

    /// Only enables this level and the more severe ones.
    #[arg(long, value_name = "LEVEL")]
    mask_upto: Option<Level>,

    /// Level of the message.
    #[arg(long, short, default_value = "info")]
    priority: Level,

    /// Emits the message from a simulated interrupt handler.
    #[arg(long)]
    interrupt: bool,

    /// The message, words are joined with spaces.
    #[arg(required = true)]
    message: Vec<String>,
}

impl Arguments {
    /// Loads the configuration file, if any, and applies the command-line overrides.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        config.timestamps |= self.timestamps;
        if let Some(level) = self.mask_upto {
            config.levels = Some(
                Level::ALL
                    .into_iter()
                    .filter(|enabled| *enabled <= level)
                    .map(|enabled| enabled.as_str().to_owned())
                    .collect(),
            );
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .with_env_var("KSYSLOG_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish(),
    )?;

    arguments.config()?.install()?;

    let message = arguments.message.join(" ");
    let emit = || ksyslog::syslog!(arguments.priority, "{message}\n");
    let result = if arguments.interrupt {
        Context::interrupt(emit)
    } else {
        emit()
    };

    match result? {
        Outcome::Delivered(bytes) => tracing::debug!(bytes, "delivered"),
        Outcome::Discarded => tracing::info!("no backend configured, message discarded"),
        Outcome::Dropped => {
            tracing::warn!("backend unusable from interrupt context, message dropped");
        }
        Outcome::Suppressed => {
            tracing::info!(level = %arguments.priority, "level disabled, message suppressed");
        }
    }

    Ok(())
}
