use anyhow::Context;
use askloop::{ChannelError, LineChannel, TextChannel};
use clap::{ArgAction, Parser};
use std::{fs::File, io, io::BufReader, path::PathBuf};
use tracing::{debug, warn};

mod demo;
mod menu;
mod user;
mod validators;

/// Interactive tour of askloop's validated reads.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Read answers from this file, one per line, instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut items = demo::items();
        let outcome = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open input file {}", path.display()))?;
                debug!(path = %path.display(), "reading answers from file");
                session(&mut items, &mut LineChannel::new(BufReader::new(file), io::stdout()))
            }
            None => session(&mut items, &mut LineChannel::stdio()),
        };

        match outcome {
            Err(ChannelError::Closed) => {
                warn!("input ended before Exit was chosen");
                Ok(())
            }
            other => other.context("console session failed"),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn session(items: &mut [askloop::Item], io: &mut dyn TextChannel) -> Result<(), ChannelError> {
    io.write_line(&format!("askloop demo {}", env!("CARGO_PKG_VERSION")))?;
    io.write_line(&"-".repeat(40))?;
    menu::run(items, io)
}

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
