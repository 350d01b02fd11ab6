use std::path::PathBuf;

mod map;
mod play;
mod suspects;

use clap::ArgAction;
use detective_quest::{Config, domain::OverflowPolicy, terminal::ColorChoice};
use map::Map;
use play::Play;
use suspects::Suspects;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// What to do with names or clues over their length limit
    #[arg(long, value_name = "POLICY", global = true)]
    overflow: Option<OverflowPolicy>,

    /// When to colour output
    #[arg(long, value_name = "WHEN", global = true)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.settings()?;
        detective_quest::terminal::init(config.color);
        tracing::debug!(?config, "settings resolved");

        self.command
            .unwrap_or_else(|| Command::Play(Play::default()))
            .run(&config)
    }

    /// File settings first, then command-line overrides.
    fn settings(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(overflow) = self.overflow {
            config.overflow = overflow;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        Ok(config)
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

        // stdout carries the game transcript, so logs go to stderr.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Open the interactive investigation (default)
    Play(Play),

    /// Report on the seeded suspect file without playing
    Suspects(Suspects),

    /// Print the mansion layout
    Map(Map),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Play(command) => command.run(config)?,
            Self::Suspects(command) => command.run(config)?,
            Self::Map(command) => command.run(config)?,
        }
        Ok(())
    }
}
