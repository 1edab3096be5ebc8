use std::{io::IsTerminal, sync::Arc};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tokio::sync::mpsc;
use tracing::debug;
use weather_page_core::{
    Branch, Config, QueryTrigger, ResultWatcher, WeatherFetcher, provider_from_config, render,
    result_slot,
};

use crate::screen;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-page", version, about = "Weather lookup page for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log slot transitions and HTTP activity to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable ANSI styling.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search locations interactively (default).
    Interactive,

    /// Look up one location and print the result.
    Show {
        /// Location name, postcode or "lat,lon". Passed through unchanged.
        location: String,
    },

    /// Store the WeatherAPI.com API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let color = !self.no_color && std::io::stdout().is_terminal();

        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => interactive(&Config::load()?, color).await,
            Command::Show { location } => show(&Config::load()?, &location, color).await,
            Command::Configure => configure(),
        }
    }
}

fn page(config: &Config) -> anyhow::Result<(QueryTrigger<WeatherFetcher>, ResultWatcher)> {
    let provider = provider_from_config(config).context("Cannot start the weather page")?;
    let (slot, watcher) = result_slot(config.stale_results);
    let fetcher = WeatherFetcher::new(Arc::from(provider), slot);
    Ok((QueryTrigger::new(fetcher), watcher))
}

async fn interactive(config: &Config, color: bool) -> anyhow::Result<()> {
    let (trigger, mut watcher) = page(config)?;

    print!("{}", screen::draw(&render(&watcher.current()), color));

    // The renderer redraws on every change and reports each terminal state so
    // the prompt is not shown on top of a pending redraw.
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(async move {
        while let Some(result) = watcher.changed().await {
            print!("{}", screen::draw(&render(&result), color));
            if result.is_terminal() && settled_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        let answer = tokio::task::spawn_blocking(|| Text::new("Search Location").prompt())
            .await
            .context("Search prompt task failed")?;

        match answer {
            Ok(location) => {
                trigger.submit(&location);
                settled_rx.recv().await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("search prompt closed");
                break;
            }
            Err(err) => {
                renderer.abort();
                return Err(err).context("Failed to read location");
            }
        }
    }

    renderer.abort();
    Ok(())
}

async fn show(config: &Config, location: &str, color: bool) -> anyhow::Result<()> {
    let (trigger, mut watcher) = page(config)?;

    trigger.submit(location);
    let result = watcher.settled().await.context("Weather fetcher stopped unexpectedly")?;

    let branch = render(&result);
    print!("{}", screen::draw(&branch, color));

    if let Branch::Error(_) = branch {
        bail!("lookup for {location:?} failed");
    }
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://www.weatherapi.com/")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
