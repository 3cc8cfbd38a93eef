use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lightswitch::{
    render_status, Config, FileStore, OutputMode, Page, PageEvent, PreferenceStore, ThemeMode,
    ThemePair,
};

/// Toggle and persist a light/dark theme preference.
#[derive(Debug, Parser)]
#[command(name = "lightswitch", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the preference files
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Origin the preference is scoped to
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Output mode: auto, term, or text
    #[arg(long, global = true, value_name = "MODE")]
    output: Option<OutputMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the current theme (default)
    Status,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// light or dark
        mode: ThemeMode,
    },
    /// Print the themed page as HTML
    Page {
        /// Document title
        #[arg(long, default_value = "lightswitch")]
        title: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = cli.state_dir {
        config.state_dir = dir;
    }
    if let Some(origin) = cli.origin {
        config.origin = origin;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let store = FileStore::open(&config.state_dir, &config.origin);
    tracing::debug!(path = %store.path().display(), "opening page");

    let mut page = load_page(store);

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => {}
        Command::Toggle => {
            page.dispatch(PageEvent::Click)
                .context("saving theme preference")?;
        }
        Command::Set { mode } => {
            page.controller_mut()
                .set(mode)
                .context("saving theme preference")?;
        }
        Command::Page { title } => {
            let page = page.title(title);
            print!("{}", page.render_html()?);
            return Ok(());
        }
    }

    println!(
        "{}",
        render_status(&ThemePair::default(), page.mode(), config.output)?
    );
    Ok(())
}

/// Opens the page and fires its load event.
///
/// A preference that cannot be read leaves the page in its default dark state;
/// only writes are fatal.
fn load_page<S: PreferenceStore>(store: S) -> Page<S> {
    let mut page = Page::open(store);
    if let Err(e) = page.dispatch(PageEvent::Load) {
        tracing::warn!(error = %e, "could not read theme preference, using {}", page.mode());
    }
    page
}
