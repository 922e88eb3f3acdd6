use anyhow::{anyhow, Context, Result};
use app::App;
use camino::Utf8PathBuf;
use clap::Parser;
use config::{Config, APP_PREFIX};
use event::EventBus;
use log::{info, warn};
use ratatui::prelude::*;
use simplelog::{LevelFilter, WriteLogger};
use source::ResultsSource;
use std::{fs::File, io};
use tui::Tui;
use xdg::BaseDirectories;

mod app;
mod config;
mod event;
mod navigator;
mod results;
mod source;
mod styles;
mod tui;
mod widgets;

/// Browse THUtorium course search results in your terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Search results JSON to show, or `-` for stdin. Defaults to `results_path` from the config file.
    results: Option<Utf8PathBuf>,

    /// Open course pages in the browser under this URL, ie `https://thutorium.example`
    #[arg(long)]
    web_base: Option<String>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = Config::load().unwrap_or_else(|e| {
        warn!("error loading config, using defaults: {:#}", e);
        Config::default()
    });

    let source = args
        .results
        .or(config.results_path)
        .map(ResultsSource::new)
        .ok_or_else(|| anyhow!("no search results given, and no results_path in config"))?;
    let courses = source.load()?;
    info!("showing {} results from {:?}", courses.len(), source);

    let events = EventBus::new();
    events
        .spawn_terminal_listener()
        .context("error starting terminal listener")?;

    let mut app = App::new(
        courses,
        source,
        events.navigator(),
        args.web_base.or(config.web_base),
    );

    let backend = CrosstermBackend::new(io::stderr());
    let mut tui = Tui::new(Terminal::new(backend)?);
    tui.init()?;

    while app.running {
        tui.draw(&mut app)?;
        app.handle_event(events.next()?);
    }

    tui.exit()?;

    Ok(())
}

/// Log to a file in the cache directory, since the terminal is in use.
fn init_logging(verbose: bool) -> Result<()> {
    let path = BaseDirectories::with_prefix(APP_PREFIX)?
        .place_cache_file("thutorium.log")
        .context("error creating log file directory")?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(
        level,
        simplelog::Config::default(),
        File::create(&path).context("error creating log file")?,
    )?;

    Ok(())
}
