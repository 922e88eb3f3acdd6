use std::fs::File;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use log::debug;
use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

pub const APP_PREFIX: &str = "thutorium-tui";

/// User configuration, read from `config.json` in the XDG config directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search results to show when none are given on the command line
    #[serde(default)]
    pub results_path: Option<Utf8PathBuf>,

    /// Base URL of the THUtorium web app. Course pages are opened in the browser under this.
    #[serde(default)]
    pub web_base: Option<String>,
}

impl Config {
    /// Load the config file, or the defaults if there isn't one.
    pub fn load() -> Result<Self> {
        let Some(path) = BaseDirectories::with_prefix(APP_PREFIX)?.find_config_file("config.json")
        else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;
        debug!("loaded config from {}: {:?}", path.display(), config);

        Ok(config)
    }
}
