use std::{
    fs::File,
    io::{self, BufReader},
};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use thutorium_client::{load_search_results, Course};

/// Where search results are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsSource {
    Stdin,
    File(Utf8PathBuf),
}

impl ResultsSource {
    /// `-` means stdin, anything else is a path
    pub fn new(path: Utf8PathBuf) -> Self {
        if path.as_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// Stdin can only be read once
    pub fn can_reload(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn load(&self) -> Result<Vec<Course>> {
        match self {
            Self::Stdin => load_search_results(io::stdin().lock())
                .context("error reading search results from stdin"),
            Self::File(path) => {
                let file =
                    File::open(path).with_context(|| format!("error opening {}", path))?;
                load_search_results(BufReader::new(file))
                    .with_context(|| format!("error reading search results from {}", path))
            }
        }
    }
}
