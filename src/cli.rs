extern crate clap;

use std::{
    num::{NonZeroU64, NonZeroUsize},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "ngidx-bin", about = "Substring search over conversation records")]
pub struct Cli {
    /// JSON configuration file.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one query against a records file.
    Search(Search),

    /// Print the visible window of a list.
    Window(Window),

    /// Read queries from stdin, one per line. `:reload` re-reads the records.
    Interactive(Interactive),
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// JSON array of conversations.
    #[arg(long, short = 'r')]
    pub records: PathBuf,

    #[arg(long, short = 'g')]
    pub min_gram: Option<NonZeroUsize>,
}

#[derive(Debug, Args)]
pub struct Search {
    #[command(flatten)]
    pub index: IndexArgs,

    #[arg(long, short = 'q', default_value = "")]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct Window {
    #[arg(long, short = 'n')]
    pub count: usize,

    #[arg(long, short = 's', default_value_t = 0.0, allow_negative_numbers = true)]
    pub scroll_top: f64,

    #[arg(long)]
    pub item_height: Option<f64>,

    #[arg(long)]
    pub container_height: Option<f64>,

    #[arg(long)]
    pub overscan: Option<usize>,
}

#[derive(Debug, Args)]
pub struct Interactive {
    #[command(flatten)]
    pub index: IndexArgs,

    #[arg(long, short = 't')]
    pub throttle_ms: Option<NonZeroU64>,
}

impl IndexArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(min_gram) = self.min_gram {
            config.min_gram = min_gram.get();
        }
    }
}

impl Window {
    pub fn apply(&self, config: &mut Config) {
        if let Some(item_height) = self.item_height {
            config.item_height = item_height;
        }
        if let Some(container_height) = self.container_height {
            config.container_height = container_height;
        }
        if let Some(overscan) = self.overscan {
            config.overscan = overscan;
        }
    }
}

impl Interactive {
    pub fn apply(&self, config: &mut Config) {
        self.index.apply(config);
        if let Some(throttle_ms) = self.throttle_ms {
            config.throttle_ms = throttle_ms.get();
        }
    }
}
