use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};

use crate::store::{FileStore, Store, Unavailable};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// TOML file keeping the selected rate between runs.
    ///
    /// Without it, the selection only lives for the current run.
    #[clap(long = "store-path", env = "RATE_STORE_PATH", global = true)]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn store(&self) -> Box<dyn Store> {
        match &self.store_path {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(Unavailable),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the selected rate and its off-peak hours.
    Show,

    /// Select a rate by name. Unknown names select the default one.
    Set(SetArgs),

    /// List all known rates.
    List,

    /// Check whether a moment falls into the off-peak window of the selected rate.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct SetArgs {
    /// Rate name, for example `F3`.
    pub name: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Moment to check, in RFC 3339. Defaults to now.
    #[clap(long)]
    pub at: Option<DateTime<Local>>,
}
