use crate::command::Command;

use clap::Parser;

/// Plan the register requests for a GivEnergy inverter setting or mode
#[derive(Debug, Parser)]
#[clap(author, version)]
pub struct Options {
    /// Config file to read
    #[clap(short = 'c', long = "config", default_value = "config.yaml")]
    pub config_file: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Options {
    pub fn new() -> Self {
        Self::parse()
    }
}
