pub mod lookup;

use clap::{ArgAction, Parser};
use revip_common::config::Config;

#[derive(Parser)]
#[command(name = "revip", version)]
#[command(about = "Reverse IP domain discovery.")]
#[command(long_about = "Resolves a domain or IP to its addresses, then lists every hostname \
those addresses reverse-resolve to. The target and an optional target file are asked for \
interactively.")]
pub struct CommandLine {
    /// Never print the banner above result tables
    #[arg(long)]
    pub no_banner: bool,
    /// Hide banner and section headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Show diagnostic output (-vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
