mod commands;
mod terminal;

use std::io;

use commands::{CommandLine, lookup};
use revip_common::config::Config;
use revip_core::resolver::SystemResolver;
use terminal::{input::Prompter, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose)?;

    let cfg: Config = commands.config();
    print::header("reverse ip domain discovery", cfg.quiet);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    lookup::lookup(&mut prompter, &SystemResolver, &cfg)?;
    Ok(())
}
