use std::io::{BufRead, Write};
use std::path::PathBuf;

use revip_common::{config::Config, debug, domain::ResolvedDomain, target::Target};
use revip_core::{
    input, persist,
    resolver::{self, Discovery, HostResolver},
};

use crate::rprint;
use crate::terminal::{banner, input::Prompter, print, table};

const TARGET_PROMPT: &str = "Enter target domain or IP: ";
const FILE_PROMPT: &str =
    "Enter path to .txt file containing target domains or IPs (leave empty if not using file): ";
const SAVE_PROMPT: &str = "Do you want to save the results to a file? (y/n): ";
const FILE_NAME_PROMPT: &str = "Enter the file name (include .txt extension): ";

/// What happened to one target.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Forward resolution failed.
    Unresolved,
    /// Resolved, but no address had a hostname.
    NoDomains,
    Displayed {
        rows: usize,
        saved_to: Option<PathBuf>,
    },
}

/// Runs one interactive session: asks for the targets, then resolves,
/// displays and optionally saves each of them in input order.
///
/// Lookup and file errors are reported and never returned; only a broken
/// prompt stream ends the session with an error.
pub fn lookup<R, W, H>(
    prompter: &mut Prompter<R, W>,
    resolver: &H,
    cfg: &Config,
) -> anyhow::Result<Vec<Outcome>>
where
    R: BufRead,
    W: Write,
    H: HostResolver,
{
    let target: String = prompter.ask(TARGET_PROMPT)?;
    let file: String = prompter.ask(FILE_PROMPT)?;

    let targets: Vec<Target> = match input::collect_targets(&target, &file) {
        Ok(targets) => targets,
        Err(e) => {
            debug!(fatal = e.is_fatal(), "Target collection failed");
            print::error(&e);
            return Ok(Vec::new());
        }
    };
    debug!("Processing {} target(s)", targets.len());

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(targets.len());
    for (idx, target) in targets.iter().enumerate() {
        if idx > 0 {
            rprint!();
        }
        outcomes.push(process_target(prompter, resolver, target, cfg)?);
    }

    let found: usize = outcomes
        .iter()
        .map(|outcome| match outcome {
            Outcome::Displayed { rows, .. } => *rows,
            _ => 0,
        })
        .sum();
    print::summary(outcomes.len(), found, cfg.quiet);

    Ok(outcomes)
}

fn process_target<R, W, H>(
    prompter: &mut Prompter<R, W>,
    resolver: &H,
    target: &Target,
    cfg: &Config,
) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
    H: HostResolver,
{
    print::header(&format!("reverse lookup {target}"), cfg.quiet);

    let discovery: Discovery = match resolver::discover(resolver, target) {
        Ok(discovery) => discovery,
        Err(e) => {
            print::error(&e);
            return Ok(Outcome::Unresolved);
        }
    };

    for failure in &discovery.failures {
        print::error(failure);
    }

    if discovery.is_empty() {
        print::no_domains(discovery.target.as_str());
        return Ok(Outcome::NoDomains);
    }

    print::found_domains(discovery.domains.len(), discovery.target.as_str());
    if cfg.show_banner() {
        banner::print();
    }
    table::print(&discovery.domains);

    let saved_to: Option<PathBuf> = offer_save(prompter, &discovery.domains)?;
    Ok(Outcome::Displayed {
        rows: discovery.domains.len(),
        saved_to,
    })
}

fn offer_save<R, W>(
    prompter: &mut Prompter<R, W>,
    domains: &[ResolvedDomain],
) -> anyhow::Result<Option<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    if !prompter.confirm(SAVE_PROMPT)? {
        return Ok(None);
    }

    let path = PathBuf::from(prompter.ask(FILE_NAME_PROMPT)?);
    match persist::save_results(&path, domains) {
        Ok(()) => {
            print::saved_to(&path.display().to_string());
            Ok(Some(path))
        }
        Err(e) => {
            print::error(&e);
            Ok(None)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
