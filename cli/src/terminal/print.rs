use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use revip_common::log::PRINT_TARGET;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! rprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// Reports a failure as a plain `Error: ...` line.
pub fn error<E: Display>(err: &E) {
    print(&error_line(err));
}

pub fn error_line<E: Display>(err: &E) -> String {
    format!("{} {}", "Error:".color(colors::ERROR).bold(), err)
}

pub fn found_domains(count: usize, target: &str) {
    print(&found_domains_line(count, target));
}

pub fn found_domains_line(count: usize, target: &str) -> String {
    let count: ColoredString = count.to_string().color(colors::ACCENT).bold();
    format!("Found {} domain(s) for {}:", count, target.color(colors::PRIMARY))
}

pub fn no_domains(target: &str) {
    print(&no_domains_line(target));
}

/// The zero-result line carries no styling so it reads the same on any terminal.
pub fn no_domains_line(target: &str) -> String {
    format!("Found 0 domain(s) for {}", target)
}

pub fn saved_to(path: &str) {
    print(&format!("Results saved to {}", path.color(colors::ACCENT)));
}

pub fn summary(targets: usize, domains: usize, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let targets: ColoredString = format!("{targets} target(s)").bold().green();
    let domains: ColoredString = format!("{domains} domain(s)").bold().yellow();
    let output: ColoredString =
        format!("Lookup Complete: {domains} found across {targets}").color(colors::TEXT_DEFAULT);

    fat_separator();
    centerln(&output.to_string());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
