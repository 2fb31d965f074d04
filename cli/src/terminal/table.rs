//! Bordered two-column result table.
//!
//! Cells come straight from [`ResolvedDomain`] fields, so a hostname with
//! spaces in it stays in the `Domain` column. Column widths are measured on
//! the plain text before any color is applied.

use std::net::IpAddr;

use colored::*;
use revip_common::domain::ResolvedDomain;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};

const HEADERS: [&str; 2] = ["Domain", "IP Address"];

pub fn print(domains: &[ResolvedDomain]) {
    for line in render(domains) {
        print::print(&line);
    }
}

/// Returns the table as lines: top border, header, separator, one line per
/// domain, bottom border.
pub fn render(domains: &[ResolvedDomain]) -> Vec<String> {
    let rows: Vec<[String; 2]> = domains
        .iter()
        .map(|domain| [domain.hostname.clone(), domain.ip.to_string()])
        .collect();

    let mut widths: [usize; 2] = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 4);
    lines.push(border(['┌', '┬', '┐'], &widths));
    lines.push(line([
        cell(&HEADERS[0].to_uppercase(), widths[0], colors::ACCENT),
        cell(&HEADERS[1].to_uppercase(), widths[1], colors::ACCENT),
    ]));
    lines.push(border(['├', '┼', '┤'], &widths));

    for (domain, [hostname, ip]) in domains.iter().zip(&rows) {
        let ip_color: Color = match domain.ip {
            IpAddr::V4(_) => colors::IPV4_ADDR,
            IpAddr::V6(_) => colors::IPV6_ADDR,
        };
        lines.push(line([
            cell(hostname, widths[0], colors::PRIMARY),
            cell(ip, widths[1], ip_color),
        ]));
    }

    lines.push(border(['└', '┴', '┘'], &widths));
    lines
}

fn border([left, mid, right]: [char; 3], widths: &[usize; 2]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&mid.to_string()))
        .color(colors::SEPARATOR)
        .to_string()
}

fn line(cells: [String; 2]) -> String {
    let bar: ColoredString = "│".color(colors::SEPARATOR);
    format!("{bar} {} {bar} {} {bar}", cells[0], cells[1])
}

fn cell(text: &str, width: usize, color: Color) -> String {
    let padding: String = " ".repeat(width.saturating_sub(text.width()));
    format!("{}{}", text.color(color), padding)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
