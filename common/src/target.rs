//! # Lookup Target Model
//!
//! A target is whatever the user typed (or a line of the target file):
//! a domain name such as `example.com` or an address literal such as
//! `93.184.216.34` or `::1`. No further validation happens here; the system
//! resolver decides whether the name exists.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the address when the target is an IP literal.
    pub fn ip_literal(&self) -> Option<IpAddr> {
        self.0.parse::<IpAddr>().ok()
    }
}

impl FromStr for Target {
    type Err = String;

    /// Trims surrounding whitespace and rejects empty input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("target cannot be empty".to_string());
        }
        Ok(Target(trimmed.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
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
