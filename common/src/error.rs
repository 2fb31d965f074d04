use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the lookup pipeline reports to the user.
///
/// `MissingTarget` and `FileRead` end the session before any lookup.
/// The remaining variants only skip the target, address or save attempt
/// they belong to.
#[derive(Debug, Error)]
pub enum RevipError {
    #[error("Target or file is mandatory")]
    MissingTarget,

    #[error("Failed to load targets from file: {}: {source}", path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error("Failed to perform DNS lookup for {target}: {source}")]
    DnsLookup { target: String, source: io::Error },

    #[error("Failed to perform reverse DNS lookup for IP {ip}: {source}")]
    ReverseDnsLookup { ip: IpAddr, source: io::Error },

    #[error("Failed to save results to file: {}: {source}", path.display())]
    FileWrite { path: PathBuf, source: io::Error },
}

impl RevipError {
    /// Whether the session has to stop after reporting this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingTarget | Self::FileRead { .. })
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
