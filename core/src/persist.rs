use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use revip_common::{debug, domain::ResolvedDomain, error::RevipError};

/// Writes one `hostname (ip)` line per domain to `path`, replacing any
/// existing file.
pub fn save_results(path: &Path, domains: &[ResolvedDomain]) -> Result<(), RevipError> {
    let to_error = |source: io::Error| RevipError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    write_results(BufWriter::new(file), domains).map_err(to_error)?;
    debug!("Wrote {} line(s) to {}", domains.len(), path.display());
    Ok(())
}

/// Flushes before returning so buffered write errors are not lost on drop.
pub fn write_results<W: Write>(mut writer: W, domains: &[ResolvedDomain]) -> io::Result<()> {
    for domain in domains {
        writeln!(writer, "{domain}")?;
    }
    writer.flush()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
