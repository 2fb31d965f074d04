//! Builds the ordered list of lookup targets.
//!
//! The interactive target (if any) always comes first, followed by the
//! lines of the target file in file order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use revip_common::{debug, error::RevipError, target::Target};

/// Combines the two prompt answers into the target list.
///
/// Both answers are trimmed. Fails with [`RevipError::MissingTarget`] when
/// both are empty and with [`RevipError::FileRead`] when the file cannot be
/// opened or read to the end.
pub fn collect_targets(target: &str, file: &str) -> Result<Vec<Target>, RevipError> {
    let target = target.trim();
    let file = file.trim();

    if target.is_empty() && file.is_empty() {
        return Err(RevipError::MissingTarget);
    }

    let mut targets: Vec<Target> = Vec::new();
    if let Ok(target) = target.parse::<Target>() {
        targets.push(target);
    }

    if !file.is_empty() {
        let file_targets = load_targets_from_file(Path::new(file))?;
        debug!("Loaded {} target(s) from {file}", file_targets.len());
        targets.extend(file_targets);
    }

    Ok(targets)
}

pub fn load_targets_from_file(path: &Path) -> Result<Vec<Target>, RevipError> {
    let to_error = |source: io::Error| RevipError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    load_targets(BufReader::new(file)).map_err(to_error)
}

/// Reads one target per line. Blank lines are skipped; any read error
/// discards everything read so far.
///
/// Lines are decoded lossily, so a line that is not valid UTF-8 still
/// becomes a target (and fails resolution on its own) instead of failing
/// the whole file.
pub fn load_targets<R: BufRead>(mut reader: R) -> io::Result<Vec<Target>> {
    let mut targets = Vec::new();
    let mut skipped: usize = 0;
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        match String::from_utf8_lossy(&buf).parse::<Target>() {
            Ok(target) => targets.push(target),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} blank line(s) in target file");
    }
    Ok(targets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn names(targets: &[Target]) -> Vec<&str> {
        targets.iter().map(Target::as_str).collect()
    }

    #[test]
    fn test_both_answers_empty_is_missing_target() {
        assert!(matches!(
            collect_targets("", ""),
            Err(RevipError::MissingTarget)
        ));
        assert!(matches!(
            collect_targets("  ", "\t"),
            Err(RevipError::MissingTarget)
        ));
    }

    #[test]
    fn test_single_target_without_file() {
        let targets = collect_targets(" example.com ", "").unwrap();
        assert_eq!(names(&targets), vec!["example.com"]);
    }

    #[test]
    fn test_load_targets_keeps_order_and_skips_blanks() {
        let input = Cursor::new("a.com\r\n\nb.com\n  \n10.0.0.1\n");
        let targets = load_targets(input).unwrap();
        assert_eq!(names(&targets), vec!["a.com", "b.com", "10.0.0.1"]);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_drop_neighbours() {
        let input = Cursor::new(b"a.com\n\xffbad.com\nb.com\n".to_vec());
        let targets = load_targets(input).unwrap();

        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].as_str(), "a.com");
        assert_eq!(targets[1].as_str(), "\u{FFFD}bad.com");
        assert_eq!(targets[2].as_str(), "b.com");
    }

    #[test]
    fn test_last_line_without_newline_is_kept() {
        let targets = load_targets(Cursor::new("a.com\nb.com")).unwrap();
        assert_eq!(names(&targets), vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_load_targets_keeps_duplicates() {
        let targets = load_targets(Cursor::new("a.com\na.com\n")).unwrap();
        assert_eq!(names(&targets), vec!["a.com", "a.com"]);
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk went away"));
            }
            self.served = true;
            let line = b"a.com\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_read_error_mid_scan_fails_whole_load() {
        let reader = BufReader::new(FailingReader { served: false });
        assert!(load_targets(reader).is_err());
    }

    #[test]
    fn test_missing_file_is_file_read_error() {
        let path = std::env::temp_dir().join("revip-input-does-not-exist.txt");
        let result = collect_targets("example.com", path.to_str().unwrap());
        match result {
            Err(RevipError::FileRead { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected FileRead, got {:?}", other),
        }
    }
}
