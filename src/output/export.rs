//! Write-once CSV export
//!
//! Files are created only if absent. An existing file is never truncated,
//! overwritten, or merged, and a failed write never leaves a partial file at
//! the target path.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Letter counts in distribution order
pub const LETTER_DISTRIBUTION_FILE: &str = "letter-distribution";
/// Every guess word with its coverage score
pub const OPTIMAL_WORDS_FILE: &str = "optimal-words";
/// Near-disjoint selections per overlap level
pub const UNIQUE_OPTIMAL_WORDS_FILE: &str = "unique-optimal-words";

/// What happened to an export target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// The file already existed and was left alone
    Skipped(PathBuf),
}

impl ExportOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Write `contents` to `<dir>/<name>.csv` unless that file exists
///
/// The data goes to a temporary file in `dir` first, which is then moved into
/// place without replacing anything already there.
///
/// # Errors
///
/// Returns any I/O error other than the file already existing.
pub fn write_if_absent(dir: &Path, name: &str, contents: &str) -> io::Result<ExportOutcome> {
    write_with(dir, name, |file| file.write_all(contents.as_bytes()))
}

fn write_with<F>(dir: &Path, name: &str, write: F) -> io::Result<ExportOutcome>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let path = dir.join(format!("{name}.csv"));
    if path.exists() {
        return Ok(skipped(path));
    }

    // Dropping the temp file on any early return deletes it
    let mut temp_file = NamedTempFile::new_in(dir)?;
    write(temp_file.as_file_mut())?;
    temp_file.as_file().sync_all()?;

    match temp_file.persist_noclobber(&path) {
        Ok(_) => {
            log::info!("Wrote {}", path.display());
            Ok(ExportOutcome::Written(path))
        }
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(skipped(path)),
        Err(e) => Err(e.error),
    }
}

fn skipped(path: PathBuf) -> ExportOutcome {
    log::info!("{} already exists, not overwriting", path.display());
    ExportOutcome::Skipped(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dir_entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn writes_new_file() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = write_if_absent(dir.path(), "letters", "Letter,Occurrences\nE,3").unwrap();

        let expected = dir.path().join("letters.csv");
        assert_eq!(outcome, ExportOutcome::Written(expected.clone()));
        assert_eq!(fs::read_to_string(&expected).unwrap(), "Letter,Occurrences\nE,3");
        assert_eq!(dir_entries(dir.path()), [expected]);
    }

    #[test]
    fn existing_file_is_left_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        fs::write(&path, "original").unwrap();

        let outcome = write_if_absent(dir.path(), "words", "replacement").unwrap();

        assert_eq!(outcome, ExportOutcome::Skipped(path.clone()));
        assert_eq!(fs::read_to_string(path).unwrap(), "original");
    }

    #[test]
    fn second_write_is_skipped() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_if_absent(dir.path(), "words", "first").unwrap();
        let second = write_if_absent(dir.path(), "words", "second").unwrap();

        assert!(matches!(first, ExportOutcome::Written(_)));
        assert!(matches!(second, ExportOutcome::Skipped(_)));
        assert_eq!(first.path(), second.path());
        assert_eq!(fs::read_to_string(second.path()).unwrap(), "first");
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();

        let result = write_with(dir.path(), "optimal-words", |file| {
            file.write_all(b"Word,Rank\ncrane,")?;
            Err(io::Error::other("No space left on device"))
        });

        assert!(result.is_err());
        assert!(dir_entries(dir.path()).is_empty());

        // A later run still gets to write the file
        let retry = write_if_absent(dir.path(), "optimal-words", "Word,Rank").unwrap();
        assert!(matches!(retry, ExportOutcome::Written(_)));
        assert_eq!(fs::read_to_string(retry.path()).unwrap(), "Word,Rank");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(write_if_absent(&missing, "words", "data").is_err());
    }
}
