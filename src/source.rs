// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::ast::Program;
use crate::{BrikError, parse};

/// Short names accepted in place of a path, and the game file each maps to.
const GAME_SHORTCUTS: &[(&[&str], &str)] = &[
    (&["tetris", "t"], "Tetris.brik"),
    (&["snake", "s"], "Snake.brik"),
];

/// A brik source loaded from disk, kept alongside its path for reporting.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Read a brik file.
    ///
    /// # Example
    /// ```ignore
    /// let program = SourceFile::from_file("config/games/Tetris.brik")?.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BrikError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BrikError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        debug!("loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Wrap in-memory source; `path` is only used for reporting.
    pub fn from_str<P: AsRef<Path>>(path: P, content: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content: content.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parse(&self) -> Result<Program, BrikError> {
        parse(&self.content)
    }
}

/// Map a command-line input to a source path. `tetris`/`t` and `snake`/`s`
/// (any case) select the bundled games under `games_dir`; anything else is
/// taken as a path.
pub fn resolve_input<P: AsRef<Path>>(arg: &str, games_dir: P) -> PathBuf {
    let lower = arg.to_lowercase();
    GAME_SHORTCUTS
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
        .map(|(_, file)| games_dir.as_ref().join(file))
        .unwrap_or_else(|| PathBuf::from(arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shortcuts() {
        let games = Path::new("config/games");
        assert_eq!(resolve_input("Tetris", games), games.join("Tetris.brik"));
        assert_eq!(resolve_input("t", games), games.join("Tetris.brik"));
        assert_eq!(resolve_input("SNAKE", games), games.join("Snake.brik"));
        assert_eq!(resolve_input("s", games), games.join("Snake.brik"));
    }

    #[test]
    fn test_resolve_plain_path() {
        assert_eq!(
            resolve_input("levels/custom.brik", "config/games"),
            PathBuf::from("levels/custom.brik")
        );
    }

    #[test]
    fn test_from_file_and_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Snake.brik");
        fs::write(&path, "[board]\nwidth = 20\n").unwrap();

        let source = SourceFile::from_file(&path).expect("Failed to load source");
        assert_eq!(source.path(), path.as_path());
        let program = source.parse().unwrap();
        assert_eq!(program.assignment_count(), 1);
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let err = SourceFile::from_file("no/such/file.brik").unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_from_str_reports_syntax_errors() {
        let source = SourceFile::from_str("inline.brik", "x = ");
        assert!(source.parse().unwrap_err().is_syntax());
        assert_eq!(source.content(), "x = ");
    }
}
