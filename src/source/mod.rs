//! Sources of raw TLD list lines.

mod http;

pub use http::{HttpSource, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for loading the raw list, one string per line
pub trait LineSource {
    fn load_lines(&self) -> Result<Vec<String>>;
}

/// Reads the list from a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        log::info!("Reading TLD list from {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(String::from).collect())
    }
}

/// In-memory list, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl LineSource for MemorySource {
    fn load_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TldError;
    use std::io::Write;

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::from_text("# header\nCOM\n");
        source.add_line("NET");
        assert_eq!(source.load_lines().unwrap(), vec!["# header", "COM", "NET"]);
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# Version 1").unwrap();
        writeln!(file, "AAA").unwrap();
        writeln!(file, "ZW").unwrap();
        file.flush().unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.load_lines().unwrap(), vec!["# Version 1", "AAA", "ZW"]);
    }

    #[test]
    fn test_file_source_missing() {
        let source = FileSource::new("/nonexistent/tlds-alpha-by-domain.txt");
        assert!(matches!(source.load_lines(), Err(TldError::IoError(_))));
    }
}
