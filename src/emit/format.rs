use std::path::Path;

/// Generated artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Go source file with corpus slices and regex constants
    Go,
    /// JSON document, one object per corpus variant
    Json,
}

impl OutputFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "go" => Some(OutputFormat::Go),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Parse a format name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "go" => Some(OutputFormat::Go),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Get default filename for this format
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Go => "tlds.go",
            OutputFormat::Json => "tlds.json",
        }
    }
}
