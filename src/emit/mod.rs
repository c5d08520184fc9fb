//! Serializes compiled corpora into a generated artifact.

pub mod format;
mod go;
mod json;

pub use format::OutputFormat;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::generator::CompiledCorpus;

/// Default Go package for generated sources
pub const DEFAULT_GO_PACKAGE: &str = "urlx";

/// Emitter options
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub format: OutputFormat,
    /// Go package name (ignored for JSON)
    pub package: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Go,
            package: DEFAULT_GO_PACKAGE.to_string(),
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}

/// Writes compiled corpora in the configured format
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Render the artifact to a string
    pub fn render(&self, corpora: &[CompiledCorpus]) -> Result<String> {
        match self.options.format {
            OutputFormat::Go => go::render(corpora, &self.options.package),
            OutputFormat::Json => json::render(corpora),
        }
    }

    /// Render and write to `path`, via a temporary sibling file
    pub fn write_to(&self, corpora: &[CompiledCorpus], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.render(corpora)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::info!("Wrote {} ({} bytes)", path.display(), text.len());
        Ok(())
    }
}
