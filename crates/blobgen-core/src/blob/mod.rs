//! Blob generation module.
//!
//! This module turns a binary file into an [`OutputDocument`]: a C array
//! declaration whose elements are the file's bytes in order.
//!
//! ## Pipeline
//!
//! 1. Check that the input path names an existing regular file
//! 2. Optionally check its size against [`GeneratorConfig::max_input_size`]
//! 3. Read the whole file into an immutable buffer
//! 4. Wrap the buffer and symbol token in an [`OutputDocument`]
//!
//! Nothing is written anywhere; rendering happens when the caller formats
//! or writes the document.

mod document;

use crate::error::{Error, Result};
use bytes::Bytes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

pub use document::{OutputDocument, AUTOGEN_MARKER, CLOSING_LINE, INCLUDE_LINE, WRAP_WIDTH};

/// The two values a conversion is driven by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    /// Binary file to embed
    pub file_path: PathBuf,
    /// Token placed between `__` and `_blob` in the array name
    pub symbol_name: String,
}

impl InputSpec {
    /// Creates a new input spec
    pub fn new(file_path: impl Into<PathBuf>, symbol_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            symbol_name: symbol_name.into(),
        }
    }
}

/// Configuration for the generator
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Largest accepted input in bytes (0 = unlimited)
    pub max_input_size: u64,
}

impl GeneratorConfig {
    /// Creates a new generator config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted input size
    pub fn max_input_size(mut self, max: u64) -> Self {
        self.max_input_size = max;
        self
    }
}

/// Converts binary files into array declarations
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Reads the file named by `spec` and builds its document
    pub fn generate(&self, spec: &InputSpec) -> Result<OutputDocument> {
        let data = self.read_input(&spec.file_path)?;
        debug!("Read {} bytes from {}", data.len(), spec.file_path.display());
        Ok(generate_from_bytes(&spec.symbol_name, data))
    }

    fn read_input(&self, path: &Path) -> Result<Bytes> {
        // Existence is checked up front so a missing file is reported as such
        // rather than as a generic read failure.
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => {
                trace!("{} exists but is not a regular file", path.display());
                return Err(Error::file_not_found(path));
            }
            Err(e) => {
                trace!("Cannot stat {}: {}", path.display(), e);
                return Err(Error::file_not_found(path));
            }
        };

        let limit = self.config.max_input_size;
        if limit > 0 && metadata.len() > limit {
            return Err(Error::input_too_large(path, metadata.len(), limit));
        }

        trace!("Reading {}", path.display());
        let data = fs::read(path).map_err(|e| Error::file_read(path, e))?;
        Ok(Bytes::from(data))
    }
}

/// Builds a document from bytes already in memory
pub fn generate_from_bytes(symbol_name: &str, data: impl Into<Bytes>) -> OutputDocument {
    if !is_c_identifier(symbol_name) {
        warn!(
            "Symbol '{}' does not form a valid C identifier; emitting it verbatim",
            symbol_name
        );
    }
    OutputDocument::new(symbol_name, data)
}

/// Reads `file_path` and builds the declaration for `symbol_name`
///
/// This is a convenience function using the default configuration.
pub fn generate(file_path: impl AsRef<Path>, symbol_name: &str) -> Result<OutputDocument> {
    Generator::new().generate(&InputSpec::new(file_path.as_ref(), symbol_name))
}

/// Returns true if `__<symbol>_blob` would be a valid C identifier.
///
/// The prefix already supplies a leading non-digit, so the token only has to
/// be made of ASCII letters, digits and underscores.
pub fn is_c_identifier(symbol: &str) -> bool {
    symbol
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
