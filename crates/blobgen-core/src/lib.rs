//! # blobgen-core
//!
//! A library for turning binary files into C array declarations that can be
//! compiled straight into a program.
//!
//! ## Architecture
//!
//! - [`blob`]: Input validation, file ingestion and document rendering
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use blobgen_core::generate;
//!
//! let doc = generate("./build/libfoo.bin", "foo")?;
//! print!("{}", doc);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The output for a three byte file looks like:
//!
//! ```text
//! /** Autogenerated file */
//! #include <stdint.h>
//! const uint8_t __foo_blob[] = {
//! 0x00,0x7f,0xff,
//! };
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod blob;
pub mod error;

// Re-export primary types for convenience
pub use blob::{
    generate, generate_from_bytes, is_c_identifier, Generator, GeneratorConfig, InputSpec,
    OutputDocument, WRAP_WIDTH,
};
pub use error::{Error, Result};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
