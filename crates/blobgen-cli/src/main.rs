//! blobgen - Embed a binary file in C source as a byte array
//!
//! Reads a binary file and prints a `const uint8_t` array declaration holding
//! its bytes, ready to be compiled into programs that cannot load resources
//! at runtime.

use anyhow::{Context, Result};
use blobgen_core::{Generator, InputSpec, OutputDocument};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Generate a C array from the binary dump of a library
#[derive(Parser, Debug)]
#[command(name = "blobgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the binary file to embed
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    file: PathBuf,

    /// Library name; the array is declared as `__<NAME>_blob`
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    name: String,

    /// Verbosity level (-v, -vv, -vvv), given after FILE and NAME
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input_spec(&self) -> InputSpec {
        InputSpec::new(&self.file, &self.name)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the generated source, so logs go to stderr
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    run(&cli, stdout.lock())
}

/// Generate the document for `cli` and write it to `out`
///
/// The document is built completely before the first byte is written, so
/// any input error leaves `out` untouched.
fn run(cli: &Cli, out: impl Write) -> Result<()> {
    let document = build_document(cli)?;

    info!(
        "Embedding {} bytes from {} as {}",
        document.byte_len(),
        cli.file.display(),
        document.array_name()
    );

    document
        .write_to(BufWriter::new(out))
        .context("Failed to write generated source")?;

    debug!("Wrote {} literals", document.byte_len());
    Ok(())
}

fn build_document(cli: &Cli) -> Result<OutputDocument> {
    Generator::new()
        .generate(&cli.input_spec())
        .with_context(|| format!("Cannot embed {}", cli.file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobgen_core::Error;
    use tempfile::TempDir;

    fn cli_for(file: PathBuf, name: &str) -> Cli {
        Cli {
            file,
            name: name.to_string(),
            verbose: 0,
        }
    }

    #[test]
    fn test_run_writes_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lib.bin");
        std::fs::write(&path, [0x00u8, 0x7f, 0xff]).unwrap();

        let mut out = Vec::new();
        run(&cli_for(path, "test"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/** Autogenerated file */\n#include <stdint.h>\nconst uint8_t __test_blob[] = {\n0x00,0x7f,0xff,\n};\n"
        );
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.bin");

        let mut out = Vec::new();
        let err = run(&cli_for(path.clone(), "gone"), &mut out).unwrap_err();

        assert!(out.is_empty());
        let root = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(root, Error::FileNotFound { .. }));
        assert!(format!("{:#}", err).contains("missing.bin"));
    }

    #[test]
    fn test_requires_two_arguments() {
        assert!(Cli::try_parse_from(["blobgen"]).is_err());
        assert!(Cli::try_parse_from(["blobgen", "lib.bin"]).is_err());

        let cli = Cli::try_parse_from(["blobgen", "lib.bin", "ucell"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("lib.bin"));
        assert_eq!(cli.name, "ucell");
    }

    #[test]
    fn test_hyphenated_arguments_are_values() {
        let cli = Cli::try_parse_from(["blobgen", "lib.bin", "-weird"]).unwrap();
        assert_eq!(cli.name, "-weird");

        let cli = Cli::try_parse_from(["blobgen", "lib.bin", "-v"]).unwrap();
        assert_eq!(cli.name, "-v");
        assert_eq!(cli.verbose, 0);

        let cli = Cli::try_parse_from(["blobgen", "-raw.bin", "ucell"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("-raw.bin"));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["blobgen", "lib.bin", "ucell", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.name, "ucell");
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
