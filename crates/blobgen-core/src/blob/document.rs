//! Textual rendering of an embedded blob.
//!
//! The layout is a fixed contract that downstream build steps may parse,
//! so every character emitted here is load-bearing.

use bytes::Bytes;
use std::fmt;
use std::io;

/// Marker comment on the first line of every generated file
pub const AUTOGEN_MARKER: &str = "/** Autogenerated file */";

/// Include line providing `uint8_t`
pub const INCLUDE_LINE: &str = "#include <stdint.h>";

/// Closing line of the array declaration
pub const CLOSING_LINE: &str = "};";

/// Number of byte literals per data line
pub const WRAP_WIDTH: usize = 16;

/// A rendered C array declaration holding the bytes of one input file.
///
/// The document owns its bytes and renders lazily; [`fmt::Display`] and
/// [`OutputDocument::write_to`] both produce the exact same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    symbol: String,
    data: Bytes,
}

impl OutputDocument {
    /// Creates a document for the given symbol token and bytes
    pub fn new(symbol: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            symbol: symbol.into(),
            data: data.into(),
        }
    }

    /// The symbol token as supplied by the caller
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Full name of the declared array: `__<symbol>_blob`
    pub fn array_name(&self) -> String {
        format!("__{}_blob", self.symbol)
    }

    /// Raw bytes embedded in the document
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of embedded bytes
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Declaration line opening the array
    pub fn declaration(&self) -> String {
        format!("const uint8_t {}[] = {{", self.array_name())
    }

    /// Iterates over the document's lines, without line terminators
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let preamble = [
            AUTOGEN_MARKER.to_string(),
            INCLUDE_LINE.to_string(),
            self.declaration(),
        ];
        preamble
            .into_iter()
            .chain(self.data.chunks(WRAP_WIDTH).map(data_line))
            .chain(std::iter::once(CLOSING_LINE.to_string()))
    }

    /// Writes the document to an I/O sink
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", AUTOGEN_MARKER)?;
        writeln!(f, "{}", INCLUDE_LINE)?;
        writeln!(f, "{}", self.declaration())?;
        // Every data line, full or not, ends in exactly one line break, so an
        // empty body or a multiple of WRAP_WIDTH bytes has no blank line
        // before the closing brace.
        for chunk in self.data.chunks(WRAP_WIDTH) {
            write_literals(f, chunk)?;
            f.write_str("\n")?;
        }
        writeln!(f, "{}", CLOSING_LINE)
    }
}

/// Writes each byte as `0xhh,` with no separator
fn write_literals(f: &mut impl fmt::Write, chunk: &[u8]) -> fmt::Result {
    for byte in chunk {
        write!(f, "0x{:02x},", byte)?;
    }
    Ok(())
}

fn data_line(chunk: &[u8]) -> String {
    let mut line = String::with_capacity(chunk.len() * 5);
    // Writing into a String cannot fail
    let _ = write_literals(&mut line, chunk);
    line
}
