pub mod analyze;
pub mod cipher;
pub mod digest;

pub use self::analyze::*;
pub use self::cipher::*;
pub use self::digest::*;

use crate::error::Result;
use std::io::Read;

/// Use the given text, or read it from `reader` when absent
/// A single trailing newline from the reader is dropped
pub fn resolve_input<R: Read>(text: Option<String>, mut reader: R) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
