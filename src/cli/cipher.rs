use crate::cipher::{transform, Cipher, CipherRequest, Direction, DEFAULT_SHIFT};
use crate::error::Result;
use serde::Serialize;

/// Options for the cipher command
#[derive(Debug, Clone)]
pub struct CipherOptions {
    pub cipher: Cipher,
    pub shift: i64,
    pub direction: Direction,
    pub json: bool,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            cipher: Cipher::default(),
            shift: i64::from(DEFAULT_SHIFT),
            direction: Direction::default(),
            json: false,
        }
    }
}

#[derive(Serialize)]
struct CipherReport<'a> {
    cipher: Cipher,
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    shift: Option<u8>,
    output: &'a str,
}

/// Run a cipher over `text` and render the result
/// Plain output is the transformed text alone, so it can be piped
pub fn run_cipher(text: &str, options: &CipherOptions) -> Result<String> {
    let request = CipherRequest::new(text, options.cipher, options.shift, options.direction)?;
    let output = transform(&request)?;

    if !options.json {
        return Ok(format!("{}\n", output));
    }

    let report = CipherReport {
        cipher: request.cipher,
        direction: request.direction,
        shift: (request.cipher == Cipher::Caesar).then_some(request.shift),
        output: &output,
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
}
