use crate::digest::{digest, digest_with, DigestAlgorithm, DigestEntry};
use crate::error::Result;

/// Compute digests for `text` and render them
/// With an algorithm selected, plain output is that digest alone
pub fn show_digests(text: &str, algorithm: Option<DigestAlgorithm>, json: bool) -> Result<String> {
    if let Some(algorithm) = algorithm {
        let entry = DigestEntry {
            algorithm,
            value: digest_with(text, algorithm),
        };
        if json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(&entry)?));
        }
        return Ok(format!("{}\n", entry.value));
    }

    let set = digest(text);
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&set)?));
    }

    let mut output = String::new();
    output.push_str("Cryptographic Hash Generator\n");
    output.push_str("============================\n\n");
    for entry in set.iter() {
        let algorithm = entry.algorithm;
        output.push_str(&format!(
            "{} ({} bits): {}\n",
            algorithm.name().to_uppercase(),
            algorithm.output_bits(),
            algorithm.security_note()
        ));
        output.push_str(&format!("  {}\n", entry.value));
        if algorithm.is_stand_in() {
            output.push_str("  (illustrative rolling hash, not real MD5)\n");
        }
        output.push_str("\n");
    }

    Ok(output)
}
