//! Digest generation: the SHA family plus one illustrative legacy stand-in
//!
//! Every algorithm hashes the UTF-8 bytes of the input text.

use crate::error::{CipherLabError, Result};
use ::digest::Digest;
use serde::{Serialize, Serializer};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Rendered value of an unset slot
pub const UNSET: &str = "--";

/// Digest slots, in increasing output-size order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// Labelled "md5" but NOT MD5. See [`ToyRollingHash`].
    #[serde(rename = "md5")]
    Md5StandIn,
    Sha1,
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [Self::Md5StandIn, Self::Sha1, Self::Sha256, Self::Sha512];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5StandIn => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    pub fn output_bits(&self) -> usize {
        match self {
            Self::Md5StandIn => 128,
            Self::Sha1 => 160,
            Self::Sha256 => 256,
            Self::Sha512 => 512,
        }
    }

    pub fn security_note(&self) -> &'static str {
        match self {
            Self::Md5StandIn => "Deprecated - for checksums only",
            Self::Sha1 => "Weak - avoid for security",
            Self::Sha256 => "Strong - widely used and secure",
            Self::Sha512 => "Very Strong - maximum security",
        }
    }

    /// Not a real implementation of the algorithm it is labelled after
    pub fn is_stand_in(&self) -> bool {
        matches!(self, Self::Md5StandIn)
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = CipherLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5StandIn),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(CipherLabError::UnsupportedAlgorithm(format!("digest: {}", s))),
        }
    }
}

/// A digest slot: lowercase hex, or unset for empty input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestValue {
    Unset,
    Hex(String),
}

impl DigestValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => UNSET,
            Self::Hex(hex) => hex,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl std::fmt::Display for DigestValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DigestValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Hex(hex) => serializer.serialize_str(hex),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestEntry {
    pub algorithm: DigestAlgorithm,
    pub value: DigestValue,
}

/// One entry per [`DigestAlgorithm::ALL`], in that order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DigestSet {
    entries: Vec<DigestEntry>,
}

impl DigestSet {
    pub fn get(&self, algorithm: DigestAlgorithm) -> &DigestValue {
        // Every algorithm has a slot
        &self.entries[algorithm as usize].value
    }

    pub fn iter(&self) -> impl Iterator<Item = &DigestEntry> {
        self.entries.iter()
    }

    pub fn is_unset(&self) -> bool {
        self.entries.iter().all(|e| e.value.is_unset())
    }
}

/// Compute every digest slot for `text`
pub fn digest(text: &str) -> DigestSet {
    log::debug!("digest: len={}", text.len());
    let entries = DigestAlgorithm::ALL
        .into_iter()
        .map(|algorithm| DigestEntry {
            algorithm,
            value: digest_with(text, algorithm),
        })
        .collect();
    DigestSet { entries }
}

/// Compute a single slot
pub fn digest_with(text: &str, algorithm: DigestAlgorithm) -> DigestValue {
    if text.is_empty() {
        return DigestValue::Unset;
    }
    let data = text.as_bytes();
    let hex = match algorithm {
        DigestAlgorithm::Md5StandIn => ToyRollingHash::hex(data),
        DigestAlgorithm::Sha1 => hex_digest::<Sha1>(data),
        DigestAlgorithm::Sha256 => hex_digest::<Sha256>(data),
        DigestAlgorithm::Sha512 => hex_digest::<Sha512>(data),
    };
    DigestValue::Hex(hex)
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// ILLUSTRATIVE ONLY. This is not MD5 and will never match an MD5 digest.
///
/// A 32-bit multiply-rotate-accumulate rolling hash used to give the UI a
/// "deprecated" slot to contrast with the SHA family. The 32-bit state is
/// rendered as 8 hex digits repeated four times so it has MD5's width.
/// Collisions are trivial to find.
pub struct ToyRollingHash;

impl ToyRollingHash {
    pub fn hash(data: &[u8]) -> u32 {
        let mut hash: u32 = 0;
        for &byte in data {
            hash = hash.wrapping_add(u32::from(byte));
            hash = hash.wrapping_add(hash.rotate_left(10));
            hash ^= hash >> 6;
        }
        hash = hash.wrapping_add(hash.rotate_left(3));
        hash ^= hash >> 11;
        hash.wrapping_add(hash.rotate_left(15))
    }

    pub fn hex(data: &[u8]) -> String {
        format!("{:08x}", Self::hash(data)).repeat(4)
    }
}
