//! Cipherlab - classical ciphers, password entropy and digests for teaching
//!
//! Three independent, stateless engines. Each takes a string plus a small
//! configuration value and returns an immutable result.
//!
//! - **cipher**: Caesar, ROT13, Atbash and Base64 transforms
//! - **password**: entropy, strength band, crack-time estimate, weakness warnings
//! - **digest**: SHA-1, SHA-256, SHA-512 and an illustrative legacy stand-in
//!
//! None of this is production cryptography. The ciphers are trivially broken
//! and the "md5" slot is a toy rolling hash, not MD5.
//!
//! ## Example
//!
//! ```
//! use cipherlab::cipher::{transform, Cipher, CipherRequest, Direction};
//! use cipherlab::digest::{digest, DigestAlgorithm};
//! use cipherlab::password::{analyze, StrengthLevel};
//!
//! let request = CipherRequest::new("Hello", Cipher::Caesar, 3, Direction::Encode).unwrap();
//! assert_eq!(transform(&request).unwrap(), "Khoor");
//!
//! let metrics = analyze("password");
//! assert_eq!(metrics.strength, Some(StrengthLevel::Weak));
//!
//! let set = digest("abc");
//! assert_eq!(set.get(DigestAlgorithm::Sha1).as_str().len(), 40);
//! ```

pub mod cipher;
pub mod cli;
pub mod digest;
pub mod error;
pub mod password;

pub use crate::cipher::{transform, Cipher, CipherRequest, Direction};
pub use crate::digest::{digest, DigestAlgorithm, DigestSet, DigestValue};
pub use crate::error::{CipherLabError, Result};
pub use crate::password::{analyze, PasswordMetrics, StrengthLevel, Weakness};
