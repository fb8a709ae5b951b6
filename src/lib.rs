//! **MurmurHash3 x64-128 content digests.**
//!
//! `murmur3-digest` computes the 128-bit, non-cryptographic MurmurHash3 x64-128
//! digest of a byte sequence. It is meant for stable fingerprints: deduplication
//! keys, hash-table sharding, and cheap checksums. It is **not** a cryptographic
//! hash and gives no protection against adversarial collisions.
//!
//! Output is bit-for-bit compatible with the reference x64-128 mixing, with each
//! 64-bit lane emitted most significant byte first. That is the order reference
//! test vectors are printed in, so `Digest::to_hex` can be compared to them
//! directly.
//!
//! ## Core Concepts & Modules
//!
//! - **[`Hasher`]**: holds a fixed 64-bit seed (default 0) and hashes whole
//!   buffers or `[offset, offset + length)` windows of them.
//! - **[`Digest`]**: the 16-byte result, with hex rendering and parsing.
//! - **[`config`]**: seed configuration from code, YAML files, or the
//!   `MURMUR3_SEED` environment variable.
//! - **[`error`]**: the error taxonomy. Every error is a caller contract
//!   violation reported before any hashing starts.
//!
//! ## Getting Started
//!
//! ```
//! use murmur3_digest::Hasher;
//!
//! let digest = Hasher::new().compute_hash(b"The quick brown fox jumps over the lazy dog.");
//! assert_eq!(digest.to_hex(), "cd99481f9ee902c9695da1a38987b6e7");
//!
//! let seeded = Hasher::with_seed(38).compute_hash(b"test");
//! assert_eq!(seeded.to_string(), "484389ac868bb47f5eada4a4edfcd9a2");
//! ```
//!
//! ### Hashing a Window
//!
//! ```
//! use murmur3_digest::{ArgumentErrorKind, Hasher};
//!
//! let hasher = Hasher::new();
//! let record = b"AB<payload>CD";
//!
//! let digest = hasher.compute_hash_window(record, 2, 9)?;
//! assert_eq!(digest, hasher.compute_hash(b"<payload>"));
//!
//! // Out-of-range windows are rejected, never clamped
//! let err = hasher.compute_hash_window(record, 8, 10).unwrap_err();
//! assert!(matches!(
//!     err.argument_kind(),
//!     Some(ArgumentErrorKind::WindowOutOfBounds { .. })
//! ));
//! # Ok::<(), murmur3_digest::Murmur3Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (window rejections, config resolution,
//! batch dispatch) and never installs a subscriber itself.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Doc completeness: # Errors sections would only restate the error taxonomy
#![allow(clippy::missing_errors_doc)]

pub mod config;
mod digest;
pub mod error;
mod hasher;
mod murmur3;

// Re-export main types for convenience
pub use config::{ConfigError, HasherConfig, HasherConfigBuilder, SeedValue, Validatable};
pub use digest::{Digest, DIGEST_LEN};
pub use error::{ArgumentErrorKind, ErrorContext, Murmur3Error, Result};
pub use hasher::{Hasher, HASH_SIZE};
