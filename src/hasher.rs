//! The seeded hasher.
//!
//! A [`Hasher`] only holds its seed, so one instance can be shared freely
//! across threads; every call works on its own lanes and its own input window.

use std::fmt;
use std::ops::Range;
use std::path::Path;

use rayon::prelude::*;

use crate::config::{load_config_file, load_or_default, HasherConfig};
use crate::digest::Digest;
use crate::error::{ArgumentErrorKind, ErrorContext, Murmur3Error, Result};
use crate::murmur3::hash_x64_128;

/// Size of the computed hash, in bits.
pub const HASH_SIZE: usize = 128;

/// MurmurHash3 x64-128 hasher with a fixed seed.
///
/// # Example
///
/// ```
/// use murmur3_digest::Hasher;
///
/// let hasher = Hasher::new();
/// assert_eq!(
///     hasher.compute_hash(b"hello").to_hex(),
///     "cbd8a7b341bd9b025b1e906a48ae1d19"
/// );
///
/// // Hash only the bytes between the padding
/// let padded = b"  hello  ";
/// let digest = hasher.compute_hash_window(padded, 2, 5)?;
/// assert_eq!(digest, hasher.compute_hash(b"hello"));
/// # Ok::<(), murmur3_digest::Murmur3Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hasher {
    seed: u64,
}

impl Hasher {
    /// Create a hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Build a hasher from a validated configuration.
    pub fn from_config(config: &HasherConfig) -> Result<Self> {
        let seed = config
            .resolve_seed()
            .context("building hasher from config")?;
        tracing::debug!("Resolved hasher seed {:#x}", seed);
        Ok(Self::with_seed(seed))
    }

    /// Load a YAML config file, apply environment overrides, and build a hasher.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let mut config =
            load_config_file(path).with_context(|| format!("loading {}", path.display()))?;
        config.apply_env_overrides();
        Self::from_config(&config)
    }

    /// Build a hasher from the discovered config file (or defaults) plus
    /// environment overrides.
    ///
    /// An explicit path must load: a missing or unparsable file is an error.
    /// Only implicitly discovered files fall back to defaults with a warning.
    pub fn discover(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_config_file(path);
        }

        let (mut config, loaded_from) = load_or_default(None);
        if let Some(path) = &loaded_from {
            tracing::debug!("Using hasher config from {}", path.display());
        }
        config.apply_env_overrides();
        Self::from_config(&config)
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Size of the computed hash, in bits.
    #[must_use]
    pub const fn hash_size(&self) -> usize {
        HASH_SIZE
    }

    /// Hash the whole buffer.
    #[must_use]
    pub fn compute_hash(&self, buffer: &[u8]) -> Digest {
        let (h1, h2) = hash_x64_128(buffer, self.seed);
        Digest::from_lanes(h1, h2)
    }

    /// Hash `length` bytes of `buffer` starting at `offset`.
    ///
    /// `offset` and `length` accept any integer type. Negative values, and
    /// windows reaching past the end of the buffer, are rejected with
    /// [`Murmur3Error::InvalidArgument`] before any hashing is done.
    pub fn compute_hash_window<O, L>(&self, buffer: &[u8], offset: O, length: L) -> Result<Digest>
    where
        O: TryInto<usize> + Copy + fmt::Display,
        L: TryInto<usize> + Copy + fmt::Display,
    {
        let window = resolve_window(buffer.len(), offset, length)?;
        Ok(self.compute_hash(&buffer[window]))
    }

    /// Like [`Hasher::compute_hash_window`], for callers whose buffer may be absent.
    pub fn try_compute_hash<O, L>(
        &self,
        buffer: Option<&[u8]>,
        offset: O,
        length: L,
    ) -> Result<Digest>
    where
        O: TryInto<usize> + Copy + fmt::Display,
        L: TryInto<usize> + Copy + fmt::Display,
    {
        let buffer = buffer.ok_or_else(|| {
            tracing::debug!("Rejecting hash request: buffer is missing");
            Murmur3Error::null_input("buffer", "hash request")
        })?;
        self.compute_hash_window(buffer, offset, length)
    }

    /// Hash many independent buffers in parallel, preserving input order.
    pub fn compute_hashes<B>(&self, inputs: &[B]) -> Vec<Digest>
    where
        B: AsRef<[u8]> + Sync,
    {
        tracing::debug!("Hashing {} inputs in parallel", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.compute_hash(input.as_ref()))
            .collect()
    }
}

/// Check `offset`/`length` against the buffer and turn them into a range.
fn resolve_window<O, L>(buffer_len: usize, offset: O, length: L) -> Result<Range<usize>>
where
    O: TryInto<usize> + Copy + fmt::Display,
    L: TryInto<usize> + Copy + fmt::Display,
{
    let start: usize = offset
        .try_into()
        .map_err(|_| reject(ArgumentErrorKind::OffsetOutOfRange(offset.to_string())))?;
    let len: usize = length
        .try_into()
        .map_err(|_| reject(ArgumentErrorKind::LengthOutOfRange(length.to_string())))?;

    let end = start
        .checked_add(len)
        .filter(|&end| end <= buffer_len)
        .ok_or_else(|| {
            reject(ArgumentErrorKind::WindowOutOfBounds {
                offset: start,
                length: len,
                buffer_len,
            })
        })?;

    Ok(start..end)
}

fn reject(kind: ArgumentErrorKind) -> Murmur3Error {
    tracing::debug!("Rejecting hash window: {}", kind);
    Murmur3Error::invalid_argument("hash window", kind)
}
