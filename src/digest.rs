//! The 16-byte digest value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Murmur3Error, Result};

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// A 128-bit MurmurHash3 digest.
///
/// The first eight bytes come from the `h1` lane and the last eight from `h2`,
/// each written most significant byte first. This is the byte order reference
/// test vectors print, so [`Digest::to_hex`] matches them directly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Pack the two finalized lanes.
    pub(crate) fn from_lanes(h1: u64, h2: u64) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes[..8].copy_from_slice(&h1.to_be_bytes());
        bytes[8..].copy_from_slice(&h2.to_be_bytes());
        Self(bytes)
    }

    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// The finalized `h1` lane.
    #[must_use]
    pub fn h1(&self) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.0[..8]);
        u64::from_be_bytes(word)
    }

    /// The finalized `h2` lane.
    #[must_use]
    pub fn h2(&self) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.0[8..]);
        u64::from_be_bytes(word)
    }

    /// The digest read as a single big-endian integer, `h1` in the high half.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Render as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse 32 hex characters (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| {
            Murmur3Error::invalid_digest(format!(
                "expected {} hex characters, got {:?}: {e}",
                DIGEST_LEN * 2,
                s
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Murmur3Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_are_written_big_endian() {
        let digest = Digest::from_lanes(0x0102_0304_0506_0708, 0x1112_1314_1516_1718);
        assert_eq!(
            digest.as_bytes(),
            &[
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x11, 0x12, 0x13, 0x14, 0x15,
                0x16, 0x17, 0x18
            ]
        );
        assert_eq!(digest.h1(), 0x0102_0304_0506_0708);
        assert_eq!(digest.h2(), 0x1112_1314_1516_1718);
        assert_eq!(digest.as_u128(), 0x0102_0304_0506_0708_1112_1314_1516_1718);
    }

    #[test]
    fn test_hex_display() {
        let digest = Digest::from_lanes(0xcbd8_a7b3_41bd_9b02, 0x5b1e_906a_48ae_1d19);
        assert_eq!(digest.to_string(), "cbd8a7b341bd9b025b1e906a48ae1d19");
        assert_eq!(
            format!("{digest:?}"),
            "Digest(cbd8a7b341bd9b025b1e906a48ae1d19)"
        );
        assert_eq!(Digest::default().to_hex(), "0".repeat(32));
    }

    #[test]
    fn test_parse_hex() {
        let digest: Digest = "CBD8A7B341BD9B025B1E906A48AE1D19".parse().unwrap();
        assert_eq!(digest.h1(), 0xcbd8_a7b3_41bd_9b02);
        assert_eq!(digest.to_hex(), "cbd8a7b341bd9b025b1e906a48ae1d19");
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        let non_hex = "zz".repeat(16);
        let too_long = "0".repeat(34);
        for bad in ["", "abc", non_hex.as_str(), too_long.as_str()] {
            match Digest::from_hex(bad) {
                Err(Murmur3Error::InvalidDigest(msg)) => {
                    assert!(msg.contains("32 hex characters"), "{msg}");
                }
                other => panic!("Expected InvalidDigest for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let digest = Digest::from_lanes(1, 2);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, "\"00000000000000010000000000000002\"");

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);

        assert!(serde_json::from_str::<Digest>("\"not-hex\"").is_err());
    }

    #[test]
    fn test_byte_conversions() {
        let bytes = [7u8; DIGEST_LEN];
        let digest = Digest::from(bytes);
        let back: [u8; DIGEST_LEN] = digest.into();
        assert_eq!(back, bytes);
        assert_eq!(digest.as_ref(), &bytes[..]);
        assert_eq!(Digest::from_bytes(bytes).into_bytes(), bytes);
    }
}
