//! Fixed-size chain hashes

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size in bytes of a chain hash.
pub const HASH_SIZE: usize = 32;

/// Maximum length of the hex text form of a chain hash.
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A double-SHA256 block or transaction hash.
///
/// Bytes are held in internal (little-endian) order. The text form is the
/// byte-reversed hex string that block explorers display.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainHash([u8; HASH_SIZE]);

impl ChainHash {
    /// The all-zero hash.
    pub const ZERO: ChainHash = ChainHash([0u8; HASH_SIZE]);

    /// Wrap raw bytes in internal order.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in internal order.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Decode the byte-reversed hex text form.
    ///
    /// Strings shorter than 64 characters are treated as having leading
    /// zeros, so `"1"` decodes to the hash with value one.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() > MAX_HASH_STRING_SIZE {
            return Err(Error::InvalidHash(format!(
                "max hash string length is {} bytes, got {}",
                MAX_HASH_STRING_SIZE,
                s.len()
            )));
        }

        let padded = format!("{:0>width$}", s, width = MAX_HASH_STRING_SIZE);
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| Error::InvalidHash(format!("{}: {}", s, e)))?;
        bytes.reverse();

        Ok(Self(bytes))
    }
}

impl FromStr for ChainHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ChainHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for ChainHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainHash({})", self)
    }
}

impl Serialize for ChainHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
