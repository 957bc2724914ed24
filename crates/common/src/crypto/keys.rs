use std::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

/// Size of a P-256 private scalar in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of a SEC1-compressed P-256 public point in bytes
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of a keccak-256 digest in bytes
pub const KECCAK_HASH_SIZE: usize = 32;

/// Errors that can occur during key operations
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("key error: {0}")]
    Default(#[from] anyhow::Error),
    #[error("not a valid P-256 private scalar")]
    InvalidScalar,
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(getrandom::Error),
}

/// keccak-256 (the pre-standard SHA-3 padding, as used by Ethereum)
pub fn keccak256(bytes: &[u8]) -> [u8; KECCAK_HASH_SIZE] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    let mut out = [0u8; KECCAK_HASH_SIZE];
    out.copy_from_slice(&result);
    out
}

/// Private key material behind an owner secret
///
/// A P-256 scalar in `[1, n)`. Everything weaker than ownership is derived from it:
/// the compressed public point (read access) and the keccak-256 digest of the
/// scalar bytes (download access).
///
/// # Examples
///
/// ```ignore
/// let key = OwnerKey::generate()?;
/// let public = key.public_compressed();
/// assert!(public[0] == 0x02 || public[0] == 0x03);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerKey(p256::SecretKey);

impl fmt::Debug for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OwnerKey(..)")
    }
}

impl From<p256::SecretKey> for OwnerKey {
    fn from(key: p256::SecretKey) -> Self {
        OwnerKey(key)
    }
}

impl TryFrom<&[u8]> for OwnerKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl OwnerKey {
    /// Draw a uniformly random scalar from the OS random source
    ///
    /// Candidates outside `[1, n)` are rejected and redrawn.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EntropyUnavailable`] if the OS random source fails.
    pub fn generate() -> Result<Self, KeyError> {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        loop {
            getrandom::getrandom(&mut bytes).map_err(KeyError::EntropyUnavailable)?;
            if let Ok(key) = p256::SecretKey::from_slice(&bytes) {
                return Ok(Self(key));
            }
            tracing::trace!("random candidate outside scalar range, redrawing");
        }
    }

    /// Load a scalar from exactly 32 big-endian bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not 32 bytes long, or if it encodes
    /// zero or a value not below the group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(anyhow::anyhow!(
                "invalid private key size, expected {}, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )
            .into());
        }
        let key = p256::SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self(key))
    }

    /// Parse a scalar from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let mut buff = [0; PRIVATE_KEY_SIZE];
        hex::decode_to_slice(hex, &mut buff)
            .map_err(|_| anyhow::anyhow!("private key hex decode error"))?;
        Self::from_bytes(&buff)
    }

    /// Scalar as 32 big-endian bytes, leading zeros kept
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        let mut out = [0u8; PRIVATE_KEY_SIZE];
        out.copy_from_slice(&self.0.to_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Public point `d * G` in SEC1 compressed form
    ///
    /// `0x02` (even Y) or `0x03` (odd Y), followed by the 32-byte X coordinate.
    pub fn public_compressed(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.0.public_key().to_encoded_point(true);
        let mut out = [0u8; PUBLIC_KEY_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// keccak-256 of the scalar bytes; the download-only capability
    pub fn digest(&self) -> [u8; KECCAK_HASH_SIZE] {
        keccak256(&self.to_bytes())
    }
}
