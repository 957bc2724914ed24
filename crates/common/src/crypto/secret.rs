//! Capability secrets
//!
//! A `Secret` names a shared folder and carries one of three capability levels,
//! all rooted in a single P-256 private key:
//!
//! | kind          | tag | payload                                              |
//! |---------------|-----|------------------------------------------------------|
//! | owner         | `A` | private scalar (32 bytes)                            |
//! | read-only     | `C` | compressed public point (33) + keccak-256 of scalar (32) |
//! | download-only | `D` | keccak-256 of scalar (32)                            |
//!
//! Each level can derive the ones below it, never the ones above:
//! owner ⊇ read-only ⊇ download-only.
//!
//! # Text Format
//!
//! ```text
//! <kind: 1 char><version: "1"><base58(payload)><check symbol: 1 char>
//! ```
//!
//! The check symbol is the Luhn mod 58 checksum of the base-58 body
//! (see [`super::checksum`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::{append_checksum, validate_checksum};
use super::keys::{KeyError, OwnerKey, KECCAK_HASH_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};

/// The only text format version in existence
pub const FORMAT_VERSION: char = '1';
/// Kind, version and check symbol; anything shorter cannot be a secret
pub const MIN_SECRET_LEN: usize = 3;
/// Size of a read-only payload: compressed public point followed by the digest
pub const READ_ONLY_PAYLOAD_SIZE: usize = PUBLIC_KEY_SIZE + KECCAK_HASH_SIZE;

/// Errors that can occur while parsing, constructing or generating a secret
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("secret too short")]
    TooShort,
    #[error("invalid checksum")]
    ChecksumInvalid,
    #[error("unsupported secret version '{0}'")]
    UnsupportedVersion(char),
    #[error("unknown secret kind '{0}'")]
    UnknownKind(char),
    #[error("invalid length for {kind} secret, expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: SecretKind,
        expected: usize,
        actual: usize,
    },
    #[error("invalid base58 payload: {0}")]
    InvalidEncoding(#[from] bs58::decode::Error),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Capability level of a secret, written as its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecretKind {
    Owner,
    ReadOnly,
    DownloadOnly,
}

impl SecretKind {
    pub const fn as_char(self) -> char {
        match self {
            SecretKind::Owner => 'A',
            SecretKind::ReadOnly => 'C',
            SecretKind::DownloadOnly => 'D',
        }
    }

    /// Exact payload size this kind requires
    pub const fn payload_len(self) -> usize {
        match self {
            SecretKind::Owner => PRIVATE_KEY_SIZE,
            SecretKind::ReadOnly => READ_ONLY_PAYLOAD_SIZE,
            SecretKind::DownloadOnly => KECCAK_HASH_SIZE,
        }
    }
}

impl TryFrom<u8> for SecretKind {
    type Error = SecretError;
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            b'A' => Ok(SecretKind::Owner),
            b'C' => Ok(SecretKind::ReadOnly),
            b'D' => Ok(SecretKind::DownloadOnly),
            other => Err(SecretError::UnknownKind(other as char)),
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SecretKind::Owner => "owner",
            SecretKind::ReadOnly => "read-only",
            SecretKind::DownloadOnly => "download-only",
        })
    }
}

/// A folder secret at one of three capability levels
///
/// Secrets are plain values: derivation returns a new secret and never
/// touches the one it was derived from. The text form is produced by
/// `Display` and read back by `FromStr`/[`Secret::parse`]; serde goes
/// through the same text form.
///
/// # Examples
///
/// ```ignore
/// let owner = Secret::generate()?;
/// let text = owner.to_string();
/// assert_eq!(text.parse::<Secret>()?, owner);
///
/// // Hand out read access without giving away the key
/// let read_only = owner.read_only();
/// assert!(read_only.starts_with("C1"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Secret {
    /// Full control: holds the private scalar itself
    Owner(OwnerKey),
    /// Can verify and decrypt, cannot sign
    ReadOnly {
        public_key: [u8; PUBLIC_KEY_SIZE],
        digest: [u8; KECCAK_HASH_SIZE],
    },
    /// Can fetch (encrypted) content only
    DownloadOnly([u8; KECCAK_HASH_SIZE]),
}

// Key material stays out of logs
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.kind())
    }
}

impl From<OwnerKey> for Secret {
    fn from(key: OwnerKey) -> Self {
        Secret::Owner(key)
    }
}

impl Secret {
    /// Generate a fresh owner secret from the OS random source
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EntropyUnavailable`] (wrapped) if no randomness can be drawn.
    pub fn generate() -> Result<Self, SecretError> {
        let key = OwnerKey::generate()?;
        tracing::debug!("generated owner secret");
        Ok(Secret::Owner(key))
    }

    /// Build a secret from its kind and raw payload
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::InvalidLength`] if the payload size does not match
    /// the kind, or [`KeyError::InvalidScalar`] (wrapped) if an owner payload is
    /// not a usable P-256 scalar.
    pub fn from_parts(kind: SecretKind, payload: &[u8]) -> Result<Self, SecretError> {
        let expected = kind.payload_len();
        if payload.len() != expected {
            return Err(SecretError::InvalidLength {
                kind,
                expected,
                actual: payload.len(),
            });
        }

        let secret = match kind {
            SecretKind::Owner => Secret::Owner(OwnerKey::from_bytes(payload)?),
            SecretKind::ReadOnly => {
                let (point, hash) = payload.split_at(PUBLIC_KEY_SIZE);
                let mut public_key = [0u8; PUBLIC_KEY_SIZE];
                let mut digest = [0u8; KECCAK_HASH_SIZE];
                public_key.copy_from_slice(point);
                digest.copy_from_slice(hash);
                Secret::ReadOnly { public_key, digest }
            }
            SecretKind::DownloadOnly => {
                let mut digest = [0u8; KECCAK_HASH_SIZE];
                digest.copy_from_slice(payload);
                Secret::DownloadOnly(digest)
            }
        };
        Ok(secret)
    }

    /// Parse and validate the text form of a secret
    ///
    /// Checks run in a fixed order and the first failure wins: length,
    /// checksum, version, kind, then payload shape.
    pub fn parse(text: &str) -> Result<Self, SecretError> {
        Self::decode(text).map_err(|e| {
            tracing::debug!(error = %e, "rejected secret");
            e
        })
    }

    fn decode(text: &str) -> Result<Self, SecretError> {
        let bytes = text.as_bytes();
        if bytes.len() < MIN_SECRET_LEN {
            return Err(SecretError::TooShort);
        }

        // The check symbol covers the base-58 body, which starts after kind and version
        let body = text
            .get(2..)
            .filter(|body| validate_checksum(body))
            .ok_or(SecretError::ChecksumInvalid)?;

        if bytes[1] != FORMAT_VERSION as u8 {
            return Err(SecretError::UnsupportedVersion(bytes[1] as char));
        }

        let payload = bs58::decode(&body[..body.len() - 1]).into_vec()?;
        let kind = SecretKind::try_from(bytes[0])?;
        Self::from_parts(kind, &payload)
    }

    pub fn kind(&self) -> SecretKind {
        match self {
            Secret::Owner(_) => SecretKind::Owner,
            Secret::ReadOnly { .. } => SecretKind::ReadOnly,
            Secret::DownloadOnly(_) => SecretKind::DownloadOnly,
        }
    }

    /// Raw payload bytes, exactly `self.kind().payload_len()` long
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Secret::Owner(key) => key.to_bytes().to_vec(),
            Secret::ReadOnly { public_key, digest } => {
                let mut payload = Vec::with_capacity(READ_ONLY_PAYLOAD_SIZE);
                payload.extend_from_slice(public_key);
                payload.extend_from_slice(digest);
                payload
            }
            Secret::DownloadOnly(digest) => digest.to_vec(),
        }
    }

    /// Compressed public point, if this secret is strong enough to know it
    pub fn public_key(&self) -> Option<[u8; PUBLIC_KEY_SIZE]> {
        match self {
            Secret::Owner(key) => Some(key.public_compressed()),
            Secret::ReadOnly { public_key, .. } => Some(*public_key),
            Secret::DownloadOnly(_) => None,
        }
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Secret::Owner(_))
    }

    pub fn can_read(&self) -> bool {
        !matches!(self, Secret::DownloadOnly(_))
    }

    pub fn to_owner(&self) -> Option<Secret> {
        match self {
            Secret::Owner(_) => Some(self.clone()),
            Secret::ReadOnly { .. } | Secret::DownloadOnly(_) => None,
        }
    }

    pub fn to_read_only(&self) -> Option<Secret> {
        match self {
            Secret::Owner(key) => {
                tracing::trace!("deriving read-only secret from owner");
                Some(Secret::ReadOnly {
                    public_key: key.public_compressed(),
                    digest: key.digest(),
                })
            }
            Secret::ReadOnly { .. } => Some(self.clone()),
            Secret::DownloadOnly(_) => None,
        }
    }

    /// Every level can produce a download-only secret.
    pub fn to_download_only(&self) -> Secret {
        match self {
            Secret::Owner(key) => Secret::DownloadOnly(key.digest()),
            Secret::ReadOnly { digest, .. } => Secret::DownloadOnly(*digest),
            Secret::DownloadOnly(_) => self.clone(),
        }
    }

    /// Owner text form, or an empty string if this is not an owner secret
    pub fn owner(&self) -> String {
        self.to_owner().map(|s| s.to_string()).unwrap_or_default()
    }

    /// Read-only text form, or an empty string for download-only secrets
    pub fn read_only(&self) -> String {
        self.to_read_only()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    /// Download-only text form
    pub fn download_only(&self) -> String {
        self.to_download_only().to_string()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = bs58::encode(self.payload()).into_string();
        write!(
            f,
            "{}{}{}",
            self.kind().as_char(),
            FORMAT_VERSION,
            append_checksum(&body)
        )
    }
}

impl FromStr for Secret {
    type Err = SecretError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Secret::parse(s)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct SecretVisitor;

        impl<'de> Visitor<'de> for SecretVisitor {
            type Value = Secret;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a secret string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Secret::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SecretVisitor)
    }
}
