//! Cryptographic primitives for folder secrets
//!
//! This module provides everything needed to mint, read and weaken a folder secret:
//!
//! - **Checksums**: a Luhn mod 58 check symbol over the base-58 text form
//! - **Key material**: P-256 private scalars, their compressed public points,
//!   and keccak-256 digests
//! - **Secrets**: the three-level capability type and its text codec
//!
//! # Capability Model
//!
//! ## Owner
//! Holds the P-256 private scalar. Can sign changes to the folder and derive
//! every other level.
//!
//! ## Read-only
//! Holds the compressed public point and the keccak-256 digest of the scalar.
//! Can verify and decrypt, but not sign.
//!
//! ## Download-only
//! Holds only the digest. Enough to locate and fetch encrypted content.
//!
//! Derivation only ever goes down: owner -> read-only -> download-only.

pub mod checksum;
mod keys;
mod secret;

pub use keys::{
    keccak256, KeyError, OwnerKey, KECCAK_HASH_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE,
};
pub use secret::{Secret, SecretError, SecretKind, FORMAT_VERSION, READ_ONLY_PAYLOAD_SIZE};
