//! Shared test utilities for secret integration tests
#![allow(dead_code)]

use ::common::crypto::{OwnerKey, Secret};

/// Owner, read-only and download-only text forms derived from one key
pub struct Vector {
    pub owner: &'static str,
    pub read_only: &'static str,
    pub download_only: &'static str,
}

pub const VECTORS: &[Vector] = &[
    Vector {
        owner: "A1fFfr3UMHoLqjoXPSaWHRySvijJrKJFPz3X8MtnNAzXTZ",
        read_only: "C1ETdSkHLVeNPWfqLTsUDWPCUZqKCzF5qjFJtys8KPT3wdQxgtkxk1WTuvZbZx2WJQ9Pd1DBgs6deoBsTNEgFyXNMh1",
        download_only: "D1AMcu13VWLTfKZfJNxkm18PeRQfJ3jfp19SirnurWzXfhV",
    },
    Vector {
        owner: "A1BnkZ49DFzBBsV1UiANUedYD4UpjtdB3Yg1wjpvj4dxUpQ",
        read_only: "C1CcaQPztiTd5rJx5iRhpHfYH3H8HKMx8WEynky63HKAHi8hHE8owygFBLuGNTypaakCACecUgFv7hTmWxFDRJNJFXw",
        download_only: "D1VvGmtwhfhQVahXMmrDjn21Dz3JoTTAjMWNEe39BwUhT3",
    },
    Vector {
        owner: "A16cSxDkq4MTqNSkHeVfifxFsbiXgrc7i4VFY2wA5MH3GNZ",
        read_only: "C1HcQnCwgcubRLoyqBxhzzUmYY5YprXZyHAfEodp3nA2Ayv9w2VAFcYcSeemNw6PsoHbETzgpnbbkpNFCSxMF2M2XM5",
        download_only: "D17wLRxZAabCfwkpFT996rtsXUsKsZDYeGxkGeaZUi71CPk",
    },
];

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh owner secret with its text form
pub fn fresh_owner() -> (Secret, String) {
    let key = OwnerKey::generate().unwrap();
    let secret = Secret::from(key);
    let text = secret.to_string();
    (secret, text)
}
