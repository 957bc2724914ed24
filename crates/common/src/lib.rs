/**
 * Cryptographic types and operations.
 *  - Luhn mod 58 checksums
 *  - P-256 owner keys
 *  - Capability secrets and their text form
 */
pub mod crypto;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::crypto::{OwnerKey, Secret, SecretError, SecretKind};
    pub use crate::version::build_info;
}
