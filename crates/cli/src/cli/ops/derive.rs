use clap::{Args, ValueEnum};
use serde::Serialize;

use common::prelude::SecretKind;

use crate::cli::config::OutputFormat;
use crate::cli::op::{read_secret, InputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Owner,
    ReadOnly,
    DownloadOnly,
}

impl From<Target> for SecretKind {
    fn from(target: Target) -> Self {
        match target {
            Target::Owner => SecretKind::Owner,
            Target::ReadOnly => SecretKind::ReadOnly,
            Target::DownloadOnly => SecretKind::DownloadOnly,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct Derive {
    /// Secret to derive from, or `-` to read it from stdin
    pub secret: String,

    /// Capability level to derive
    #[arg(long, value_enum, default_value = "read-only")]
    pub to: Target,
}

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot derive a {to} secret from a {from} secret")]
    NotDerivable { from: SecretKind, to: SecretKind },
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Derived {
    kind: String,
    secret: String,
}

impl crate::cli::op::Op for Derive {
    type Error = DeriveError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let secret = read_secret(&self.secret)?;
        let to = SecretKind::from(self.to);

        let derived = match to {
            SecretKind::Owner => secret.owner(),
            SecretKind::ReadOnly => secret.read_only(),
            SecretKind::DownloadOnly => secret.download_only(),
        };
        if derived.is_empty() {
            return Err(DeriveError::NotDerivable {
                from: secret.kind(),
                to,
            });
        }
        tracing::info!(from = %secret.kind(), to = %to, "derived secret");

        match ctx.output {
            OutputFormat::Text => Ok(derived),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Derived {
                kind: to.to_string(),
                secret: derived,
            })?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::{Op, OpContext};

    const OWNER: &str = "A1BnkZ49DFzBBsV1UiANUedYD4UpjtdB3Yg1wjpvj4dxUpQ";
    const READ_ONLY: &str = "C1CcaQPztiTd5rJx5iRhpHfYH3H8HKMx8WEynky63HKAHi8hHE8owygFBLuGNTypaakCACecUgFv7hTmWxFDRJNJFXw";
    const DOWNLOAD_ONLY: &str = "D1VvGmtwhfhQVahXMmrDjn21Dz3JoTTAjMWNEe39BwUhT3";

    fn derive(secret: &str, to: Target) -> Result<String, DeriveError> {
        Derive {
            secret: secret.to_string(),
            to,
        }
        .execute(&OpContext::new(OutputFormat::Text))
    }

    #[test]
    fn test_derive_down_the_lattice() {
        assert_eq!(derive(OWNER, Target::Owner).unwrap(), OWNER);
        assert_eq!(derive(OWNER, Target::ReadOnly).unwrap(), READ_ONLY);
        assert_eq!(derive(OWNER, Target::DownloadOnly).unwrap(), DOWNLOAD_ONLY);
        assert_eq!(derive(READ_ONLY, Target::DownloadOnly).unwrap(), DOWNLOAD_ONLY);
    }

    #[test]
    fn test_derive_up_the_lattice_fails() {
        assert!(matches!(
            derive(READ_ONLY, Target::Owner),
            Err(DeriveError::NotDerivable {
                from: SecretKind::ReadOnly,
                to: SecretKind::Owner,
            })
        ));
        let err = derive(DOWNLOAD_ONLY, Target::ReadOnly).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot derive a read-only secret from a download-only secret"
        );
    }

    #[test]
    fn test_derive_json() {
        let output = Derive {
            secret: OWNER.to_string(),
            to: Target::DownloadOnly,
        }
        .execute(&OpContext::new(OutputFormat::Json))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kind"], "download-only");
        assert_eq!(value["secret"], DOWNLOAD_ONLY);
    }
}
