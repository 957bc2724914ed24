use clap::Args;
use serde::Serialize;

use common::prelude::Secret;

use crate::cli::config::OutputFormat;
use crate::cli::op::{read_secret, InputError};

#[derive(Args, Debug, Clone)]
pub struct Inspect {
    /// Secret to inspect, or `-` to read it from stdin
    pub secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that can be learned from a secret without any other context
#[derive(Debug, Serialize)]
pub struct SecretReport {
    pub kind: String,
    pub payload_len: usize,
    pub public_key: Option<String>,
    pub owner: Option<String>,
    pub read_only: Option<String>,
    pub download_only: String,
}

/// Empty strings mark capabilities the secret cannot reach
fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

impl SecretReport {
    pub fn new(secret: &Secret) -> Self {
        Self {
            kind: secret.kind().to_string(),
            payload_len: secret.payload().len(),
            public_key: secret.public_key().map(hex::encode),
            owner: non_empty(secret.owner()),
            read_only: non_empty(secret.read_only()),
            download_only: secret.download_only(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        if format == OutputFormat::Json {
            return serde_json::to_string_pretty(self);
        }

        let mut lines = vec![
            format!("kind:          {}", self.kind),
            format!("payload:       {} bytes", self.payload_len),
        ];
        if let Some(public_key) = &self.public_key {
            lines.push(format!("public key:    {}", public_key));
        }
        if let Some(owner) = &self.owner {
            lines.push(format!("owner:         {}", owner));
        }
        if let Some(read_only) = &self.read_only {
            lines.push(format!("read-only:     {}", read_only));
        }
        lines.push(format!("download-only: {}", self.download_only));
        Ok(lines.join("\n"))
    }
}

impl crate::cli::op::Op for Inspect {
    type Error = InspectError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let secret = read_secret(&self.secret)?;
        tracing::info!(kind = %secret.kind(), "inspecting secret");
        Ok(SecretReport::new(&secret).render(ctx.output)?)
    }
}
