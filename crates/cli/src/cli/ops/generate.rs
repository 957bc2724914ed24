use clap::Args;

use common::prelude::{Secret, SecretError};

use super::inspect::SecretReport;
use crate::cli::config::OutputFormat;

#[derive(Args, Debug, Clone)]
pub struct Generate;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to generate secret: {0}")]
    Secret(#[from] SecretError),
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

impl crate::cli::op::Op for Generate {
    type Error = GenerateError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let secret = Secret::generate()?;
        tracing::info!("generated new owner secret");

        match ctx.output {
            OutputFormat::Text => Ok(secret.to_string()),
            OutputFormat::Json => Ok(SecretReport::new(&secret).render(ctx.output)?),
        }
    }
}
