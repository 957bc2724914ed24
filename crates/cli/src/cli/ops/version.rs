use clap::Args;

use common::prelude::build_info;

use crate::cli::config::OutputFormat;

#[derive(Args, Debug, Clone)]
pub struct Version;

#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

impl crate::cli::op::Op for Version {
    type Error = VersionError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let info = build_info();
        match ctx.output {
            OutputFormat::Text => Ok(info.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&info)?),
        }
    }
}
