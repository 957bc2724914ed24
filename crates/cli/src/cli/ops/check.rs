use clap::Args;

use crate::cli::config::OutputFormat;
use crate::cli::op::{read_secret, InputError};

#[derive(Args, Debug, Clone)]
pub struct Check {
    /// Secret to validate, or `-` to read it from stdin
    pub secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl crate::cli::op::Op for Check {
    type Error = CheckError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let kind = read_secret(&self.secret)?.kind();
        Ok(match ctx.output {
            OutputFormat::Text => format!("valid ({})", kind),
            OutputFormat::Json => serde_json::json!({ "valid": true, "kind": kind.to_string() })
                .to_string(),
        })
    }
}
