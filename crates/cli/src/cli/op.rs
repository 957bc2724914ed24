use std::error::Error;
use std::io::BufRead;

use common::prelude::{Secret, SecretError};

use super::config::OutputFormat;

#[derive(Debug, Clone)]
pub struct OpContext {
    /// How ops render their output
    pub output: OutputFormat,
}

impl OpContext {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }
}

pub trait Op {
    type Error: Error + Send + Sync + 'static;
    type Output;

    fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read secret from stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Secret(#[from] SecretError),
}

/// Parse a secret argument; `-` reads one line from stdin instead.
pub fn read_secret(arg: &str) -> Result<Secret, InputError> {
    if arg == "-" {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        return Ok(Secret::parse(line.trim())?);
    }
    Ok(Secret::parse(arg.trim())?)
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx)
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
