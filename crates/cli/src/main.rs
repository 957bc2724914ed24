// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::config::{parse_log_level, CliConfig};
use cli::{args::Args, op::Op, Check, Derive, Generate, Inspect, Version};

command_enum! {
    (Check, Check),
    (Derive, Derive),
    (Generate, Generate),
    (Inspect, Inspect),
    (Version, Version),
}

fn main() {
    let args = Args::parse();

    // Explicit flag > config file > built-in default
    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let log_level = match parse_log_level(log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    cli::logging::init_logging(log_level);
    cli::logging::register_panic_logger();

    let ctx = cli::op::OpContext::new(args.output.unwrap_or(config.output));
    tracing::debug!(output = ?ctx.output, "running command");

    match args.command.execute(&ctx) {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
