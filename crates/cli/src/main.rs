//! Stak CLI
//!
//! Runs a single `.stak` source file and prints the final stack.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing::{error, info};

#[derive(ClapParser)]
#[command(name = "stak")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a stak source file and print the final stack", long_about = None)]
struct Cli {
    /// Input .stak source file
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("stak=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!(file = %cli.file.display(), error = %err, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    info!(file = %cli.file.display(), "running");

    // Unparseable input is a fatal condition (§1): report it and exit
    // nonzero rather than running whatever happened to parse.
    let program = match stak_core::parse_program(&source) {
        Ok(stak_core::Value::List(items)) => items,
        Ok(_) => unreachable!("parse_program always returns a List"),
        Err(err) => {
            error!(file = %cli.file.display(), error = %err, "syntax error");
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = stak_runtime::Context::new();
    stak_runtime::exec(&mut ctx, &program);

    println!("{}", ctx.render_stack());
    ExitCode::SUCCESS
}
