//
//  hub-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hub_cli::api::ApiError;
use hub_cli::cli::{Cli, Commands};
use hub_cli::exit_codes;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Normalized API errors already read "Error <action>: ..."
            let normalized = e
                .downcast_ref::<ApiError>()
                .and_then(ApiError::normalized)
                .is_some();
            if normalized {
                eprintln!("{e}");
            } else {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("HUB_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<i32> {
    let global = &cli.global;
    match &cli.command {
        Commands::Auth(cmd) => cmd.run(global)?,
        Commands::Repo(cmd) => cmd.run(global)?,
        Commands::Pr(cmd) => cmd.run(global)?,
        Commands::Issue(cmd) => cmd.run(global)?,
        Commands::Release(cmd) => cmd.run(global)?,
        Commands::CiStatus(cmd) => return cmd.run(global),
        Commands::User(cmd) => cmd.run(global)?,
        Commands::Version(cmd) => cmd.run(global)?,
    }
    Ok(exit_codes::SUCCESS)
}
