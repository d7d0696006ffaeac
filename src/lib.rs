//
//  hub-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # hub CLI Library
//!
//! A command-line interface library for working with GitHub and GitHub
//! Enterprise through the REST API (v3).
//!
//! ## Overview
//!
//! This library provides the core functionality for the `hub` CLI tool: an
//! API client facade covering pull requests, repositories, releases, commit
//! statuses, forks, issues and users, plus credential resolution against a
//! local hosts file.
//!
//! ## Features
//!
//! - **GitHub and Enterprise**: `api.github.com` for github.com, `/api/v3` for
//!   every other host
//! - **Lazy Authentication**: credentials are resolved on the first API call,
//!   prompting for a login when the host has no saved token
//! - **Two-Factor Aware**: OAuth token exchange retries with a one-time code
//! - **Proxy Support**: `http_proxy`/`HTTP_PROXY` honoured per client
//! - **Readable Errors**: failures come back as
//!   `Error <action>: <reason> (HTTP <status>)`
//!
//! ## Module Structure
//!
//! - [`api`]: the API client facade, transport and error normalization
//! - [`auth`]: credentials and the OAuth authorization exchange
//! - [`cli`]: command-line interface definitions using clap
//! - [`config`]: the hosts file and the prompting credential store
//! - [`context`]: git repository context detection
//! - [`interactive`]: terminal prompts
//! - [`output`]: table and JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hub_cli::api::{Client, HostIdentity, Project};
//!
//! let identity = HostIdentity::new("github.com").with_token("token");
//! let mut client = Client::with_host(identity);
//!
//! let project = Project::new("octocat", "Hello-World", "github.com");
//! let repo = client.repository(&project).expect("repository");
//! println!("{}", repo.full_name);
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// API client for GitHub and GitHub Enterprise.
pub mod api;

/// Credentials and OAuth authorizations.
pub mod auth;

/// Configuration file management.
///
/// Saved hosts live in platform-specific locations unless `HUB_CONFIG` is set:
/// - Linux: `~/.config/hub/hosts.toml`
/// - macOS: `~/Library/Application Support/hub/hosts.toml`
/// - Windows: `%APPDATA%\hub\hosts.toml`
pub mod config;

/// Git repository context detection.
pub mod context;

/// Output formatting for table and JSON modes.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use hub_cli::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the hosts file.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "hub";

/// Application version constant, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use hub_cli::VERSION;
///
/// println!("hub version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Example
///
/// ```rust,no_run
/// use hub_cli::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::{ApiError, Classification};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// The saved token is missing or rejected. Run `hub auth login` to
    /// authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested resource does not exist or the user does not have
    /// permission to see it.
    pub const NOT_FOUND: i32 = 8;

    /// The exit code for a failed command.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        let classification = err
            .downcast_ref::<ApiError>()
            .and_then(ApiError::normalized)
            .map(|normalized| normalized.classification());

        match classification {
            Some(Classification::Unauthorized) => AUTH_ERROR,
            Some(Classification::NotFound) => NOT_FOUND,
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::error::{format_error, ResponseError};

        #[test]
        fn test_for_error() {
            let not_found = format_error(
                "getting repository",
                ApiError::Response(ResponseError::new(404)),
            );
            assert_eq!(for_error(&not_found.into()), NOT_FOUND);

            let unauthorized = format_error(
                "getting repository",
                ApiError::Response(ResponseError::new(401)),
            );
            assert_eq!(for_error(&unauthorized.into()), AUTH_ERROR);

            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }
    }
}
