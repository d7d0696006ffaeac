//
//  hub-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod ci_status;
mod issue;
mod pr;
mod release;
mod repo;
mod user;
mod version;

pub use auth::AuthCommand;
pub use ci_status::CiStatusCommand;
pub use issue::IssueCommand;
pub use pr::PrCommand;
pub use release::ReleaseCommand;
pub use repo::RepoCommand;
pub use user::UserCommand;
pub use version::VersionCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::host::{normalize_host, GITHUB_HOST};
use crate::api::{Client, HostIdentity, Project};
use crate::config::ConfigStore;
use crate::context::resolve_project;
use crate::interactive::TerminalPrompter;
use crate::output::{OutputFormat, OutputWriter};

/// hub - Work with GitHub from the command line
#[derive(Parser, Debug)]
#[command(
    name = "hub",
    version,
    about = "Work with GitHub from the command line",
    long_about = "hub is a CLI for GitHub and GitHub Enterprise.\n\n\
                  It brings pull requests, issues, releases, and more to your terminal.",
    propagate_version = true,
    after_help = "Use 'hub <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOptions {
    /// GitHub host (github.com or a GitHub Enterprise hostname)
    #[arg(long, global = true, env = "HUB_HOST", default_value = GITHUB_HOST)]
    pub host: String,

    /// Protocol used to reach the host
    #[arg(long, global = true, env = "HUB_PROTOCOL", value_parser = ["https", "http"])]
    pub protocol: Option<String>,

    /// Repository in OWNER/NAME format
    #[arg(long, short = 'R', global = true, env = "HUB_REPO")]
    pub repo: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            host: GITHUB_HOST.to_string(),
            protocol: None,
            repo: None,
            json: false,
        }
    }
}

impl GlobalOptions {
    /// The normalized target host.
    pub fn host(&self) -> String {
        normalize_host(&self.host)
    }

    /// The repository the command applies to.
    pub fn project(&self) -> Result<Project> {
        let mut project = resolve_project(self.repo.as_deref(), &self.host())?;
        if let Some(protocol) = &self.protocol {
            project = project.with_protocol(protocol);
        }
        Ok(project)
    }

    /// The credential store backed by the config file and terminal prompts.
    pub fn store(&self) -> Result<ConfigStore<TerminalPrompter>> {
        let store = ConfigStore::load(TerminalPrompter)?;
        Ok(match &self.protocol {
            Some(protocol) => store.with_protocol(protocol),
            None => store,
        })
    }

    /// The saved identity for the host, or an empty one to be resolved on
    /// first use.
    pub fn identity(&self, store: &ConfigStore<TerminalPrompter>) -> HostIdentity {
        let host = self.host();
        let mut identity = store
            .config()
            .identity(&host)
            .unwrap_or_else(|| HostIdentity::new(&host));
        if let Some(protocol) = &self.protocol {
            identity.protocol = protocol.clone();
        }
        identity
    }

    /// An API client for the host, prompting for a login when needed.
    pub fn client(&self) -> Result<Client> {
        let store = self.store()?;
        let identity = self.identity(&store);
        Ok(Client::new(identity, Box::new(store)))
    }

    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with GitHub
    Auth(AuthCommand),

    /// Manage repositories
    Repo(RepoCommand),

    /// Manage pull requests
    Pr(PrCommand),

    /// Manage issues
    Issue(IssueCommand),

    /// Manage releases
    Release(ReleaseCommand),

    /// Show the CI status of a commit
    #[command(name = "ci-status")]
    CiStatus(CiStatusCommand),

    /// Show the authenticated user
    User(UserCommand),

    /// Print version information
    Version(VersionCommand),
}
