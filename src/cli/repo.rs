//
//  hub-cli
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands.
//!
//! - Viewing repository details
//! - Creating new repositories under the user or an organization
//! - Forking repositories into the authenticated account

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::resources::Repository;
use crate::api::{Client, Project};
use crate::output::{print_field, print_header, TableOutput};

/// Manage repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// View repository details
    View,

    /// Create a new repository
    Create(CreateArgs),

    /// Fork a repository
    Fork,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository name, or OWNER/NAME to create it in an organization
    pub name: String,

    /// Make the repository private
    #[arg(long, short = 'p')]
    pub private: bool,

    /// Repository description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Homepage URL
    #[arg(long)]
    pub homepage: Option<String>,
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        let title = if self.full_name.is_empty() {
            &self.name
        } else {
            &self.full_name
        };
        print_header(title);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!("{description}\n");
        }
        print_field(
            "Visibility",
            if self.private { "private" } else { "public" },
            color,
        );
        if let Some(branch) = &self.default_branch {
            print_field("Default branch", branch, color);
        }
        if let Some(parent) = &self.parent {
            print_field("Fork of", &parent.full_name, color);
        }
        if let Some(homepage) = self.homepage.as_deref().filter(|h| !h.is_empty()) {
            print_field("Homepage", homepage, color);
        }
        print_field("URL", &self.html_url, color);
        if let Some(clone_url) = &self.clone_url {
            print_field("Clone URL", clone_url, color);
        }
    }
}

impl RepoCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::View => self.view(global),
            RepoSubcommand::Create(args) => self.create(args, global),
            RepoSubcommand::Fork => self.fork(global),
        }
    }

    fn view(&self, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let repo = global.client()?.repository(&project)?;
        global.output().write(&repo)
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let mut client = global.client()?;
        let project = target_project(&mut client, &args.name, &global.host())?;
        if client.is_repository_exist(&project) {
            bail!("Repository {} already exists", project.name_with_owner());
        }

        let repo = client.create_repository(
            &project,
            args.description.as_deref(),
            args.homepage.as_deref(),
            args.private,
        )?;

        let output = global.output();
        output.write_success(&format!("Created repository {}", repo.full_name));
        output.write(&repo)
    }

    fn fork(&self, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let repo = global.client()?.fork_repository(&project)?;

        let output = global.output();
        output.write_success(&format!(
            "Forked {} to {}",
            project.name_with_owner(),
            repo.full_name
        ));
        output.write(&repo)
    }
}

/// `OWNER/NAME` as given, or `NAME` under the authenticated user.
fn target_project(client: &mut Client, name: &str, host: &str) -> Result<Project> {
    if let Some(project) = Project::from_name_with_owner(name, host) {
        return Ok(project);
    }

    let user = if client.host().user.is_empty() {
        client.current_user()?.login
    } else {
        client.host().user.clone()
    };
    Ok(Project::new(user, name, host))
}
