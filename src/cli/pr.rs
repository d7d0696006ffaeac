//
//  hub-cli
//  cli/pr.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request commands.
//!
//! `hub pr create` opens a pull request from the current branch, or converts
//! an existing issue with `--issue`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::resources::{PullRequest, PullRequestParams};
use crate::context::GitContext;
use crate::output::{format_status, print_field, print_header, TableOutput};

/// Manage pull requests
#[derive(Args, Debug)]
pub struct PrCommand {
    #[command(subcommand)]
    pub command: PrSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PrSubcommand {
    /// View a pull request
    View(ViewArgs),

    /// Create a pull request
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Pull request number
    pub number: u64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Branch to merge into (defaults to the repository's default branch)
    #[arg(long, short = 'b')]
    pub base: Option<String>,

    /// Branch with the changes, as BRANCH or OWNER:BRANCH (defaults to the
    /// current branch)
    #[arg(long, short = 'H')]
    pub head: Option<String>,

    /// Pull request title
    #[arg(long, short = 't', required_unless_present = "issue")]
    pub title: Option<String>,

    /// Pull request body
    #[arg(long, short = 'm')]
    pub body: Option<String>,

    /// Turn an existing issue into the pull request
    #[arg(long, short = 'i', conflicts_with_all = ["title", "body"])]
    pub issue: Option<u64>,
}

impl TableOutput for PullRequest {
    fn print_table(&self, color: bool) {
        print_header(&format!("#{} {}", self.number, self.title));
        print_field("State", &format_status(&self.state, color), color);
        print_field(
            "Branches",
            &format!("{} <- {}", self.base.label, self.head.label),
            color,
        );
        if let Some(user) = &self.user {
            print_field("Author", &user.login, color);
        }
        print_field("URL", &self.html_url, color);
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            println!("\n{body}");
        }
    }
}

impl PrCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PrSubcommand::View(args) => self.view(args, global),
            PrSubcommand::Create(args) => self.create(args, global),
        }
    }

    fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let pr = global.client()?.pull_request(&project, args.number)?;
        global.output().write(&pr)
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let mut client = global.client()?;

        let head = match &args.head {
            Some(head) => head.clone(),
            None => GitContext::open()?.current_branch()?,
        };
        if head == "HEAD" {
            bail!("Cannot create a pull request from a detached HEAD. Use --head.");
        }
        let head = if head.contains(':') {
            head
        } else {
            format!("{}:{}", project.owner, head)
        };

        let base = match &args.base {
            Some(base) => base.clone(),
            None => client
                .repository(&project)?
                .default_branch
                .unwrap_or_else(|| "master".to_string()),
        };

        let pr = match (args.issue, &args.title) {
            (Some(issue), _) => {
                client.create_pull_request_for_issue(&project, &base, &head, issue)?
            }
            (None, Some(title)) => {
                let params = PullRequestParams {
                    base,
                    head,
                    title: title.clone(),
                    body: args.body.clone(),
                };
                client.create_pull_request(&project, &params)?
            }
            (None, None) => bail!("A title is required. Use --title or --issue."),
        };

        let output = global.output();
        output.write_success(&format!("Created pull request #{}", pr.number));
        output.write(&pr)
    }
}
