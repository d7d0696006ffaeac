//
//  hub-cli
//  cli/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::resources::{Issue, IssueParams};
use crate::output::{create_table, format_status, print_field, print_header, truncate, TableOutput};

/// Manage issues
#[derive(Args, Debug)]
pub struct IssueCommand {
    #[command(subcommand)]
    pub command: IssueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IssueSubcommand {
    /// List open issues
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Create an issue
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of issues to show
    #[arg(long, short = 'L', default_value = "30")]
    pub limit: usize,

    /// Include pull requests
    #[arg(long)]
    pub include_pulls: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    #[arg(long, short = 't')]
    pub title: String,

    /// Issue body
    #[arg(long, short = 'm')]
    pub body: Option<String>,

    /// Labels to apply
    #[arg(long, short = 'l', value_delimiter = ',')]
    pub label: Vec<String>,
}

impl TableOutput for Issue {
    fn print_table(&self, color: bool) {
        print_header(&format!("#{} {}", self.number, self.title));
        print_field("State", &format_status(&self.state, color), color);
        if !self.labels.is_empty() {
            let labels: Vec<&str> = self.labels.iter().map(|l| l.name.as_str()).collect();
            print_field("Labels", &labels.join(", "), color);
        }
        print_field("URL", &self.html_url, color);
    }
}

impl TableOutput for [Issue] {
    fn print_table(&self, color: bool) {
        if self.is_empty() {
            println!("No open issues");
            return;
        }

        let mut table = create_table(["#", "Title", "State", "Labels"]);
        for issue in self {
            let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
            table.add_row(vec![
                issue.number.to_string(),
                truncate(&issue.title, 60),
                format_status(&issue.state, color),
                labels.join(", "),
            ]);
        }
        println!("{table}");
    }
}

impl IssueCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            IssueSubcommand::List(args) => self.list(args, global),
            IssueSubcommand::Create(args) => self.create(args, global),
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let issues: Vec<Issue> = global
            .client()?
            .issues(&project)?
            .into_iter()
            .filter(|issue| args.include_pulls || !issue.is_pull_request())
            .take(args.limit)
            .collect();

        global.output().write(issues.as_slice())
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let params = IssueParams {
            title: args.title.clone(),
            body: args.body.clone(),
            labels: args.label.clone(),
        };
        let issue = global.client()?.create_issue(&project, &params)?;

        let output = global.output();
        output.write_success(&format!("Created issue #{}", issue.number));
        output.write(&issue)
    }
}
