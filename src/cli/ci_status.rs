//
//  hub-cli
//  cli/ci_status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `hub ci-status`: the most recent CI status of a commit.
//!
//! The exit code reflects the state so scripts can branch on it:
//!
//! | State | Exit code |
//! |-------|-----------|
//! | `success` | 0 |
//! | `failure`, `error` | 1 |
//! | `pending` | 2 |
//! | no status | 3 |

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;
use crate::api::resources::Status;
use crate::context::GitContext;
use crate::output::{format_status, print_field, OutputFormat, TableOutput};

/// Show the CI status of a commit
#[derive(Args, Debug)]
pub struct CiStatusCommand {
    /// Commit SHA, branch or tag (defaults to HEAD)
    pub commit: Option<String>,
}

impl TableOutput for Status {
    fn print_table(&self, color: bool) {
        print_field("State", &format_status(&self.state, color), color);
        if let Some(context) = &self.context {
            print_field("Context", context, color);
        }
        if let Some(description) = &self.description {
            print_field("Description", description, color);
        }
        if let Some(url) = &self.target_url {
            print_field("URL", url, color);
        }
    }
}

/// Maps a status state to the command's exit code.
pub fn exit_code_for(status: Option<&Status>) -> i32 {
    match status.map(|s| s.state.as_str()) {
        Some("success") => 0,
        Some("pending") => 2,
        Some(_) => 1,
        None => 3,
    }
}

impl CiStatusCommand {
    /// Prints the status and returns the exit code for it.
    pub fn run(&self, global: &GlobalOptions) -> Result<i32> {
        let project = global.project()?;
        let sha = match &self.commit {
            Some(commit) => commit.clone(),
            None => GitContext::open()?.head_sha()?,
        };

        let status = global.client()?.ci_status(&project, &sha)?;
        let output = global.output();
        match &status {
            Some(status) => output.write(status)?,
            None if output.format() == OutputFormat::Json => println!("null"),
            None => println!("no status"),
        }

        Ok(exit_code_for(status.as_ref()))
    }
}
