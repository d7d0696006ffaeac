//
//  hub-cli
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Context
//!
//! Works out which GitHub repository a command applies to.
//!
//! ## Resolution Order
//!
//! 1. `--repo OWNER/NAME` on the configured host
//! 2. The first git remote (`origin` first) that parses as a project on the
//!    configured host

mod git;

pub use git::GitContext;

use anyhow::{bail, Result};

use crate::api::host::normalize_host;
use crate::api::Project;

/// Resolves the target project from `--repo` or the local git remotes.
pub fn resolve_project(repo: Option<&str>, host: &str) -> Result<Project> {
    if let Some(repo) = repo {
        return Project::from_name_with_owner(repo, host)
            .ok_or_else(|| anyhow::anyhow!("Invalid repository {repo:?}: expected OWNER/NAME"));
    }

    let git = GitContext::open()?;
    project_from_remotes(&git.remote_urls()?, host)
}

/// The first remote URL that names a project on `host`.
pub fn project_from_remotes(urls: &[String], host: &str) -> Result<Project> {
    let host = normalize_host(host);
    if let Some(project) = urls
        .iter()
        .filter_map(|url| Project::from_remote_url(url))
        .find(|project| project.host == host)
    {
        return Ok(project);
    }
    bail!("No git remote points to a repository on {host}. Use --repo OWNER/NAME.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_flag_wins() {
        let project = resolve_project(Some("octocat/hello"), "github.com").unwrap();
        assert_eq!(project.name_with_owner(), "octocat/hello");
        assert!(resolve_project(Some("hello"), "github.com").is_err());
    }

    #[test]
    fn test_remote_on_other_host_skipped() {
        let urls = vec![
            "git@git.company.com:team/tool.git".to_string(),
            "https://github.com/octocat/tool.git".to_string(),
        ];
        let project = project_from_remotes(&urls, "github.com").unwrap();
        assert_eq!(project.owner, "octocat");

        let project = project_from_remotes(&urls, "git.company.com").unwrap();
        assert_eq!(project.owner, "team");

        assert!(project_from_remotes(&urls, "ghe.local").is_err());
    }
}
