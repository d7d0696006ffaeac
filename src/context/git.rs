//
//  hub-cli
//  context/git.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Git Repository Operations
//!
//! Reads the local repository the CLI is run from: remote URLs, the current
//! branch and the commit `HEAD` points at. Nothing here writes to the
//! repository or touches the network.

use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// A handle on the enclosing git repository.
pub struct GitContext {
    repo: Repository,
}

impl GitContext {
    /// Finds the repository containing the current directory.
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".").context("Not in a git repository")?;
        Ok(Self { repo })
    }

    /// Opens the repository at `path`.
    pub fn open_at(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;
        Ok(Self { repo })
    }

    /// Short name of the checked-out branch, or `HEAD` when detached.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Full SHA of the commit `HEAD` points at.
    pub fn head_sha(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    /// URL of remote `name`, or `None` if there is no such remote.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(err) if err.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// URLs of every remote, `origin` first.
    pub fn remote_urls(&self) -> Result<Vec<String>> {
        let names = self.repo.remotes()?;
        let mut names: Vec<&str> = names.iter().flatten().collect();
        names.sort_by_key(|name| *name != "origin");

        let mut urls = Vec::new();
        for name in names {
            if let Some(url) = self.remote_url(name)? {
                urls.push(url);
            }
        }
        Ok(urls)
    }
}
