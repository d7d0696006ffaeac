//
//  hub-cli
//  api/resources/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository types.
//!
//! [`Repository`] is returned by the get, create and fork endpoints;
//! [`RepositoryParams`] is the body for repository creation under either the
//! authenticated user (`user/repos`) or an organization (`orgs/{org}/repos`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A GitHub repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,

    /// Repository name without owner.
    pub name: String,

    /// `owner/name`.
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub private: bool,

    /// Whether this repository is itself a fork.
    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub html_url: String,

    #[serde(default)]
    pub clone_url: Option<String>,

    #[serde(default)]
    pub ssh_url: Option<String>,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub owner: Option<User>,

    /// The repository this one was forked from.
    #[serde(default)]
    pub parent: Option<Box<Repository>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryParams {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    pub private: bool,
}
