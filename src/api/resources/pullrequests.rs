//
//  hub-cli
//  api/resources/pullrequests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request types.
//!
//! A pull request is opened either from a branch pair with a title and body
//! ([`PullRequestParams`]) or by converting an existing issue
//! ([`PullRequestForIssueParams`]).
//!
//! # Example
//!
//! ```rust
//! use hub_cli::api::resources::PullRequestParams;
//!
//! let params = PullRequestParams {
//!     base: "main".to_string(),
//!     head: "octocat:feature".to_string(),
//!     title: "Add feature".to_string(),
//!     body: None,
//! };
//! let json = serde_json::to_value(&params).unwrap();
//! assert!(json.get("body").is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub id: u64,

    /// Number within the repository.
    pub number: u64,

    /// `open` or `closed`.
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub html_url: String,

    pub head: PullRequestRef,

    pub base: PullRequestRef,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// One side of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// `owner:branch`.
    #[serde(default)]
    pub label: String,

    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,

    #[serde(default)]
    pub sha: String,
}

/// Body for opening a pull request from a branch pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestParams {
    pub base: String,
    pub head: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body for turning an existing issue into a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestForIssueParams {
    pub base: String,
    pub head: String,
    pub issue: u64,
}
