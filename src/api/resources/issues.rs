//
//  hub-cli
//  api/resources/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// An issue. Pull requests also appear in issue listings and carry a
/// `pull_request` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u64,

    pub number: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: Option<String>,

    /// `open` or `closed`.
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub html_url: String,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Returns `true` if this entry is a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Body for creating an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueParams {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}
