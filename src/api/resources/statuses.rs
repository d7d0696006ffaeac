//
//  hub-cli
//  api/resources/statuses.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Commit status types.
//!
//! The statuses endpoint returns every status reported for a ref, newest
//! first. The client surfaces only the first entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A CI status reported against a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// One of `pending`, `success`, `failure` or `error`.
    pub state: String,

    /// Link to the build that reported the status.
    #[serde(default)]
    pub target_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Name of the reporting service, e.g. `continuous-integration/travis`.
    #[serde(default)]
    pub context: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub creator: Option<User>,
}
