//
//  hub-cli
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

/// A GitHub user or organization account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, e.g. `octocat`.
    pub login: String,

    #[serde(default)]
    pub id: u64,

    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    /// `User` or `Organization`.
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}
