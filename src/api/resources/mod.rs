//
//  hub-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub Resource Types
//!
//! Request parameters and response payloads for the endpoints the client
//! uses. Only the fields the CLI reads are modelled; unknown fields are
//! ignored during deserialization.
//!
//! - [`repositories`]: repositories and forks
//! - [`pullrequests`]: pull requests
//! - [`issues`]: issues and labels
//! - [`releases`]: releases and release assets
//! - [`statuses`]: commit statuses
//! - [`users`]: user accounts

pub mod issues;
pub mod pullrequests;
pub mod releases;
pub mod repositories;
pub mod statuses;
pub mod users;

pub use issues::*;
pub use pullrequests::*;
pub use releases::*;
pub use repositories::*;
pub use statuses::*;
pub use users::*;
