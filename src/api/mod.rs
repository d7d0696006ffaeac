//
//  hub-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client for GitHub's REST API (v3).
//!
//! ## Supported Platforms
//!
//! - **GitHub**: `github.com`, served from `api.github.com`
//! - **GitHub Enterprise**: any other host, served under `/api/v3`
//!
//! ## Architecture
//!
//! - [`client`]: the [`Client`] facade, one method per operation
//! - [`host`]: host identities and the public/enterprise path rule
//! - [`transport`]: proxy-aware HTTP client construction
//! - [`rest`]: request execution, pagination and response errors
//! - [`template`]: URL templates for each resource
//! - [`resources`]: request parameters and response payloads
//! - [`project`]: repository references parsed from remotes
//! - [`error`]: the error type and its normalization for display
//!
//! ## Error Handling
//!
//! Client operations return [`ApiError`]. Response and authentication
//! failures come back normalized, e.g.
//! `Error getting repository: Not Found (HTTP 404)`.

pub mod client;
pub mod error;
pub mod host;
pub mod project;
pub mod resources;
pub mod rest;
pub mod template;
pub mod transport;

pub use client::Client;
pub use error::{ApiError, AuthError, Classification, NormalizedError};
pub use host::{ApiHost, HostIdentity};
pub use project::Project;
