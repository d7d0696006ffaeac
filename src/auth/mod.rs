//
//  hub-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials and token acquisition for GitHub and GitHub Enterprise.
//!
//! ## Supported Authentication Methods
//!
//! - **OAuth token**: sent as `Authorization: token <token>` on every API call.
//! - **Basic authentication**: username and password, optionally with a
//!   one-time password in `X-GitHub-OTP`. Used only to find or create an
//!   OAuth token.
//!
//! ## Module Structure
//!
//! - [`authorizations`]: exchanges a username and password for a long-lived token
//! - [`resolver`]: returns a host identity that is guaranteed to carry a token
//!
//! ## Credential Stores
//!
//! The API client never reads the configuration file itself. It asks a
//! [`CredentialStore`] for the identity of a host when it has no token.
//! [`ConfigStore`](crate::config::ConfigStore) is the production store;
//! [`NoCredentialStore`] refuses every lookup.
//!
//! ## Example
//!
//! ```rust
//! use hub_cli::auth::Credential;
//!
//! let credential = Credential::token("ghp_example");
//! assert!(!format!("{:?}", credential).contains("ghp_example"));
//! ```

pub mod authorizations;
pub mod resolver;

pub use authorizations::{Authenticator, Authorization, AuthorizationApp, AuthorizationParams};
pub use resolver::resolve_credentials;

use std::fmt;

use anyhow::bail;
use reqwest::blocking::RequestBuilder;

use crate::api::error::OTP_HEADER;
use crate::api::HostIdentity;

/// Credentials attached to outgoing requests.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// An OAuth access token.
    Token(String),

    /// HTTP Basic authentication with an optional one-time password.
    Basic {
        login: String,
        password: String,
        /// Two-factor code; sent only when non-empty.
        one_time_password: String,
    },
}

impl Credential {
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    pub fn basic(
        login: impl Into<String>,
        password: impl Into<String>,
        one_time_password: impl Into<String>,
    ) -> Self {
        Self::Basic {
            login: login.into(),
            password: password.into(),
            one_time_password: one_time_password.into(),
        }
    }

    /// Adds the authentication headers to `request`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Token(token) => request.header("Authorization", format!("token {token}")),
            Self::Basic {
                login,
                password,
                one_time_password,
            } => {
                let request = request.basic_auth(login, Some(password));
                if one_time_password.is_empty() {
                    request
                } else {
                    request.header(OTP_HEADER, one_time_password)
                }
            }
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(<redacted>)"),
            Self::Basic {
                login,
                one_time_password,
                ..
            } => f
                .debug_struct("Basic")
                .field("login", login)
                .field("has_one_time_password", &!one_time_password.is_empty())
                .finish_non_exhaustive(),
        }
    }
}

/// Source of host identities for hosts the client has no token for.
///
/// Implementations may read a configuration file, prompt the user, or both.
/// Errors are passed to the caller unchanged.
pub trait CredentialStore {
    /// Returns the identity to use for `host`.
    fn prompt_for_host(&self, host: &str) -> anyhow::Result<HostIdentity>;
}

/// A store with no identities; every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentialStore;

impl CredentialStore for NoCredentialStore {
    fn prompt_for_host(&self, host: &str) -> anyhow::Result<HostIdentity> {
        bail!("no credentials available for {host}")
    }
}
