//
//  hub-cli
//  api/host.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Resolution
//!
//! Decides whether a hostname is public GitHub or a GitHub Enterprise
//! instance, and rewrites request paths accordingly.
//!
//! | Host | API endpoint | Request path |
//! |------|--------------|--------------|
//! | `github.com` | `api.github.com` | unchanged |
//! | anything else | the host itself | prefixed with `/api/v3` |
//!
//! ## Example
//!
//! ```rust
//! use hub_cli::api::host::ApiHost;
//!
//! let public = ApiHost::new("github.com", "https");
//! assert_eq!(public.request_path("repos/o/r"), "/repos/o/r");
//!
//! let enterprise = ApiHost::new("git.company.com", "https");
//! assert_eq!(enterprise.request_path("repos/o/r"), "/api/v3/repos/o/r");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::ApiError;

/// The canonical public GitHub host.
pub const GITHUB_HOST: &str = "github.com";

/// The API host used for [`GITHUB_HOST`].
pub const GITHUB_API_HOST: &str = "api.github.com";

/// Path namespace under which GitHub Enterprise serves the REST API.
pub const ENTERPRISE_API_PREFIX: &str = "/api/v3";

/// Protocol used when a host identity does not name one.
pub const DEFAULT_PROTOCOL: &str = "https";

/// A host together with the credentials used to talk to it.
///
/// The access token may be empty, in which case the API client resolves it
/// lazily through its [`CredentialStore`](crate::auth::CredentialStore).
///
/// # Thread Safety
///
/// A [`Client`](crate::api::Client) replaces its identity in place the first
/// time a token is resolved. Share one client across threads only behind
/// external synchronization, or resolve the token up front.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    /// Hostname, e.g. `github.com` or `git.company.com`.
    pub host: String,

    /// Login of the user the token belongs to.
    #[serde(default)]
    pub user: String,

    /// OAuth access token; empty until resolved.
    #[serde(default)]
    pub access_token: String,

    /// `https` unless the host is configured otherwise.
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

impl HostIdentity {
    /// Creates an identity with no user and no token.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: String::new(),
            access_token: String::new(),
            protocol: default_protocol(),
        }
    }

    /// Sets the user login.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Sets the protocol used to reach the host.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Returns `true` once an access token is present.
    pub fn has_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

// The token never appears in debug output.
impl fmt::Debug for HostIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostIdentity")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("has_token", &self.has_token())
            .field("protocol", &self.protocol)
            .finish()
    }
}

/// Resolved API endpoint and path rule for a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHost {
    host: String,
    protocol: String,
}

impl ApiHost {
    /// Creates a resolver for `host`, normalizing it first.
    pub fn new(host: &str, protocol: &str) -> Self {
        let protocol = if protocol.is_empty() {
            DEFAULT_PROTOCOL
        } else {
            protocol
        };
        Self {
            host: normalize_host(host),
            protocol: protocol.to_lowercase(),
        }
    }

    /// Creates a resolver from a host identity.
    pub fn from_identity(identity: &HostIdentity) -> Self {
        Self::new(&identity.host, &identity.protocol)
    }

    /// The configured (web) hostname.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns `true` for anything but public GitHub.
    pub fn is_enterprise(&self) -> bool {
        self.host != GITHUB_HOST
    }

    /// The host requests are sent to.
    pub fn endpoint(&self) -> &str {
        if self.is_enterprise() {
            &self.host
        } else {
            GITHUB_API_HOST
        }
    }

    /// Scheme and endpoint, e.g. `https://api.github.com`.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol, self.endpoint())
    }

    /// Applies the path rule to a relative path (with optional query).
    ///
    /// Enterprise paths gain the `/api/v3` prefix unless they already carry
    /// it, which is the case for pagination links the server hands back.
    pub fn request_path(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        if self.is_enterprise() && !has_enterprise_prefix(&path) {
            format!("{ENTERPRISE_API_PREFIX}{path}")
        } else {
            path
        }
    }

    /// Builds the absolute URL for a template expansion or a server link.
    ///
    /// Absolute links keep only their path and query; the host is always
    /// this resolver's endpoint.
    pub fn request_url(&self, link: &str) -> Result<Url, ApiError> {
        let path = match Url::parse(link) {
            Ok(absolute) if absolute.has_host() => {
                let mut path = absolute.path().to_string();
                if let Some(query) = absolute.query() {
                    path.push('?');
                    path.push_str(query);
                }
                path
            }
            _ => link.to_string(),
        };

        Ok(Url::parse(&format!(
            "{}{}",
            self.base_url(),
            self.request_path(&path)
        ))?)
    }
}

fn has_enterprise_prefix(path: &str) -> bool {
    path.strip_prefix(ENTERPRISE_API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}

/// Normalizes user-supplied host input to a bare lowercase hostname.
///
/// ```rust
/// use hub_cli::api::host::normalize_host;
///
/// assert_eq!(normalize_host("  HTTPS://GitHub.com/  "), "github.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    let host = host.strip_suffix('/').unwrap_or(host);
    host.to_lowercase()
}
