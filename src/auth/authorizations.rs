//
//  hub-cli
//  auth/authorizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth Authorizations
//!
//! Exchanges a username and password for a long-lived OAuth token through the
//! authorizations API. An existing authorization registered to this tool is
//! reused; otherwise a new one is created with the `repo` scope.
//!
//! ## Flow
//!
//! 1. `GET authorizations` with basic auth (all pages)
//! 2. First entry whose `app.url` is [`OAUTH_APP_URL`] wins
//! 3. Otherwise `POST authorizations` with scopes `["repo"]`
//!
//! When the account has two-factor authentication enabled, the first attempt
//! fails with [`AuthError::is_two_factor`] set. Retry with the code supplied
//! as the one-time password.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hub_cli::api::host::ApiHost;
//! use hub_cli::auth::Authenticator;
//!
//! let authenticator = Authenticator::new(ApiHost::new("github.com", "https"));
//! match authenticator.find_or_create_token("octocat", "password", "") {
//!     Ok(token) => println!("token: {}", token.len()),
//!     Err(err) if err.is_two_factor() => println!("two-factor code required"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Credential;
use crate::api::error::{ApiError, AuthError};
use crate::api::host::ApiHost;
use crate::api::rest::RestClient;
use crate::api::template::AUTHORIZATIONS;
use crate::api::transport::Transport;

/// Name this tool registers its authorizations under.
pub const OAUTH_APP_NAME: &str = "hub";

/// URL identifying authorizations that belong to this tool.
pub const OAUTH_APP_URL: &str = "http://hub.github.com/";

/// Scopes requested for new authorizations.
pub const OAUTH_SCOPES: &[&str] = &["repo"];

/// An OAuth authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default)]
    pub id: u64,

    pub app: AuthorizationApp,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub scopes: Vec<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub note_url: Option<String>,
}

/// The application an authorization was issued to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationApp {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Body for creating an authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationParams {
    pub scopes: Vec<String>,
    pub note: String,
    pub note_url: String,
}

impl Default for AuthorizationParams {
    fn default() -> Self {
        Self {
            scopes: OAUTH_SCOPES.iter().map(|s| s.to_string()).collect(),
            note: OAUTH_APP_NAME.to_string(),
            note_url: OAUTH_APP_URL.to_string(),
        }
    }
}

/// Finds or creates this tool's OAuth token for a user.
#[derive(Debug, Clone)]
pub struct Authenticator {
    host: ApiHost,
    transport: Transport,
}

impl Authenticator {
    pub fn new(host: ApiHost) -> Self {
        Self::with_transport(host, Transport::from_env())
    }

    pub fn with_transport(host: ApiHost, transport: Transport) -> Self {
        Self { host, transport }
    }

    /// Returns a token for `user`, reusing an existing authorization when one
    /// belongs to this tool.
    ///
    /// An empty `one_time_password` sends no two-factor header.
    ///
    /// # Errors
    ///
    /// Every failure is an [`AuthError`]. Check
    /// [`is_two_factor`](AuthError::is_two_factor) to decide whether to ask
    /// for a code and try again.
    pub fn find_or_create_token(
        &self,
        user: &str,
        password: &str,
        one_time_password: &str,
    ) -> Result<String, AuthError> {
        self.exchange(user, password, one_time_password)
            .map_err(AuthError::new)
    }

    fn exchange(
        &self,
        user: &str,
        password: &str,
        one_time_password: &str,
    ) -> Result<String, ApiError> {
        let client = RestClient::new(self.transport.build()?, self.host.clone())
            .with_credential(Credential::basic(user, password, one_time_password));

        let path = AUTHORIZATIONS.expand(&[])?;
        let existing: Vec<Authorization> = client.get_all(&path)?;

        if let Some(authorization) = existing.into_iter().find(|a| a.app.url == OAUTH_APP_URL) {
            info!(host = %self.host.host(), "reusing existing authorization");
            return Ok(authorization.token);
        }

        let created: Authorization = client.post(&path, &AuthorizationParams::default())?;
        info!(host = %self.host.host(), "created new authorization");
        Ok(created.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::OTP_HEADER;
    use mockito::Matcher;

    fn authenticator(server: &mockito::Server) -> Authenticator {
        Authenticator::with_transport(
            ApiHost::new(&server.host_with_port(), "http"),
            Transport::with_env(|_| None),
        )
    }

    #[test]
    fn test_reuses_matching_authorization() {
        let mut server = mockito::Server::new();
        let list = server
            .mock("GET", "/api/v3/authorizations")
            .match_header("authorization", Matcher::Regex("^Basic ".into()))
            .with_body(
                r#"[
                    {"id": 1, "app": {"name": "other", "url": "http://other.example/"}, "token": "wrong"},
                    {"id": 2, "app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "first"},
                    {"id": 3, "app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "second"}
                ]"#,
            )
            .create();
        let create = server
            .mock("POST", "/api/v3/authorizations")
            .expect(0)
            .create();

        let token = authenticator(&server)
            .find_or_create_token("octocat", "secret", "")
            .unwrap();

        assert_eq!(token, "first");
        list.assert();
        create.assert();
    }

    #[test]
    fn test_creates_authorization_once_when_none_match() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v3/authorizations")
            .with_body(r#"[{"id": 1, "app": {"name": "hub", "url": "https://hub.github.com/"}, "token": "near-miss"}]"#)
            .create();
        let create = server
            .mock("POST", "/api/v3/authorizations")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "scopes": ["repo"],
                "note": "hub",
                "note_url": "http://hub.github.com/"
            })))
            .with_status(201)
            .with_body(r#"{"id": 9, "app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "created"}"#)
            .expect(1)
            .create();

        let token = authenticator(&server)
            .find_or_create_token("octocat", "secret", "")
            .unwrap();

        assert_eq!(token, "created");
        create.assert();
    }

    #[test]
    fn test_two_factor_challenge_and_retry() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v3/authorizations")
            .match_header(OTP_HEADER, Matcher::Missing)
            .with_status(401)
            .with_header(OTP_HEADER, "required; app")
            .with_body(r#"{"message": "Must specify two-factor authentication OTP code."}"#)
            .create();
        server
            .mock("GET", "/api/v3/authorizations")
            .match_header(OTP_HEADER, "654321")
            .with_body(r#"[{"app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "otp-token"}]"#)
            .create();

        let auth = authenticator(&server);
        let err = auth
            .find_or_create_token("octocat", "secret", "")
            .unwrap_err();
        assert!(err.is_two_factor());

        let token = auth
            .find_or_create_token("octocat", "secret", "654321")
            .unwrap();
        assert_eq!(token, "otp-token");
    }

    #[test]
    fn test_bad_credentials_are_not_two_factor() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v3/authorizations")
            .with_status(401)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create();

        let err = authenticator(&server)
            .find_or_create_token("octocat", "wrong", "")
            .unwrap_err();
        assert!(!err.is_two_factor());
        assert_eq!(err.cause().status(), Some(401));
    }
}
