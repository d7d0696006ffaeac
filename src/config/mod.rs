//
//  hub-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Stores one entry per GitHub host: the user login, the OAuth token obtained
//! for it, and the protocol used to reach it.
//!
//! ## Configuration File Location
//!
//! `$HUB_CONFIG` when set, otherwise `hosts.toml` in the platform config
//! directory:
//!
//! - **Linux**: `~/.config/hub/hosts.toml`
//! - **macOS**: `~/Library/Application Support/hub/hosts.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\hub\config\hosts.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [hosts."github.com"]
//! user = "octocat"
//! oauth_token = "0123456789abcdef"
//! protocol = "https"
//!
//! [hosts."git.company.com"]
//! user = "mona"
//! oauth_token = "fedcba9876543210"
//! ```
//!
//! ## Credential Store
//!
//! [`ConfigStore`] is the [`CredentialStore`] the CLI hands to the API
//! client. For a host without a token it prompts for a username and password,
//! trades them for a token, and saves the result.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::host::{normalize_host, ApiHost, DEFAULT_PROTOCOL};
use crate::api::transport::Transport;
use crate::api::{ApiError, Client, HostIdentity};
use crate::auth::{Authenticator, CredentialStore};
use crate::interactive::Prompter;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "HUB_CONFIG";

/// Saved hosts, keyed by hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hosts: BTreeMap<String, HostConfig>,
}

/// Saved settings for one host.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub oauth_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl std::fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostConfig")
            .field("user", &self.user)
            .field("has_token", &!self.oauth_token.is_empty())
            .field("protocol", &self.protocol)
            .finish()
    }
}

impl Config {
    /// Loads the configuration from [`config_path`](Self::config_path).
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`. A missing file is an empty
    /// configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// `$HUB_CONFIG`, or `hosts.toml` in the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("hosts.toml"))
    }

    /// The saved identity for `host`, if any.
    pub fn identity(&self, host: &str) -> Option<HostIdentity> {
        let host = normalize_host(host);
        self.hosts.get(&host).map(|entry| {
            HostIdentity::new(&host)
                .with_user(&entry.user)
                .with_token(&entry.oauth_token)
                .with_protocol(entry.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL))
        })
    }

    /// Saves `identity`, replacing any previous entry for its host.
    pub fn set_identity(&mut self, identity: &HostIdentity) {
        let protocol = (identity.protocol != DEFAULT_PROTOCOL).then(|| identity.protocol.clone());
        self.hosts.insert(
            normalize_host(&identity.host),
            HostConfig {
                user: identity.user.clone(),
                oauth_token: identity.access_token.clone(),
                protocol,
            },
        );
    }

    /// Forgets `host`. Returns `false` if it was not saved.
    pub fn remove_identity(&mut self, host: &str) -> bool {
        self.hosts.remove(&normalize_host(host)).is_some()
    }
}

/// The production credential store: saved tokens first, then a login prompt.
pub struct ConfigStore<P: Prompter> {
    path: PathBuf,
    config: RefCell<Config>,
    prompter: P,
    transport: Transport,
    protocol: Option<String>,
}

impl<P: Prompter> ConfigStore<P> {
    /// Opens the store at the default configuration path.
    ///
    /// An unreadable file is logged and treated as empty; it is overwritten
    /// on the next successful login.
    pub fn load(prompter: P) -> Result<Self> {
        let path = Config::config_path()?;
        let config = Config::load_from(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), "ignoring unreadable config: {err:#}");
            Config::default()
        });
        Ok(Self::with_config(path, config, prompter))
    }

    pub fn with_config(path: PathBuf, config: Config, prompter: P) -> Self {
        Self {
            path,
            config: RefCell::new(config),
            prompter,
            transport: Transport::from_env(),
            protocol: None,
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Protocol for every identity this store hands out, over the saved one.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> Config {
        self.config.borrow().clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the saved token for `host` and writes the file.
    pub fn logout(&self, host: &str) -> Result<bool> {
        let mut config = self.config.borrow_mut();
        if !config.remove_identity(host) {
            return Ok(false);
        }
        config.save_to(&self.path)?;
        info!(host = %normalize_host(host), "removed credentials");
        Ok(true)
    }

    /// Prompts for credentials and stores a fresh token for `host`, even if
    /// one is already saved.
    pub fn login(&self, host: &str, protocol: &str) -> Result<HostIdentity> {
        let host = normalize_host(host);
        let user = self.prompter.username(&host)?;
        let password = self.prompter.password(&host, &user)?;

        let authenticator =
            Authenticator::with_transport(ApiHost::new(&host, protocol), self.transport.clone());

        let mut code = String::new();
        let token = loop {
            match authenticator.find_or_create_token(&user, &password, &code) {
                Ok(token) => break token,
                Err(err) if err.is_two_factor() => code = self.prompter.two_factor_code()?,
                Err(err) => return Err(ApiError::Auth(err).into()),
            }
        };

        let identity = HostIdentity::new(&host)
            .with_token(token)
            .with_protocol(protocol);
        let login = Client::with_host(identity.clone())
            .with_transport(self.transport.clone())
            .current_user()?
            .login;
        let identity = identity.with_user(login);

        let mut config = self.config.borrow_mut();
        config.set_identity(&identity);
        config.save_to(&self.path)?;
        info!(host = %host, user = %identity.user, "saved credentials");

        Ok(identity)
    }
}

impl<P: Prompter> CredentialStore for ConfigStore<P> {
    fn prompt_for_host(&self, host: &str) -> Result<HostIdentity> {
        let saved = self.config.borrow().identity(host);
        if let Some(identity) = saved.as_ref().filter(|identity| identity.has_token()) {
            return Ok(match &self.protocol {
                Some(protocol) => identity.clone().with_protocol(protocol),
                None => identity.clone(),
            });
        }

        let protocol = self
            .protocol
            .clone()
            .or_else(|| saved.map(|identity| identity.protocol))
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
        self.login(host, &protocol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Classification, Project};
    use crate::exit_codes;
    use std::cell::Cell;
    use tempfile::tempdir;

    #[derive(Default)]
    struct ScriptedPrompter {
        codes: RefCell<Vec<&'static str>>,
        asked: Cell<usize>,
    }

    impl Prompter for ScriptedPrompter {
        fn username(&self, _host: &str) -> Result<String> {
            self.asked.set(self.asked.get() + 1);
            Ok("octocat".to_string())
        }

        fn password(&self, _host: &str, _user: &str) -> Result<String> {
            Ok("secret".to_string())
        }

        fn two_factor_code(&self) -> Result<String> {
            self.codes
                .borrow_mut()
                .pop()
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("no more codes"))
        }
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("hosts.toml");

        let mut config = Config::default();
        config.set_identity(
            &HostIdentity::new("GitHub.com")
                .with_user("octocat")
                .with_token("abc"),
        );
        config.set_identity(
            &HostIdentity::new("ghe.local")
                .with_user("mona")
                .with_token("def")
                .with_protocol("http"),
        );
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[hosts.\"github.com\"]"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let identity = loaded.identity("ghe.local").unwrap();
        assert_eq!(identity.protocol, "http");
        assert_eq!(loaded.identity("github.com").unwrap().protocol, "https");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hosts.toml");
        std::fs::write(&path, "hosts = 3").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn test_logout_removes_host() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hosts.toml");
        let mut config = Config::default();
        config.set_identity(&HostIdentity::new("github.com").with_token("abc"));

        let store = ConfigStore::with_config(path.clone(), config, ScriptedPrompter::default());
        assert!(store.logout("github.com").unwrap());
        assert!(!store.logout("github.com").unwrap());
        assert!(Config::load_from(&path).unwrap().hosts.is_empty());
    }

    #[test]
    fn test_saved_token_skips_prompt() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.set_identity(&HostIdentity::new("github.com").with_user("octocat").with_token("abc"));

        let store = ConfigStore::with_config(
            dir.path().join("hosts.toml"),
            config,
            ScriptedPrompter::default(),
        );
        let identity = store.prompt_for_host("github.com").unwrap();

        assert_eq!(identity.access_token, "abc");
        assert_eq!(store.prompter.asked.get(), 0);
    }

    #[test]
    fn test_login_with_two_factor_saves_token() {
        let mut server = mockito::Server::new();
        let host = server.host_with_port();
        server
            .mock("GET", "/api/v3/authorizations")
            .match_header("x-github-otp", mockito::Matcher::Missing)
            .with_status(401)
            .with_header("x-github-otp", "required; sms")
            .create();
        server
            .mock("GET", "/api/v3/authorizations")
            .match_header("x-github-otp", "112233")
            .with_body("[]")
            .create();
        server
            .mock("POST", "/api/v3/authorizations")
            .match_header("x-github-otp", "112233")
            .with_status(201)
            .with_body(r#"{"app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "new-token"}"#)
            .create();
        server
            .mock("GET", "/api/v3/user")
            .match_header("authorization", "token new-token")
            .with_body(r#"{"login": "octocat"}"#)
            .create();

        let dir = tempdir().unwrap();
        let path = dir.path().join("hosts.toml");
        let mut config = Config::default();
        config.set_identity(&HostIdentity::new(&host).with_protocol("http"));

        let prompter = ScriptedPrompter {
            codes: RefCell::new(vec!["112233"]),
            ..Default::default()
        };
        let store = ConfigStore::with_config(path.clone(), config, prompter)
            .with_transport(Transport::with_env(|_| None));

        let identity = store.prompt_for_host(&host).unwrap();
        assert_eq!(identity.access_token, "new-token");
        assert_eq!(identity.user, "octocat");
        assert_eq!(identity.protocol, "http");

        let saved = Config::load_from(&path).unwrap().identity(&host).unwrap();
        assert_eq!(saved.access_token, "new-token");
        assert_eq!(saved.user, "octocat");
    }

    #[test]
    fn test_bad_credentials_fail_login() {
        let mut server = mockito::Server::new();
        let host = server.host_with_port();
        server
            .mock("GET", "/api/v3/authorizations")
            .with_status(401)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create();

        let dir = tempdir().unwrap();
        let store = ConfigStore::with_config(
            dir.path().join("hosts.toml"),
            Config::default(),
            ScriptedPrompter::default(),
        )
        .with_transport(Transport::with_env(|_| None));

        let err = store.login(&host, "http").unwrap_err();
        assert_eq!(err.to_string(), "401 Unauthorized: Bad credentials");
        assert!(!dir.path().join("hosts.toml").exists());
    }

    #[test]
    fn test_failed_login_is_normalized_by_client() {
        let mut server = mockito::Server::new();
        let host = server.host_with_port();
        server
            .mock("GET", "/api/v3/authorizations")
            .with_status(401)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create();
        let pulls = server
            .mock("GET", "/api/v3/repos/octocat/hello/pulls/1")
            .expect(0)
            .create();

        let dir = tempdir().unwrap();
        let store = ConfigStore::with_config(
            dir.path().join("hosts.toml"),
            Config::default(),
            ScriptedPrompter::default(),
        )
        .with_transport(Transport::with_env(|_| None))
        .with_protocol("http");
        let mut client = Client::new(HostIdentity::new(&host).with_protocol("http"), Box::new(store))
            .with_transport(Transport::with_env(|_| None));
        let project = Project::new("octocat", "hello", &host).with_protocol("http");

        let err = client.pull_request(&project, 1).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error getting pull request: Unauthorized (HTTP 401)"
        );
        assert_eq!(
            err.normalized().unwrap().classification(),
            Classification::Unauthorized
        );
        assert_eq!(exit_codes::for_error(&err.into()), exit_codes::AUTH_ERROR);
        pulls.assert();
    }

    #[test]
    fn test_requested_protocol_used_for_new_login() {
        let mut server = mockito::Server::new();
        let host = server.host_with_port();
        server
            .mock("GET", "/api/v3/authorizations")
            .with_body(r#"[{"app": {"name": "hub", "url": "http://hub.github.com/"}, "token": "http-token"}]"#)
            .create();
        server
            .mock("GET", "/api/v3/user")
            .with_body(r#"{"login": "octocat"}"#)
            .create();

        let dir = tempdir().unwrap();
        let store = ConfigStore::with_config(
            dir.path().join("hosts.toml"),
            Config::default(),
            ScriptedPrompter::default(),
        )
        .with_transport(Transport::with_env(|_| None))
        .with_protocol("http");

        let identity = store.prompt_for_host(&host).unwrap();
        assert_eq!(identity.access_token, "http-token");
        assert_eq!(identity.protocol, "http");
    }

    #[test]
    fn test_requested_protocol_overrides_saved_one() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.set_identity(&HostIdentity::new("ghe.local").with_token("abc"));

        let store = ConfigStore::with_config(
            dir.path().join("hosts.toml"),
            config,
            ScriptedPrompter::default(),
        )
        .with_protocol("http");

        assert_eq!(store.prompt_for_host("ghe.local").unwrap().protocol, "http");
    }
}
