//
//  hub-cli
//  api/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project References
//!
//! A [`Project`] names a repository on a host. It can be parsed from a git
//! remote URL or from an `OWNER/NAME` string.
//!
//! ## Supported Remote Formats
//!
//! - SSH: `git@github.com:owner/repo.git`
//! - SSH URL: `ssh://git@github.com/owner/repo.git`
//! - HTTPS: `https://github.com/owner/repo(.git)`

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::host::{normalize_host, DEFAULT_PROTOCOL};

/// Matches `git@host:owner/repo.git`.
static SSH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^git@([^:]+):([^/]+)/(.+?)(?:\.git)?/?$").unwrap());

/// Matches `ssh://git@host(:port)/owner/repo.git`.
static SSH_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ssh://(?:[^@/]+@)?([^:/]+)(?::\d+)?/([^/]+)/(.+?)(?:\.git)?/?$").unwrap()
});

/// Matches `http(s)://host/owner/repo(.git)`.
static HTTPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?)://(?:[^@/]+@)?([^/]+)/([^/]+)/(.+?)(?:\.git)?/?$").unwrap()
});

/// A repository on a GitHub host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// User or organization login.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Web hostname, e.g. `github.com`.
    pub host: String,
    /// Protocol used for web URLs.
    pub protocol: String,
}

impl Project {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, host: &str) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            host: normalize_host(host),
            protocol: DEFAULT_PROTOCOL.to_string(),
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Parses `OWNER/NAME` on the given host.
    ///
    /// ```rust
    /// use hub_cli::api::Project;
    ///
    /// let project = Project::from_name_with_owner("octocat/hello-world", "github.com").unwrap();
    /// assert_eq!(project.owner, "octocat");
    /// assert!(Project::from_name_with_owner("no-slash", "github.com").is_none());
    /// ```
    pub fn from_name_with_owner(value: &str, host: &str) -> Option<Self> {
        let (owner, name) = value.trim().split_once('/')?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name, host))
    }

    /// Parses a git remote URL.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();

        if let Some(caps) = SSH_PATTERN.captures(url) {
            return Some(Self::new(&caps[2], &caps[3], &caps[1]));
        }

        if let Some(caps) = SSH_URL_PATTERN.captures(url) {
            return Some(Self::new(&caps[2], &caps[3], &caps[1]));
        }

        if let Some(caps) = HTTPS_PATTERN.captures(url) {
            return Some(Self::new(&caps[3], &caps[4], &caps[2]).with_protocol(&caps[1]));
        }

        None
    }

    /// `owner/name`.
    pub fn name_with_owner(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// The project's web URL, optionally with a sub-path such as `pulls`.
    pub fn web_url(&self, path: Option<&str>) -> String {
        let mut url = format!(
            "{}://{}/{}/{}",
            self.protocol, self.host, self.owner, self.name
        );
        if let Some(path) = path.map(|p| p.trim_start_matches('/')).filter(|p| !p.is_empty()) {
            url.push('/');
            url.push_str(path);
        }
        url
    }

    /// Template parameters for `{owner}` and `{repo}`.
    pub(crate) fn params(&self) -> [(&'static str, &str); 2] {
        [("owner", self.owner.as_str()), ("repo", self.name.as_str())]
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssh_remote() {
        let project = Project::from_remote_url("git@github.com:octocat/hello.git").unwrap();
        assert_eq!(project.host, "github.com");
        assert_eq!(project.owner, "octocat");
        assert_eq!(project.name, "hello");
    }

    #[test]
    fn test_parse_ssh_url_remote() {
        let project =
            Project::from_remote_url("ssh://git@git.company.com:2222/team/tool.git").unwrap();
        assert_eq!(project.host, "git.company.com");
        assert_eq!(project.owner, "team");
        assert_eq!(project.name, "tool");
    }

    #[test]
    fn test_parse_https_remote() {
        let project = Project::from_remote_url("https://github.com/octocat/hello").unwrap();
        assert_eq!(project.name_with_owner(), "octocat/hello");
        assert_eq!(project.protocol, "https");

        let project = Project::from_remote_url("http://ghe.local/team/site.github.io.git").unwrap();
        assert_eq!(project.name, "site.github.io");
        assert_eq!(project.protocol, "http");
    }

    #[test]
    fn test_unparseable_remote() {
        assert!(Project::from_remote_url("not a remote").is_none());
        assert!(Project::from_remote_url("https://github.com/only-owner").is_none());
    }

    #[test]
    fn test_web_url() {
        let project = Project::new("octocat", "hello", "GitHub.com");
        assert_eq!(project.web_url(None), "https://github.com/octocat/hello");
        assert_eq!(
            project.web_url(Some("/pulls")),
            "https://github.com/octocat/hello/pulls"
        );
    }
}
