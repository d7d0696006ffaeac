//
//  hub-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub API Client
//!
//! [`Client`] is the single entry point the CLI uses to talk to GitHub or a
//! GitHub Enterprise instance. Each operation:
//!
//! 1. expands its URL template (failures are returned as is)
//! 2. obtains an authenticated [`RestClient`], resolving the token through the
//!    [`CredentialStore`] on first use
//! 3. issues one request, applying the host's path rule
//! 4. normalizes any failure with the operation's action label
//!
//! ## Example
//!
//! ```rust,no_run
//! use hub_cli::api::{Client, HostIdentity, Project};
//! use hub_cli::config::ConfigStore;
//! use hub_cli::interactive::TerminalPrompter;
//!
//! let store = ConfigStore::load(TerminalPrompter)?;
//! let mut client = Client::new(HostIdentity::new("github.com"), Box::new(store));
//!
//! let project = Project::new("octocat", "hello-world", "github.com");
//! let repo = client.repository(&project)?;
//! println!("{}", repo.html_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fmt;
use std::fs::File;

use reqwest::blocking::Body;
use url::Url;

use super::error::{append_hint, existence_hint, format_error, ApiError};
use super::host::{ApiHost, HostIdentity};
use super::resources::{
    Issue, IssueParams, PullRequest, PullRequestForIssueParams, PullRequestParams, Release,
    ReleaseAsset, ReleaseParams, Repository, RepositoryParams, Status, User,
};
use super::rest::RestClient;
use super::template::{
    CURRENT_USER, FORKS, ORG_REPOSITORIES, PULL_REQUESTS, RELEASES, REPOSITORY, REPO_ISSUES,
    STATUSES, USER_REPOSITORIES,
};
use super::transport::Transport;
use super::Project;
use crate::auth::{resolve_credentials, Credential, CredentialStore, NoCredentialStore};

/// Repository whose newest release names the latest version of this tool.
pub const RELEASE_OWNER: &str = "github";
pub const RELEASE_REPO: &str = "hub";

/// Facade over the GitHub REST API for one host.
///
/// Operations take `&mut self` because the first call may replace the host
/// identity with one resolved from the credential store.
pub struct Client {
    host: HostIdentity,
    store: Box<dyn CredentialStore>,
    transport: Transport,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that asks `store` for a token when `host` has none.
    pub fn new(host: HostIdentity, store: Box<dyn CredentialStore>) -> Self {
        Self {
            host,
            store,
            transport: Transport::from_env(),
        }
    }

    /// Creates a client for an identity that needs no credential lookup.
    pub fn with_host(host: HostIdentity) -> Self {
        Self::new(host, Box::new(NoCredentialStore))
    }

    /// Replaces the transport, e.g. to inject proxy settings.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// The current host identity, including any resolved token.
    pub fn host(&self) -> &HostIdentity {
        &self.host
    }

    fn api_host(&self) -> ApiHost {
        ApiHost::from_identity(&self.host)
    }

    /// Returns an authenticated client, resolving the token on first use.
    fn api(&mut self) -> Result<RestClient, ApiError> {
        if !self.host.has_token() {
            self.host = resolve_credentials(&self.host, self.store.as_ref())?;
        }

        Ok(RestClient::new(self.transport.build()?, self.api_host())
            .with_credential(Credential::token(self.host.access_token.clone())))
    }

    /// Runs `request` against an authenticated client, normalizing any failure
    /// with `action`.
    fn call<T>(
        &mut self,
        action: &str,
        request: impl FnOnce(&RestClient) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let api = self.api().map_err(|err| format_error(action, err))?;
        request(&api).map_err(|err| format_error(action, err))
    }

    /// Fetches pull request `number`.
    pub fn pull_request(&mut self, project: &Project, number: u64) -> Result<PullRequest, ApiError> {
        let number = number.to_string();
        let [owner, repo] = project.params();
        let path = PULL_REQUESTS.expand(&[owner, repo, ("number", number.as_str())])?;

        self.call("getting pull request", |api| api.get_one(&path))
    }

    /// Opens a pull request from `head` into `base`.
    pub fn create_pull_request(
        &mut self,
        project: &Project,
        params: &PullRequestParams,
    ) -> Result<PullRequest, ApiError> {
        let path = PULL_REQUESTS.expand(&project.params())?;
        self.create_pull_request_at(project, &path, params)
    }

    /// Converts issue `issue` into a pull request from `head` into `base`.
    pub fn create_pull_request_for_issue(
        &mut self,
        project: &Project,
        base: &str,
        head: &str,
        issue: u64,
    ) -> Result<PullRequest, ApiError> {
        let path = PULL_REQUESTS.expand(&project.params())?;
        let params = PullRequestForIssueParams {
            base: base.to_string(),
            head: head.to_string(),
            issue,
        };
        self.create_pull_request_at(project, &path, &params)
    }

    fn create_pull_request_at<B: serde::Serialize>(
        &mut self,
        project: &Project,
        path: &str,
        params: &B,
    ) -> Result<PullRequest, ApiError> {
        let action = "creating pull request";
        let api = self.api().map_err(|err| format_error(action, err))?;

        api.post(path, params).map_err(|err| {
            let hint = existence_hint(project, &err);
            append_hint(format_error(action, err), hint)
        })
    }

    pub fn repository(&mut self, project: &Project) -> Result<Repository, ApiError> {
        let path = REPOSITORY.expand(&project.params())?;
        self.call("getting repository", |api| api.get_one(&path))
    }

    /// Returns `true` if the repository can be fetched. Any failure counts as
    /// absence.
    pub fn is_repository_exist(&mut self, project: &Project) -> bool {
        self.repository(project).is_ok()
    }

    /// Creates `project` under the authenticated user, or under the owning
    /// organization when the owner is someone else.
    pub fn create_repository(
        &mut self,
        project: &Project,
        description: Option<&str>,
        homepage: Option<&str>,
        private: bool,
    ) -> Result<Repository, ApiError> {
        let action = "creating repository";
        let user_path = USER_REPOSITORIES.expand(&[])?;
        let org_path = ORG_REPOSITORIES.expand(&[("org", project.owner.as_str())])?;
        let api = self.api().map_err(|err| format_error(action, err))?;

        // The owner is compared with the login resolved above.
        let path = if project.owner == self.host.user {
            user_path
        } else {
            org_path
        };

        let params = RepositoryParams {
            name: project.name.clone(),
            description: description.map(str::to_string),
            homepage: homepage.map(str::to_string),
            private,
        };
        api.post(&path, &params)
            .map_err(|err| format_error(action, err))
    }

    /// Lists every release, newest first.
    pub fn releases(&mut self, project: &Project) -> Result<Vec<Release>, ApiError> {
        let path = RELEASES.expand(&project.params())?;
        self.call("getting release", |api| api.get_all(&path))
    }

    pub fn create_release(
        &mut self,
        project: &Project,
        params: &ReleaseParams,
    ) -> Result<Release, ApiError> {
        let path = RELEASES.expand(&project.params())?;
        self.call("creating release", |api| api.post(&path, params))
    }

    /// Uploads `asset` to an expanded release upload URL.
    ///
    /// The file is stat'ed before any network call; a stat failure is
    /// returned unchanged. The caller keeps ownership of the handle.
    pub fn upload_release_asset(
        &mut self,
        upload_url: &Url,
        asset: &File,
        content_type: &str,
    ) -> Result<ReleaseAsset, ApiError> {
        let length = asset.metadata()?.len();
        let action = "uploading asset";

        self.call(action, |api| {
            let body = Body::sized(asset.try_clone()?, length);
            api.upload(upload_url, body, content_type, length)
        })
    }

    /// The most recent status reported for `sha`, if any.
    pub fn ci_status(&mut self, project: &Project, sha: &str) -> Result<Option<Status>, ApiError> {
        let [owner, repo] = project.params();
        let path = STATUSES.expand(&[owner, repo, ("ref", sha)])?;

        let statuses: Vec<Status> = self.call("getting CI status", |api| api.get_one(&path))?;
        Ok(statuses.into_iter().next())
    }

    /// Forks `project` into the authenticated user's account.
    pub fn fork_repository(&mut self, project: &Project) -> Result<Repository, ApiError> {
        let path = FORKS.expand(&project.params())?;
        self.call("forking repository", |api| {
            api.post(&path, &serde_json::json!({}))
        })
    }

    /// Lists every open issue, including pull requests.
    pub fn issues(&mut self, project: &Project) -> Result<Vec<Issue>, ApiError> {
        let path = REPO_ISSUES.expand(&project.params())?;
        self.call("getting issues", |api| api.get_all(&path))
    }

    pub fn create_issue(
        &mut self,
        project: &Project,
        params: &IssueParams,
    ) -> Result<Issue, ApiError> {
        let path = REPO_ISSUES.expand(&project.params())?;
        self.call("creating issue", |api| api.post(&path, params))
    }

    /// Tag name of the newest release of this tool.
    ///
    /// Sent without credentials to the configured host.
    pub fn latest_tag_name(&self) -> Result<String, ApiError> {
        let path = RELEASES.expand(&[("owner", RELEASE_OWNER), ("repo", RELEASE_REPO)])?;

        let releases: Vec<Release> = RestClient::new(self.transport.build()?, self.api_host())
            .get_one(&path)
            .map_err(|err| ApiError::Message(format!("Error getting hub release: {err}")))?;

        releases
            .into_iter()
            .next()
            .map(|release| release.tag_name)
            .ok_or_else(|| ApiError::Message("No hub release is available".to_string()))
    }

    /// The user the token belongs to.
    pub fn current_user(&mut self) -> Result<User, ApiError> {
        let path = CURRENT_USER.expand(&[])?;
        self.call("getting current user", |api| api.get_one(&path))
    }
}
