//
//  hub-cli
//  api/resources/releases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release types.
//!
//! Creating a release returns an `upload_url` template on a separate upload
//! host, e.g. `https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}`.
//! [`Release::upload_url_for`] expands it for a given asset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::template::expand_template;
use crate::api::ApiError;

/// A release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: u64,

    pub tag_name: String,

    #[serde(default)]
    pub target_commitish: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub prerelease: bool,

    #[serde(default)]
    pub html_url: String,

    /// URI template for uploading assets.
    #[serde(default)]
    pub upload_url: String,

    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Expands [`upload_url`](Self::upload_url) for an asset.
    ///
    /// # Errors
    ///
    /// Fails if the template is malformed or does not expand to a URL.
    ///
    /// ```rust
    /// # use hub_cli::api::resources::Release;
    /// let release: Release = serde_json::from_str(r#"{
    ///     "tag_name": "v1.0.0",
    ///     "upload_url": "https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}"
    /// }"#).unwrap();
    ///
    /// let url = release.upload_url_for("hub.tgz", None).unwrap();
    /// assert_eq!(url.as_str(), "https://uploads.github.com/repos/o/r/releases/1/assets?name=hub.tgz");
    /// ```
    pub fn upload_url_for(&self, name: &str, label: Option<&str>) -> Result<Url, ApiError> {
        let expanded = expand_template(
            &self.upload_url,
            &[("name", name), ("label", label.unwrap_or_default())],
        )?;
        Ok(Url::parse(&expanded)?)
    }
}

/// A file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    #[serde(default)]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub browser_download_url: Option<String>,
}

/// Body for creating a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseParams {
    pub tag_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    pub draft: bool,

    pub prerelease: bool,
}
