//
//  hub-cli
//  api/rest.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # REST Request Layer
//!
//! [`RestClient`] issues a single request against a resolved [`ApiHost`]:
//! read one resource, read every page of a collection, create a resource, or
//! stream a file to an upload URL.
//!
//! Every request carries the GitHub v3 media type and, when configured, the
//! credential. Non-success responses become [`ApiError::Response`] with the
//! body's message and field errors parsed out.
//!
//! ## Pagination
//!
//! [`RestClient::get_all`] follows `Link: <...>; rel="next"` headers until
//! the server stops sending one. Each link goes back through the host
//! resolver, so enterprise links keep their `/api/v3` namespace.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::{Body, Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LINK};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::error::{ApiError, ResponseError};
use super::host::ApiHost;
use crate::auth::Credential;

/// Media type requested from the API.
pub const MEDIA_TYPE: &str = "application/vnd.github.v3+json";

static NEXT_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<([^>]+)>;\s*rel="next""#).unwrap());

/// A configured, optionally authenticated client bound to one host.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    host: ApiHost,
    credential: Option<Credential>,
}

impl RestClient {
    pub fn new(http: Client, host: ApiHost) -> Self {
        Self {
            http,
            host,
            credential: None,
        }
    }

    /// Sets the credential sent with every request.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn host(&self) -> &ApiHost {
        &self.host
    }

    /// Resolves a template expansion or server link against the host.
    pub fn request_url(&self, path: &str) -> Result<Url, ApiError> {
        self.host.request_url(path)
    }

    /// Fetches and decodes a single resource.
    pub fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.request_url(path)?;
        let response = self.send(self.http.get(url.clone()), "GET", &url)?;
        Ok(response.json()?)
    }

    /// Fetches every page of a collection, in server order.
    pub fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        let mut next = Some(self.request_url(path)?);

        while let Some(url) = next.take() {
            let response = self.send(self.http.get(url.clone()), "GET", &url)?;
            next = match next_link(&response) {
                Some(link) => Some(self.request_url(&link)?),
                None => None,
            };
            let page: Vec<T> = response.json()?;
            items.extend(page);
        }

        Ok(items)
    }

    /// Creates a resource from a JSON body and decodes the result.
    pub fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path)?;
        let response = self.send(self.http.post(url.clone()).json(body), "POST", &url)?;
        Ok(response.json()?)
    }

    /// Streams `body` to an absolute upload URL.
    ///
    /// The URL is used as given; upload hosts are not rewritten.
    pub fn upload<T: DeserializeOwned>(
        &self,
        url: &Url,
        body: Body,
        content_type: &str,
        length: u64,
    ) -> Result<T, ApiError> {
        let request = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, length)
            .body(body);
        let response = self.send(request, "POST", url)?;
        Ok(response.json()?)
    }

    fn send(&self, request: RequestBuilder, method: &str, url: &Url) -> Result<Response, ApiError> {
        debug!(method, url = %url, "sending request");

        let mut request = request.header(ACCEPT, MEDIA_TYPE);
        if let Some(credential) = &self.credential {
            request = credential.apply_to_request(request);
        }

        let response = request.send()?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response.text().unwrap_or_default();
        Err(ApiError::Response(ResponseError::from_parts(
            status, &headers, &body,
        )))
    }
}

fn next_link(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| NEXT_LINK.captures(value).map(|caps| caps[1].to_string()))
}
