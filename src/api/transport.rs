//
//  hub-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Proxy-Aware Transport
//!
//! Builds the blocking HTTP client used for every API call. The proxy is
//! taken from `http_proxy` (or `HTTP_PROXY`) only; platform proxy discovery
//! is switched off.
//!
//! Bare `host:port` values are accepted and treated as `http://host:port`.

use std::fmt;
use std::sync::Arc;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::api::ApiError;

/// Product name sent as the `User-Agent` of every request.
pub const USER_AGENT: &str = "Hub";

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Factory for configured HTTP clients.
#[derive(Clone)]
pub struct Transport {
    env: EnvLookup,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Transport {
    /// Reads proxy settings from the process environment.
    pub fn from_env() -> Self {
        Self::with_env(|name| std::env::var(name).ok())
    }

    /// Reads proxy settings through `lookup` instead of the environment.
    pub fn with_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            env: Arc::new(lookup),
        }
    }

    /// The proxy the next client will use, if any.
    pub fn proxy(&self) -> Result<Option<Url>, ApiError> {
        proxy_from_env(self.env.as_ref())
    }

    /// Builds an HTTP client with the `Hub` user agent and the current proxy.
    pub fn build(&self) -> Result<Client, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT).no_proxy();

        if let Some(proxy) = self.proxy()? {
            debug!(proxy = %proxy, "using proxy");
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        Ok(builder.build()?)
    }
}

/// Resolves the proxy URL from `http_proxy`, then `HTTP_PROXY`.
///
/// # Returns
///
/// - `Ok(None)` when neither variable is set
/// - `Ok(Some(url))` for a usable proxy; values without an `http*` scheme are
///   retried with `http://` prepended
///
/// # Errors
///
/// [`ApiError::InvalidProxy`] when no parse attempt succeeds.
pub fn proxy_from_env(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Option<Url>, ApiError> {
    let raw = lookup("http_proxy")
        .filter(|value| !value.is_empty())
        .or_else(|| lookup("HTTP_PROXY").filter(|value| !value.is_empty()));

    let Some(raw) = raw else {
        return Ok(None);
    };

    let parsed = Url::parse(&raw);
    if let Ok(url) = &parsed {
        if url.scheme().starts_with("http") {
            return Ok(Some(url.clone()));
        }
    }

    if let Ok(url) = Url::parse(&format!("http://{raw}")) {
        return Ok(Some(url));
    }

    match parsed {
        Ok(url) => Ok(Some(url)),
        Err(source) => Err(ApiError::InvalidProxy { value: raw, source }),
    }
}
