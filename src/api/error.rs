//
//  hub-cli
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Errors and Normalization
//!
//! Every failure in the API layer is an [`ApiError`]. At each client call site
//! the error is passed through [`format_error`] together with an action label
//! such as `"creating pull request"`:
//!
//! | Shape | Normalized message |
//! |-------|--------------------|
//! | [`ApiError::Response`] | `Error <action>: <reason> (HTTP <status>)`, plus validation detail for 422 |
//! | [`ApiError::Auth`] | `Error <action>: Unauthorized (HTTP 401)` |
//! | anything else | unchanged |
//!
//! ## Example
//!
//! ```rust
//! use hub_cli::api::error::{format_error, ApiError, FieldError, ResponseError};
//!
//! let err = ApiError::Response(ResponseError::new(422).with_message("Validation Failed").with_errors(vec![
//!     FieldError::with_message("name already exists"),
//! ]));
//!
//! assert_eq!(
//!     format_error("creating repository", err).to_string(),
//!     "Error creating repository: Unprocessable Entity (HTTP 422)\nValidation Failed\nname already exists"
//! );
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::template::TemplateError;
use super::Project;

/// Header GitHub uses to request (and receive) a one-time password
/// (`X-GitHub-OTP`), in the lowercase form header maps store.
pub const OTP_HEADER: &str = "x-github-otp";

static OTP_REQUIRED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)required; (\w+)").unwrap());

/// Unified error type for the API layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{0}")]
    Response(ResponseError),

    /// Exchanging username and password for a token failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Connection, DNS, TLS or similar transport failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// `http_proxy` / `HTTP_PROXY` could not be parsed.
    #[error("invalid proxy address {value:?}: {source}")]
    InvalidProxy {
        value: String,
        source: url::ParseError,
    },

    /// A URL template could not be expanded.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A URL could not be built from an expansion or a server link.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Local I/O failure, e.g. reading an asset to upload.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The credential store could not provide a token.
    #[error(transparent)]
    Credentials(#[from] anyhow::Error),

    /// An error already formatted for display by [`format_error`].
    #[error("{0}")]
    Normalized(NormalizedError),

    /// A plain message.
    #[error("{0}")]
    Message(String),
}

impl ApiError {
    /// The HTTP status of a response error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            _ => None,
        }
    }

    /// The normalized form of this error, if it has been normalized.
    pub fn normalized(&self) -> Option<&NormalizedError> {
        match self {
            Self::Normalized(e) => Some(e),
            _ => None,
        }
    }
}

/// The category of a response error, derived from its status and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseErrorKind {
    BadRequest,
    Unauthorized,
    OneTimePasswordRequired,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    ClientError,
    ServerError,
    Other,
}

impl ResponseErrorKind {
    fn classify(status: u16, otp_header: Option<&str>) -> Self {
        match status {
            400 => Self::BadRequest,
            401 if otp_header.is_some_and(|value| OTP_REQUIRED.is_match(value)) => {
                Self::OneTimePasswordRequired
            }
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::UnprocessableEntity,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// A field-level validation error from a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl FieldError {
    /// A field error carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return f.write_str(message);
        }
        write!(f, "{} error {}", self.resource, self.code)?;
        if !self.field.is_empty() {
            write!(f, " on {} field", self.field)?;
        }
        Ok(())
    }
}

/// A structured error response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// HTTP status code.
    pub status: u16,
    /// Status line, e.g. `"422 Unprocessable Entity"`.
    pub status_line: String,
    pub kind: ResponseErrorKind,
    /// Top-level `message` from the body.
    pub message: Option<String>,
    /// Field-level validation errors, in server order.
    pub errors: Vec<FieldError>,
    pub documentation_url: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
    #[serde(default)]
    documentation_url: Option<String>,
}

impl ResponseError {
    /// Creates an error for `status` with no body detail.
    pub fn new(status: u16) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default();
        Self {
            status,
            status_line: format!("{status} {reason}").trim_end().to_string(),
            kind: ResponseErrorKind::classify(status, None),
            message: None,
            errors: Vec::new(),
            documentation_url: None,
        }
    }

    /// Builds the error from a failed response's status, headers and body.
    ///
    /// Unparseable bodies leave `message` and `errors` empty.
    pub fn from_parts(status: StatusCode, headers: &HeaderMap, body: &str) -> Self {
        let otp = headers.get(OTP_HEADER).and_then(|v| v.to_str().ok());
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        let errors = parsed
            .errors
            .into_iter()
            .map(|value| match value {
                serde_json::Value::String(message) => FieldError::with_message(message),
                other => serde_json::from_value(other).unwrap_or_default(),
            })
            .collect();

        let mut error = Self::new(status.as_u16());
        error.kind = ResponseErrorKind::classify(status.as_u16(), otp);
        error.message = parsed.message.filter(|m| !m.is_empty());
        error.errors = errors;
        error.documentation_url = parsed.documentation_url;
        error
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_kind(mut self, kind: ResponseErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// The reason phrase of the status line.
    pub fn reason(&self) -> &str {
        self.status_line
            .split_once(' ')
            .map(|(_, reason)| reason.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_line)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Failure while finding or creating an authorization token.
///
/// Always reported as `Unauthorized (HTTP 401)` once normalized; use
/// [`is_two_factor`](Self::is_two_factor) to tell a 2FA challenge apart from
/// bad credentials.
#[derive(Error, Debug)]
#[error("{cause}")]
pub struct AuthError {
    #[source]
    cause: Box<ApiError>,
}

impl AuthError {
    pub fn new(cause: impl Into<ApiError>) -> Self {
        Self {
            cause: Box::new(cause.into()),
        }
    }

    /// The underlying failure.
    pub fn cause(&self) -> &ApiError {
        &self.cause
    }

    /// Returns `true` if the server asked for a one-time password.
    pub fn is_two_factor(&self) -> bool {
        matches!(
            self.cause.as_ref(),
            ApiError::Response(ResponseError {
                kind: ResponseErrorKind::OneTimePasswordRequired,
                ..
            })
        )
    }
}

/// Display category of a normalized error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Unauthorized,
    Validation,
    NotFound,
    Generic,
}

/// An error ready for display, labelled with the action that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    action: String,
    headline: String,
    details: Vec<String>,
    classification: Classification,
    hint: Option<String>,
}

impl NormalizedError {
    fn from_response(action: &str, error: &ResponseError) -> Self {
        let classification = match error.status {
            401 => Classification::Unauthorized,
            404 => Classification::NotFound,
            422 => Classification::Validation,
            _ => Classification::Generic,
        };

        let mut details = Vec::new();
        if error.status == 422 {
            details.extend(error.message.iter().cloned());
            details.extend(error.errors.iter().map(ToString::to_string));
        }

        Self {
            action: action.to_string(),
            headline: format!(
                "Error {}: {} (HTTP {})",
                action,
                error.reason(),
                error.status
            ),
            details,
            classification,
            hint: None,
        }
    }

    fn unauthorized(action: &str) -> Self {
        Self {
            action: action.to_string(),
            headline: format!("Error {action}: Unauthorized (HTTP 401)"),
            details: Vec::new(),
            classification: Classification::Unauthorized,
            hint: None,
        }
    }

    /// Attaches a hint shown after the message.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// The first line, e.g. `Error getting repository: Not Found (HTTP 404)`.
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Validation messages, one per line after the headline.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline)?;
        for line in self.details.iter().chain(self.hint.iter()) {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Normalizes `err` for display with the given action label.
///
/// Response and authentication errors become [`ApiError::Normalized`];
/// everything else, including already-normalized errors, is returned as is.
pub fn format_error(action: &str, err: ApiError) -> ApiError {
    match err {
        ApiError::Response(e) => ApiError::Normalized(NormalizedError::from_response(action, &e)),
        ApiError::Auth(_) => ApiError::Normalized(NormalizedError::unauthorized(action)),
        other => other,
    }
}

/// A hint asking whether `project` exists, for 404 responses only.
///
/// Uses the project's web URL with the scheme removed.
pub fn existence_hint(project: &Project, err: &ApiError) -> Option<String> {
    if err.status() != Some(404) {
        return None;
    }
    let web_url = project.web_url(None);
    let (_, url) = web_url.split_once("://")?;
    (!url.is_empty()).then(|| format!("Are you sure that {url} exists?"))
}

/// Appends `hint` to a normalized error.
pub(crate) fn append_hint(err: ApiError, hint: Option<String>) -> ApiError {
    match (err, hint) {
        (ApiError::Normalized(normalized), Some(hint)) => {
            ApiError::Normalized(normalized.with_hint(hint))
        }
        (other, Some(hint)) => ApiError::Message(format!("{other}\n{hint}")),
        (other, None) => other,
    }
}
