//
//  hub-cli
//  api/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # URL Templates
//!
//! GitHub API paths are described as URI templates with named placeholders.
//! This module implements the subset of RFC 6570 the API uses:
//!
//! | Expression | Meaning | Missing value |
//! |------------|---------|---------------|
//! | `{owner}` | Required path segment | Error |
//! | `{/number}` | Optional `/`-prefixed segment | Omitted |
//! | `{?name,label}` | Query parameters | Omitted |
//!
//! ## Example
//!
//! ```rust
//! use hub_cli::api::template::PULL_REQUESTS;
//!
//! let path = PULL_REQUESTS
//!     .expand(&[("owner", "octocat"), ("repo", "hello"), ("number", "7")])
//!     .unwrap();
//! assert_eq!(path, "repos/octocat/hello/pulls/7");
//! ```

use thiserror::Error;

/// Errors raised while expanding a [`Hyperlink`].
///
/// These indicate a programming or input defect and are surfaced to the
/// caller without passing through the error normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("malformed URL template {template:?}: unterminated expression")]
    Unterminated { template: String },

    /// An expression used an operator this module does not support.
    #[error("malformed URL template {template:?}: unsupported expression {{{expression}}}")]
    Unsupported {
        template: String,
        expression: String,
    },

    /// A required path parameter was not supplied or was empty.
    #[error("missing required URL parameter {name:?} for {template:?}")]
    MissingParameter { template: String, name: String },
}

/// A named URL template for a GitHub API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hyperlink(pub &'static str);

pub const PULL_REQUESTS: Hyperlink = Hyperlink("repos/{owner}/{repo}/pulls{/number}");
pub const REPOSITORY: Hyperlink = Hyperlink("repos/{owner}/{repo}");
pub const USER_REPOSITORIES: Hyperlink = Hyperlink("user/repos");
pub const ORG_REPOSITORIES: Hyperlink = Hyperlink("orgs/{org}/repos");
pub const RELEASES: Hyperlink = Hyperlink("repos/{owner}/{repo}/releases{/id}");
pub const STATUSES: Hyperlink = Hyperlink("repos/{owner}/{repo}/statuses/{ref}");
pub const FORKS: Hyperlink = Hyperlink("repos/{owner}/{repo}/forks");
pub const REPO_ISSUES: Hyperlink = Hyperlink("repos/{owner}/{repo}/issues{/number}");
pub const AUTHORIZATIONS: Hyperlink = Hyperlink("authorizations{/id}");
pub const CURRENT_USER: Hyperlink = Hyperlink("user");

impl Hyperlink {
    /// Expands the template with the given `(name, value)` parameters.
    ///
    /// Values are percent-encoded. Parameters not referenced by the template
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed or a required
    /// `{name}` segment has no non-empty value.
    pub fn expand(&self, params: &[(&str, &str)]) -> Result<String, TemplateError> {
        expand_template(self.0, params)
    }
}

/// Expands an arbitrary template string, such as the `upload_url` returned
/// with a release.
pub fn expand_template(template: &str, params: &[(&str, &str)]) -> Result<String, TemplateError> {
    let lookup = |name: &str| {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| TemplateError::Unterminated {
            template: template.to_string(),
        })?;
        let expression = &after[..end];
        rest = &after[end + 1..];

        let unsupported = || TemplateError::Unsupported {
            template: template.to_string(),
            expression: expression.to_string(),
        };

        match expression.chars().next() {
            None => return Err(unsupported()),
            Some('/') => {
                for name in split_names(&expression[1..]).ok_or_else(unsupported)? {
                    if let Some(value) = lookup(name) {
                        out.push('/');
                        out.push_str(&urlencoding::encode(value));
                    }
                }
            }
            Some('?') => {
                let mut first = true;
                for name in split_names(&expression[1..]).ok_or_else(unsupported)? {
                    if let Some(value) = lookup(name) {
                        out.push(if first { '?' } else { '&' });
                        first = false;
                        out.push_str(name);
                        out.push('=');
                        out.push_str(&urlencoding::encode(value));
                    }
                }
            }
            Some(c) if is_name_char(c) => {
                let names = split_names(expression).ok_or_else(unsupported)?;
                if names.len() != 1 {
                    return Err(unsupported());
                }
                let value = lookup(names[0]).ok_or_else(|| TemplateError::MissingParameter {
                    template: template.to_string(),
                    name: names[0].to_string(),
                })?;
                out.push_str(&urlencoding::encode(value));
            }
            Some(_) => return Err(unsupported()),
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn split_names(list: &str) -> Option<Vec<&str>> {
    let names: Vec<&str> = list.split(',').collect();
    if names
        .iter()
        .all(|name| !name.is_empty() && name.chars().all(is_name_char))
    {
        Some(names)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_required_and_optional_segments() {
        let path = PULL_REQUESTS
            .expand(&[("owner", "octocat"), ("repo", "hello")])
            .unwrap();
        assert_eq!(path, "repos/octocat/hello/pulls");

        let path = PULL_REQUESTS
            .expand(&[("owner", "octocat"), ("repo", "hello"), ("number", "12")])
            .unwrap();
        assert_eq!(path, "repos/octocat/hello/pulls/12");
    }

    #[test]
    fn test_expand_query_parameters() {
        let url = expand_template(
            "https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}",
            &[("name", "hub linux.tgz")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://uploads.github.com/repos/o/r/releases/1/assets?name=hub%20linux.tgz"
        );
    }

    #[test]
    fn test_expand_encodes_values() {
        let path = STATUSES
            .expand(&[("owner", "o"), ("repo", "r"), ("ref", "feature/x")])
            .unwrap();
        assert_eq!(path, "repos/o/r/statuses/feature%2Fx");
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = REPOSITORY.expand(&[("owner", "octocat")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingParameter {
                template: "repos/{owner}/{repo}".to_string(),
                name: "repo".to_string(),
            }
        );

        let err = ORG_REPOSITORIES.expand(&[("org", "")]).unwrap_err();
        assert!(matches!(err, TemplateError::MissingParameter { .. }));
    }

    #[test]
    fn test_malformed_templates() {
        assert!(matches!(
            expand_template("repos/{owner", &[("owner", "o")]),
            Err(TemplateError::Unterminated { .. })
        ));
        assert!(matches!(
            expand_template("repos/{#frag}", &[]),
            Err(TemplateError::Unsupported { .. })
        ));
        assert!(matches!(
            expand_template("repos/{}", &[]),
            Err(TemplateError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_templates_without_placeholders() {
        assert_eq!(CURRENT_USER.expand(&[]).unwrap(), "user");
        assert_eq!(AUTHORIZATIONS.expand(&[]).unwrap(), "authorizations");
    }
}
