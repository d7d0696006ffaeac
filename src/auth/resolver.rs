//
//  hub-cli
//  auth/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::anyhow;
use tracing::debug;

use super::CredentialStore;
use crate::api::{ApiError, AuthError, HostIdentity};

/// Returns an identity for `identity.host` that carries an access token.
///
/// An identity that already has a token is returned as is, without touching
/// the store. Otherwise the store is asked for the host, and its answer is
/// returned for the caller to keep.
///
/// # Errors
///
/// - API and authentication failures raised inside the store come back as
///   the [`ApiError`] they started as, so callers can normalize them
/// - Any other store failure is [`ApiError::Credentials`]
/// - So is an answer without a token
pub fn resolve_credentials(
    identity: &HostIdentity,
    store: &dyn CredentialStore,
) -> Result<HostIdentity, ApiError> {
    if identity.has_token() {
        return Ok(identity.clone());
    }

    debug!(host = %identity.host, "no cached token, asking credential store");
    let resolved = store
        .prompt_for_host(&identity.host)
        .map_err(store_error)?;

    if !resolved.has_token() {
        return Err(ApiError::Credentials(anyhow!(
            "no token for {}",
            identity.host
        )));
    }
    Ok(resolved)
}

fn store_error(err: anyhow::Error) -> ApiError {
    match err.downcast::<ApiError>() {
        Ok(err) => err,
        Err(err) => match err.downcast::<AuthError>() {
            Ok(err) => ApiError::Auth(err),
            Err(err) => ApiError::Credentials(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ResponseError;
    use std::cell::Cell;

    struct CountingStore {
        calls: Cell<usize>,
    }

    impl CredentialStore for CountingStore {
        fn prompt_for_host(&self, host: &str) -> anyhow::Result<HostIdentity> {
            self.calls.set(self.calls.get() + 1);
            Ok(HostIdentity::new(host).with_user("octocat").with_token("fresh"))
        }
    }

    struct FailingStore;

    impl CredentialStore for FailingStore {
        fn prompt_for_host(&self, _host: &str) -> anyhow::Result<HostIdentity> {
            anyhow::bail!("keychain locked")
        }
    }

    #[test]
    fn test_cached_token_skips_store() {
        let store = CountingStore { calls: Cell::new(0) };
        let identity = HostIdentity::new("github.com").with_token("cached");

        let resolved = resolve_credentials(&identity, &store).unwrap();

        assert_eq!(resolved.access_token, "cached");
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn test_missing_token_asks_store() {
        let store = CountingStore { calls: Cell::new(0) };
        let identity = HostIdentity::new("git.company.com");

        let resolved = resolve_credentials(&identity, &store).unwrap();

        assert_eq!(resolved.host, "git.company.com");
        assert_eq!(resolved.user, "octocat");
        assert_eq!(resolved.access_token, "fresh");
        assert_eq!(store.calls.get(), 1);
    }

    struct TokenlessStore;

    impl CredentialStore for TokenlessStore {
        fn prompt_for_host(&self, host: &str) -> anyhow::Result<HostIdentity> {
            Ok(HostIdentity::new(host).with_user("octocat"))
        }
    }

    struct RejectingStore;

    impl CredentialStore for RejectingStore {
        fn prompt_for_host(&self, _host: &str) -> anyhow::Result<HostIdentity> {
            let cause = ApiError::Response(ResponseError::new(401).with_message("Bad credentials"));
            Err(ApiError::Auth(AuthError::new(cause)).into())
        }
    }

    #[test]
    fn test_answer_without_token_is_rejected() {
        let err = resolve_credentials(&HostIdentity::new("ghe.local"), &TokenlessStore).unwrap_err();
        assert!(matches!(err, ApiError::Credentials(_)));
        assert_eq!(err.to_string(), "no token for ghe.local");
    }

    #[test]
    fn test_login_failure_keeps_auth_error() {
        let err = resolve_credentials(&HostIdentity::new("github.com"), &RejectingStore).unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_store_error_unchanged() {
        let err = resolve_credentials(&HostIdentity::new("github.com"), &FailingStore).unwrap_err();
        assert!(matches!(err, ApiError::Credentials(_)));
        assert_eq!(err.to_string(), "keychain locked");
    }
}
