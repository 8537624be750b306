use std::{
    fmt::{Debug, Formatter},
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Short-lived token issued by the authentication endpoint.
#[must_use]
#[derive(Clone, PartialEq, Eq, derive_more::From)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(…)")
    }
}

/// Single-slot access token cache shared between authentication and queries.
///
/// The server never tells when a token expires, so a stored token stays until it is
/// rejected and replaced.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<AccessToken>;

    /// Replace the stored token.
    fn set(&self, token: AccessToken);

    fn clear(&self);
}

#[derive(Default)]
pub struct InMemoryTokenStore(Mutex<Option<AccessToken>>);

impl InMemoryTokenStore {
    pub fn with_token(token: AccessToken) -> Self {
        Self(Mutex::new(Some(token)))
    }

    fn lock(&self) -> MutexGuard<'_, Option<AccessToken>> {
        // A poisoned slot still holds either a whole token or nothing.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Option<AccessToken> {
        self.lock().clone()
    }

    fn set(&self, token: AccessToken) {
        *self.lock() = Some(token);
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}
