//! Identity collaborator seam
//!
//! The portal client authenticates through a wallet/login SDK that lives
//! outside this crate. The store only needs one thing from it: the current
//! user id, if any, at the moment a key is computed. Modeling that as an
//! injected trait keeps the SDK out of this crate and makes the session
//! layer trivial to test.

use std::fmt;

/// A non-empty user identifier as issued by the identity backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a user id, rejecting empty strings
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies the current user identity when a draft key is computed.
///
/// The store treats a login or logout as producing a different key on the
/// next call, not as an event it reacts to.
pub trait IdentityProvider: Send + Sync {
    /// Current authenticated user, or None before authentication completes
    fn current_user(&self) -> Option<UserId>;
}

/// Fixed identity, for the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    /// Identity of a signed-in user
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user: UserId::new(id),
        }
    }

    /// Identity of a visitor who has not signed in
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
