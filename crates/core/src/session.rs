//! Session resolution across the two identity sources.
//!
//! A shopper can be signed in locally, through the external identity
//! provider, or both. Every view asks [`AuthSession`] instead of checking the
//! sources itself, so the precedence rule lives in exactly one place:
//! the local session wins.

use serde::{Deserialize, Serialize};

/// A locally established session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// An account record reported by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalAccount {
    pub name: Option<String>,
    pub username: String,
}

/// What the external identity provider currently reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalAuthState {
    pub authenticated: bool,
    pub accounts: Vec<ExternalAccount>,
}

impl ExternalAuthState {
    /// Signed in with a single account.
    #[must_use]
    pub fn signed_in(account: ExternalAccount) -> Self {
        Self {
            authenticated: true,
            accounts: vec![account],
        }
    }

    /// The account in use: the first one, and only while authenticated.
    #[must_use]
    pub fn active_account(&self) -> Option<&ExternalAccount> {
        if self.authenticated {
            self.accounts.first()
        } else {
            None
        }
    }
}

/// The authoritative identity for display and gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity<'a> {
    Local(&'a LocalUser),
    External(&'a ExternalAccount),
}

/// Both identity sources, resolved through one precedence rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSession {
    local: Option<LocalUser>,
    external: ExternalAuthState,
}

impl AuthSession {
    #[must_use]
    pub const fn new(local: Option<LocalUser>, external: ExternalAuthState) -> Self {
        Self { local, external }
    }

    #[must_use]
    pub const fn local(&self) -> Option<&LocalUser> {
        self.local.as_ref()
    }

    #[must_use]
    pub const fn external(&self) -> &ExternalAuthState {
        &self.external
    }

    /// Resolve the authoritative identity. Local takes precedence.
    #[must_use]
    pub fn identity(&self) -> Option<Identity<'_>> {
        self.local
            .as_ref()
            .map(Identity::Local)
            .or_else(|| self.external.active_account().map(Identity::External))
    }

    /// Logged in locally, or externally with at least one account.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.identity().is_some()
    }

    /// Local name, then external name, then external username.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let external = self.external.active_account();
        self.local
            .as_ref()
            .and_then(|user| user.name.as_deref())
            .or_else(|| external.and_then(|account| account.name.as_deref()))
            .or_else(|| external.map(|account| account.username.as_str()))
    }

    pub fn sign_in_local(&mut self, user: LocalUser) {
        self.local = Some(user);
    }

    pub fn clear_local(&mut self) {
        self.local = None;
    }

    pub fn set_external(&mut self, external: ExternalAuthState) {
        self.external = external;
    }
}
