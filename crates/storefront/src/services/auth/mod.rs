//! Authentication service.
//!
//! Two identity sources can sign a user in: the local session held here and
//! an external identity provider driven through its popup flow. Which one is
//! authoritative is decided by [`AuthSession`].

mod error;

pub use error::{AuthError, LOGIN_FAILED_MESSAGE};

use std::future::Future;

use tokio::sync::RwLock;

use foodiehub_core::{AuthSession, ExternalAccount, ExternalAuthState, LocalUser};

use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};

/// Where the provider returns the user after its logout popup.
pub const POST_LOGOUT_REDIRECT: &str = "/login";

/// An external identity provider with a popup-based sign-in flow.
pub trait IdentityProvider: Send + Sync {
    /// What the provider currently reports.
    fn auth_state(&self) -> ExternalAuthState;

    /// Run the sign-in popup.
    fn login_popup(&self) -> impl Future<Output = Result<ExternalAccount, AuthError>> + Send;

    /// Run the sign-out popup for `account`.
    fn logout_popup(
        &self,
        account: &ExternalAccount,
        post_logout_redirect: &str,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;
}

/// Authentication service.
///
/// Owns the local session and combines it with the provider's state.
pub struct AuthService<P> {
    provider: P,
    local: RwLock<Option<LocalUser>>,
}

impl<P: IdentityProvider> AuthService<P> {
    /// Create a new authentication service with nobody signed in locally.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            local: RwLock::new(None),
        }
    }

    /// The identity provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// A snapshot of both identity sources.
    pub async fn session(&self) -> AuthSession {
        let local = self.local.read().await.clone();
        AuthSession::new(local, self.provider.auth_state())
    }

    /// Sign a user in through the local session.
    pub async fn sign_in_local(&self, user: LocalUser) {
        if let Some(name) = user.name.as_deref().or(user.email.as_deref()) {
            set_sentry_user(name);
        }
        add_breadcrumb("auth", "Local sign-in", None);
        *self.local.write().await = Some(user);
    }

    /// Sign in through the identity provider.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginFailed` if the provider flow fails. Its
    /// message is meant to be shown to the user.
    pub async fn login(&self) -> Result<ExternalAccount, AuthError> {
        match self.provider.login_popup().await {
            Ok(account) => {
                set_sentry_user(&account.username);
                tracing::info!(username = %account.username, "External sign-in succeeded");
                Ok(account)
            }
            Err(err) => {
                tracing::error!(error = %err, "External sign-in failed");
                Err(AuthError::LoginFailed)
            }
        }
    }

    /// Sign out of both identity sources.
    ///
    /// The provider logout is attempted first, only if an account is active.
    /// Its failure is logged and otherwise ignored; the local session is
    /// always cleared. The provider session may therefore stay alive.
    pub async fn logout(&self) {
        let state = self.provider.auth_state();
        if let Some(account) = state.active_account()
            && let Err(err) = self
                .provider
                .logout_popup(account, POST_LOGOUT_REDIRECT)
                .await
        {
            tracing::error!(error = %err, "External sign-out failed");
        }

        *self.local.write().await = None;
        clear_sentry_user();
        add_breadcrumb("auth", "Signed out", None);
    }
}
