//! Demo login service.
//!
//! Any non-blank email and password are accepted. The profile returned is
//! the directory account with that email, or the first account when none
//! matches. Nothing here is real authentication.

mod error;

pub use error::AuthError;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use auro_core::{Email, HealthPreference, SubscriptionTier, UserId};

/// A known account the login endpoint can hand back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAccount {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub subscription: SubscriptionTier,
    pub preferences: Vec<HealthPreference>,
}

/// A successful login: an opaque token plus the matched profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginSession {
    pub token: String,
    pub user: DirectoryAccount,
}

/// Login against a fixed account directory.
pub struct AuthService<'a> {
    accounts: &'a [DirectoryAccount],
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(accounts: &'a [DirectoryAccount]) -> Self {
        Self { accounts }
    }

    /// Log in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank.
    /// Returns `AuthError::EmptyDirectory` if there is no account to return.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self
            .accounts
            .iter()
            .find(|a| a.email.matches(email))
            .or_else(|| self.accounts.first())
            .ok_or(AuthError::EmptyDirectory)?;

        tracing::info!(user_id = %user.id, "Demo login");
        Ok(LoginSession {
            token: format!("demo-token-{}", Utc::now().timestamp_millis()),
            user: user.clone(),
        })
    }
}
