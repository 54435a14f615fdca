//! Admin identity boundary.
//!
//! Authentication is delegated wholesale to an external identity provider;
//! this module only tracks whether the client is signed in, forwards
//! login/signup/logout requests to the provider, and reacts to its events.
//! No tokens, no session persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use chantier_core::ContentResult;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// Events emitted by the identity provider, delivered over an mpsc channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Login { user: AuthUser },
    Signup { user: AuthUser },
    Logout,
    Error(String),
}

/// Authentication state as the client renders it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Provider not initialized yet; render a neutral placeholder.
    #[default]
    Unknown,
    SignedOut,
    SignedIn { user: AuthUser },
}

/// Handle to the external identity provider's widget.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn open_login(&self) -> ContentResult<()>;
    async fn open_signup(&self) -> ContentResult<()>;
    async fn logout(&self) -> ContentResult<()>;
}

/// Tracks provider events and decides when to navigate to the admin panel.
#[derive(Debug, Clone)]
pub struct AdminGate {
    state: AuthState,
    admin_url: String,
    last_error: Option<String>,
}

impl AdminGate {
    pub fn new(admin_url: impl Into<String>) -> Self {
        Self {
            state: AuthState::Unknown,
            admin_url: admin_url.into(),
            last_error: None,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::SignedIn { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Seed the state from the provider's initial session check.
    pub fn initialize(&mut self, current_user: Option<AuthUser>) {
        self.state = match current_user {
            Some(user) => AuthState::SignedIn { user },
            None => AuthState::SignedOut,
        };
    }

    /// Apply one provider event. Returns the admin panel URL when the event
    /// means the client should navigate there (login or signup).
    pub fn apply(&mut self, event: AuthEvent) -> Option<&str> {
        match event {
            AuthEvent::Login { user } | AuthEvent::Signup { user } => {
                self.last_error = None;
                self.state = AuthState::SignedIn { user };
                Some(self.admin_url.as_str())
            }
            AuthEvent::Logout => {
                self.state = AuthState::SignedOut;
                None
            }
            AuthEvent::Error(message) => {
                tracing::warn!(error = %message, "identity provider error");
                self.last_error = Some(message);
                None
            }
        }
    }
}
