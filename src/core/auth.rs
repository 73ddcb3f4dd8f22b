// src/core/auth.rs
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication backend not configured")]
    NotConfigured,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// A signed-in identity, as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub email: String,
}

/// Identity provider capability. The generator and scorer never depend on any
/// of these calls succeeding; a deployment can swap in a real provider behind
/// this trait without touching password logic.
pub trait AuthProvider: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> Result<User>;
    fn sign_up(&self, email: &str, password: &str) -> Result<User>;
    fn sign_out(&self) -> Result<()>;
    fn current_user(&self) -> Option<User>;

    /// Notify the observer of the current auth state. Called once,
    /// immediately, with whatever user is signed in (if any).
    fn on_auth_state_changed(&self, observer: &mut dyn FnMut(Option<&User>));
}

/// The shipped provider: no backend is wired up, so every mutating call fails
/// with the same fixed error and no user is ever signed in.
pub struct StubAuthProvider;

impl StubAuthProvider {
    pub fn new() -> Self {
        StubAuthProvider
    }
}

impl Default for StubAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for StubAuthProvider {
    fn sign_in(&self, email: &str, _password: &str) -> Result<User> {
        log::warn!("Sign-in attempted for {} with no auth backend configured", email);
        Err(AuthError::NotConfigured)
    }

    fn sign_up(&self, email: &str, _password: &str) -> Result<User> {
        log::warn!("Sign-up attempted for {} with no auth backend configured", email);
        Err(AuthError::NotConfigured)
    }

    fn sign_out(&self) -> Result<()> {
        Err(AuthError::NotConfigured)
    }

    fn current_user(&self) -> Option<User> {
        None
    }

    fn on_auth_state_changed(&self, observer: &mut dyn FnMut(Option<&User>)) {
        observer(None);
    }
}
