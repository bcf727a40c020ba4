use async_trait::async_trait;

use crate::auth::auth_model::{Principal, SessionState};
use crate::errors::Result;

/// Opaque external identity provider. Sign-in itself (passwords, OAuth
/// popups, email verification) happens outside this crate; the core only
/// observes the current user and can request a sign-out.
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    async fn current_user(&self) -> Result<Option<Principal>>;
    async fn sign_out(&self) -> Result<()>;
}

/// Trait for session lifecycle operations.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Resolves the `Unknown` startup state into SignedIn or SignedOut.
    async fn resolve_session(&self) -> Result<SessionState>;

    /// Signs out with the provider and returns the new session snapshot.
    async fn sign_out(&self) -> Result<SessionState>;
}
