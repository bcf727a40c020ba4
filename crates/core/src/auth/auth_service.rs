use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::auth::auth_model::SessionState;
use crate::auth::auth_traits::{AuthServiceTrait, IdentityProviderTrait};
use crate::errors::Result;

/// Produces immutable session snapshots from the external identity provider.
/// The application starts in `SessionState::Unknown` and replaces the whole
/// value on every transition.
pub struct AuthService {
    provider: Arc<dyn IdentityProviderTrait>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProviderTrait>) -> Self {
        AuthService { provider }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn resolve_session(&self) -> Result<SessionState> {
        let state = match self.provider.current_user().await? {
            Some(principal) => {
                debug!("Session resolved for {}", principal.email);
                SessionState::SignedIn(principal)
            }
            None => SessionState::SignedOut,
        };
        Ok(state)
    }

    async fn sign_out(&self) -> Result<SessionState> {
        self.provider.sign_out().await?;
        Ok(SessionState::SignedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::auth_model::Principal;

    struct MockProvider {
        user: Option<Principal>,
    }

    #[async_trait]
    impl IdentityProviderTrait for MockProvider {
        async fn current_user(&self) -> Result<Option<Principal>> {
            Ok(self.user.clone())
        }

        async fn sign_out(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resolve_session_signed_in() {
        let service = AuthService::new(Arc::new(MockProvider {
            user: Some(Principal {
                uid: "u1".to_string(),
                display_name: None,
                email: "donor@example.com".to_string(),
            }),
        }));
        let state = service.resolve_session().await.unwrap();
        assert_eq!(state.principal().unwrap().email, "donor@example.com");
    }

    #[tokio::test]
    async fn test_sign_out_yields_signed_out_snapshot() {
        let service = AuthService::new(Arc::new(MockProvider { user: None }));
        assert_eq!(service.sign_out().await.unwrap(), SessionState::SignedOut);
        assert_eq!(
            service.resolve_session().await.unwrap(),
            SessionState::SignedOut
        );
    }
}
