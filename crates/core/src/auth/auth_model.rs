use serde::{Deserialize, Serialize};

use crate::auth::auth_errors::AuthError;

/// Immutable snapshot of the signed-in user, taken from the external
/// identity provider. Campaign and donation records denormalize the name and
/// email from this value at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: String,
}

impl Principal {
    /// Name shown on records created by this user, falling back to the email
    /// when the provider has no display name.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Session state as observed by the view layer.
///
/// `Unknown` covers the window before the identity provider has reported
/// anything (the original UI renders a spinner there and guards protected
/// routes until the state resolves). Transitions always produce a new value;
/// there is no in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(Principal),
}

impl SessionState {
    /// True once the identity provider has reported either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::SignedIn(principal) => Some(principal),
            _ => None,
        }
    }

    /// Principal for flows behind the signed-in guard.
    pub fn require_principal(&self) -> Result<&Principal, AuthError> {
        self.principal().ok_or(AuthError::NotSignedIn)
    }
}
