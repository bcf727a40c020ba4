pub mod auth_errors;
pub mod auth_model;
pub mod auth_service;
pub mod auth_traits;

pub use auth_errors::AuthError;
pub use auth_model::{Principal, SessionState};
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, IdentityProviderTrait};
