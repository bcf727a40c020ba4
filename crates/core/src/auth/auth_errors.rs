use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Identity provider error: {0}")]
    Provider(String),
}
