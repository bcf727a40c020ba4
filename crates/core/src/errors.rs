//! Core error types for the HopeFundr application.
//!
//! This module defines the root error taxonomy. Transport-specific errors
//! (from reqwest, JSON decoding, etc.) are converted into `ApiError` by the
//! backend client and wrapped here.

use thiserror::Error;

use crate::api::ApiError;
use crate::auth::AuthError;
use crate::campaigns::CampaignError;
use crate::donations::DonationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crowdfunding core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Campaign error: {0}")]
    Campaign(#[from] CampaignError),

    #[error("Donation error: {0}")]
    Donation(#[from] DonationError),

    #[error("Backend request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing or empty")]
    MissingField(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
