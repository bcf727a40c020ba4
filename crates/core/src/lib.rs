//! HopeFundr Core - Domain models, funding aggregation, and view services.
//!
//! This crate contains the client-side business logic for the HopeFundr
//! crowdfunding app. Persistence and server-side rules live in the external
//! REST backend; identity lives in the external provider. This core fetches
//! records across those boundaries, derives the funding facts the views
//! render, and enforces the handful of rules the browser is responsible for
//! (ownership of campaigns, minimum donation amounts).

pub mod api;
pub mod auth;
pub mod campaigns;
pub mod constants;
pub mod donations;
pub mod errors;
pub mod funding;
pub mod utils;
pub mod views;

// Re-export the aggregation surface and the common types around it
pub use funding::*;

pub use campaigns::{Campaign, CampaignCategory};
pub use donations::{Donation, DonationFilter, DonationSort};
pub use views::ViewState;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
