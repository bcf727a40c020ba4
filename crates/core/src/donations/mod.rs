pub mod donations_errors;
pub mod donations_model;
pub mod donations_service;
pub mod donations_traits;

pub use donations_errors::DonationError;
pub use donations_model::{Donation, DonationFilter, DonationSort, NewDonation};
pub use donations_service::DonationService;
pub use donations_traits::{DonationServiceTrait, DonationStoreTrait};
