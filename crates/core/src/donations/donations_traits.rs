use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::auth::Principal;
use crate::campaigns::{Campaign, InsertResult};
use crate::donations::donations_model::{Donation, NewDonation};
use crate::errors::Result;

/// Trait for the external donation store (the REST backend).
#[async_trait]
pub trait DonationStoreTrait: Send + Sync {
    async fn list_donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>>;
    async fn list_donations_for_donor(&self, email: &str) -> Result<Vec<Donation>>;
    async fn create_donation(&self, new_donation: NewDonation) -> Result<InsertResult>;
}

/// Trait for donation operations as exposed to the view layer.
#[async_trait]
pub trait DonationServiceTrait: Send + Sync {
    /// Validates the amount against the campaign minimum, denormalizes the
    /// principal's profile, and posts the donation. Returns the local echo
    /// of the created record.
    async fn donate(
        &self,
        principal: &Principal,
        campaign: &Campaign,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Donation>;

    async fn get_donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>>;
    async fn get_donations_for_donor(&self, email: &str) -> Result<Vec<Donation>>;
}
