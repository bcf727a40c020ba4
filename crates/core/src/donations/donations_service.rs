use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::auth::Principal;
use crate::campaigns::Campaign;
use crate::donations::donations_errors::DonationError;
use crate::donations::donations_model::{Donation, NewDonation};
use crate::donations::donations_traits::{DonationServiceTrait, DonationStoreTrait};
use crate::errors::Result;

pub struct DonationService {
    store: Arc<dyn DonationStoreTrait>,
}

impl DonationService {
    pub fn new(store: Arc<dyn DonationStoreTrait>) -> Self {
        DonationService { store }
    }
}

#[async_trait]
impl DonationServiceTrait for DonationService {
    async fn donate(
        &self,
        principal: &Principal,
        campaign: &Campaign,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Donation> {
        if amount <= Decimal::ZERO {
            return Err(DonationError::NonPositiveAmount(amount).into());
        }
        // The minimum-donation rule is enforced here, before submission,
        // matching the donate dialog. The backend does not re-check it.
        let minimum = campaign.minimum_donation();
        if amount < minimum {
            return Err(DonationError::BelowMinimum { minimum, amount }.into());
        }

        let new_donation = NewDonation {
            campaign_id: campaign.id.clone(),
            campaign_title: campaign.title.clone(),
            donor_name: principal.name().to_string(),
            donor_email: principal.email.clone(),
            amount,
            date: now,
        };
        self.store.create_donation(new_donation.clone()).await?;
        debug!(
            "Recorded donation of {} to campaign {} by {}",
            amount, campaign.id, principal.email
        );
        Ok(Donation::from(new_donation))
    }

    async fn get_donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>> {
        self.store.list_donations_for_campaign(campaign_id).await
    }

    async fn get_donations_for_donor(&self, email: &str) -> Result<Vec<Donation>> {
        self.store.list_donations_for_donor(email).await
    }
}
