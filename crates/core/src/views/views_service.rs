use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::warn;
use std::sync::Arc;

use crate::campaigns::CampaignStoreTrait;
use crate::constants::TOP_SUPPORTERS_LIMIT;
use crate::donations::{Donation, DonationFilter, DonationSort, DonationStoreTrait};
use crate::errors::Result;
use crate::funding::{aggregate_for_campaign, compute_raised, filter_donations, sort_donations};
use crate::views::views_model::{CampaignDetail, DonorDashboard, OwnedCampaignSummary};

/// Trait for view composition: fetch, degrade partial failures, aggregate.
#[async_trait]
pub trait ViewServiceTrait: Send + Sync {
    async fn campaign_detail(&self, id: &str, now: DateTime<Utc>) -> Result<CampaignDetail>;
    async fn my_campaigns(
        &self,
        organizer_email: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<OwnedCampaignSummary>>;
    async fn donor_dashboard(
        &self,
        donor_email: &str,
        filter: &DonationFilter,
        sort: DonationSort,
        now: DateTime<Utc>,
    ) -> Result<DonorDashboard>;
}

pub struct ViewService {
    campaign_store: Arc<dyn CampaignStoreTrait>,
    donation_store: Arc<dyn DonationStoreTrait>,
}

impl ViewService {
    pub fn new(
        campaign_store: Arc<dyn CampaignStoreTrait>,
        donation_store: Arc<dyn DonationStoreTrait>,
    ) -> Self {
        ViewService {
            campaign_store,
            donation_store,
        }
    }

    /// A failed donation fetch degrades to an empty list: one flaky request
    /// must not take down a view that can still show the campaign itself.
    async fn donations_or_empty(&self, campaign_id: &str) -> Vec<Donation> {
        match self
            .donation_store
            .list_donations_for_campaign(campaign_id)
            .await
        {
            Ok(donations) => donations,
            Err(err) => {
                warn!(
                    "Donation fetch for campaign {} failed, showing zero donations: {}",
                    campaign_id, err
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ViewServiceTrait for ViewService {
    async fn campaign_detail(&self, id: &str, now: DateTime<Utc>) -> Result<CampaignDetail> {
        let (campaign_result, donations) = futures::join!(
            self.campaign_store.get_campaign(id),
            self.donations_or_empty(id)
        );
        // A missing campaign is a real error; the view renders "not found".
        let campaign = campaign_result?;

        let facts = aggregate_for_campaign(&campaign, donations, DonationSort::MostRecent, now);
        let (preview, truncated) = campaign.description_preview();
        let description_preview = preview.to_string();
        let top_supporters = facts.top_supporters(TOP_SUPPORTERS_LIMIT).to_vec();

        Ok(CampaignDetail {
            facts,
            description_preview,
            description_truncated: truncated,
            top_supporters,
            campaign,
        })
    }

    async fn my_campaigns(
        &self,
        organizer_email: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<OwnedCampaignSummary>> {
        let campaigns = self
            .campaign_store
            .list_campaigns_by_organizer(organizer_email)
            .await?;

        // One donation fetch per campaign, in parallel; each failure degrades
        // to an empty list instead of aborting the whole grid.
        let donation_lists =
            join_all(campaigns.iter().map(|c| self.donations_or_empty(&c.id))).await;

        Ok(campaigns
            .into_iter()
            .zip(donation_lists)
            .map(|(campaign, donations)| {
                let facts =
                    aggregate_for_campaign(&campaign, donations, DonationSort::MostRecent, now);
                OwnedCampaignSummary { campaign, facts }
            })
            .collect())
    }

    async fn donor_dashboard(
        &self,
        donor_email: &str,
        filter: &DonationFilter,
        sort: DonationSort,
        now: DateTime<Utc>,
    ) -> Result<DonorDashboard> {
        let donations = self
            .donation_store
            .list_donations_for_donor(donor_email)
            .await?;

        // Totals always cover the full history; filters only shape the list.
        let total_donated = compute_raised(&donations);
        let donation_count = donations.len();
        let displayed = sort_donations(filter_donations(donations, filter, now), sort);

        Ok(DonorDashboard {
            total_donated,
            donation_count,
            donations: displayed,
        })
    }
}
