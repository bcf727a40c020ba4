use rust_decimal::Decimal;
use serde::Serialize;

use crate::campaigns::Campaign;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::donations::Donation;
use crate::funding::FundingFacts;

/// Everything the single-campaign page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetail {
    pub campaign: Campaign,
    pub facts: FundingFacts,
    pub description_preview: String,
    pub description_truncated: bool,
    /// Leading slice of the sorted donation list for the supporters card.
    pub top_supporters: Vec<Donation>,
}

/// One card in the owner's "my campaigns" grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCampaignSummary {
    pub campaign: Campaign,
    pub facts: FundingFacts,
}

/// The donor dashboard: totals over the full donation history, plus the
/// filtered and sorted list currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDashboard {
    /// Sum over the donor's entire history, regardless of active filters.
    pub total_donated: Decimal,
    pub donation_count: usize,
    pub donations: Vec<Donation>,
}

impl DonorDashboard {
    pub fn display_total(&self) -> Decimal {
        self.total_donated.round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}
