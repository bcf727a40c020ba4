use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::RECENT_WINDOW_DAYS;
use crate::utils::decimal_serde::lenient_decimal;
use crate::utils::time_utils::{flexible_datetime, rolling_window_start};

/// Donation record as served by the REST backend. Immutable once created.
///
/// Every field except the campaign reference is deserialized defensively: a
/// donation list must never fail wholesale because one record carries a
/// malformed amount or date. The donor name and email are denormalized
/// copies of the donor's profile at donation time. A donation created
/// locally (echoed back after a POST) has no id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub campaign_title: String,
    #[serde(rename = "name", default)]
    pub donor_name: Option<String>,
    #[serde(rename = "email", default)]
    pub donor_email: String,
    /// `None` when the stored value was not numeric.
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(
        rename = "date",
        default,
        deserialize_with = "flexible_datetime::deserialize"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Donation {
    /// Amount counted toward a campaign's raised total. Unparseable and
    /// negative amounts are excluded rather than erroring.
    pub fn valid_amount(&self) -> Option<Decimal> {
        self.amount.filter(|a| !a.is_sign_negative())
    }

    /// Shown as "Anonymous" in the UI when absent.
    pub fn donor_display_name(&self) -> &str {
        self.donor_name.as_deref().unwrap_or("Anonymous")
    }

    pub(crate) fn sort_amount(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Undated donations order as the epoch, i.e. oldest.
    pub(crate) fn sort_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Payload for creating a donation, mirroring what the donate dialog posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub campaign_id: String,
    pub campaign_title: String,
    #[serde(rename = "name")]
    pub donor_name: String,
    #[serde(rename = "email")]
    pub donor_email: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

impl From<NewDonation> for Donation {
    fn from(new_donation: NewDonation) -> Self {
        Donation {
            id: None,
            campaign_id: new_donation.campaign_id,
            campaign_title: new_donation.campaign_title,
            donor_name: Some(new_donation.donor_name),
            donor_email: new_donation.donor_email,
            amount: Some(new_donation.amount),
            timestamp: Some(new_donation.date),
        }
    }
}

/// Sort keys offered by the donor dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonationSort {
    #[default]
    MostRecent,
    Oldest,
    HighestAmount,
}

/// Display filter for donation lists. Predicates compose with logical AND;
/// the text search is a case-insensitive substring match across the campaign
/// title and the donor name.
#[derive(Debug, Clone, Default)]
pub struct DonationFilter {
    pub search_term: Option<String>,
    /// Keeps donations strictly newer than `now - within_days`.
    pub within_days: Option<i64>,
}

impl DonationFilter {
    /// The dashboard's "Last 30 Days" preset.
    pub fn last_30_days() -> Self {
        DonationFilter {
            search_term: None,
            within_days: Some(RECENT_WINDOW_DAYS),
        }
    }

    pub fn matches(&self, donation: &Donation, now: DateTime<Utc>) -> bool {
        if let Some(term) = &self.search_term {
            let term = term.to_lowercase();
            let title_hit = donation.campaign_title.to_lowercase().contains(&term);
            let name_hit = donation
                .donor_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&term));
            if !title_hit && !name_hit {
                return false;
            }
        }
        if let Some(days) = self.within_days {
            let cutoff = rolling_window_start(now, days);
            match donation.timestamp {
                Some(timestamp) if timestamp > cutoff => {}
                _ => return false,
            }
        }
        true
    }
}
