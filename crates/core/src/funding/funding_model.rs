use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::donations::Donation;

/// Derived presentation facts for one campaign. Never persisted: the raised
/// total is recomputed from the donation list on every aggregation, so the
/// displayed state cannot drift from the donations that back it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingFacts {
    /// Sum of valid non-negative donation amounts. Always >= 0.
    pub raised_amount: Decimal,
    /// Unrounded, clamped to [0, 100].
    pub percent_funded: Decimal,
    /// Whole days until the deadline, clamped to >= 0. Zero renders "Ended".
    pub days_remaining: i64,
    /// Count of donation records; repeat donors count once per donation.
    pub supporter_count: usize,
    pub sorted_donations: Vec<Donation>,
}

impl FundingFacts {
    /// Integer percentage for the progress label, floored the way the UI
    /// renders it.
    pub fn display_percent(&self) -> u32 {
        self.percent_funded.floor().to_u32().unwrap_or(0)
    }

    /// Raised total rounded to display precision.
    pub fn display_raised(&self) -> Decimal {
        self.raised_amount.round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// Leading slice of the sorted donation list for the supporters card.
    pub fn top_supporters(&self, limit: usize) -> &[Donation] {
        let end = limit.min(self.sorted_donations.len());
        &self.sorted_donations[..end]
    }

    pub fn has_ended(&self) -> bool {
        self.days_remaining == 0
    }
}
