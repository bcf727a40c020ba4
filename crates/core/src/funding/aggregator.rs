//! Funding aggregation: the pure computation behind the campaign detail,
//! campaign list, and donor dashboard views.
//!
//! Every function here is a total, side-effect-free transformation of its
//! inputs. The current time is always an explicit parameter, never read from
//! a clock, and malformed records degrade (skipped amounts, clamped
//! percentages and day counts) instead of erroring, because this code sits
//! directly downstream of a network boundary it does not control.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::campaigns::Campaign;
use crate::constants::MILLIS_PER_DAY;
use crate::donations::{Donation, DonationFilter, DonationSort};
use crate::funding::funding_model::FundingFacts;

/// Sum of donation amounts. Entries whose amount is unparseable or negative
/// are excluded; an empty list sums to zero.
pub fn compute_raised(donations: &[Donation]) -> Decimal {
    donations.iter().filter_map(Donation::valid_amount).sum()
}

/// Percentage of the goal covered by `raised`, clamped to [0, 100] and left
/// unrounded. A zero or negative goal yields 0 rather than dividing.
pub fn compute_percent_funded(raised: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (raised * Decimal::ONE_HUNDRED / goal).min(Decimal::ONE_HUNDRED)
}

/// Whole days from `now` until `deadline`, rounded up over milliseconds and
/// clamped at zero for deadlines in the past.
pub fn compute_days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let remaining_millis = (deadline - now).num_milliseconds().max(0);
    (remaining_millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Stable sort by the caller's chosen key. Ties keep their input order, so
/// repeated calls on the same input are deterministic.
pub fn sort_donations(mut donations: Vec<Donation>, key: DonationSort) -> Vec<Donation> {
    match key {
        DonationSort::MostRecent => {
            donations.sort_by(|a, b| b.sort_timestamp().cmp(&a.sort_timestamp()))
        }
        DonationSort::Oldest => {
            donations.sort_by(|a, b| a.sort_timestamp().cmp(&b.sort_timestamp()))
        }
        DonationSort::HighestAmount => {
            donations.sort_by(|a, b| b.sort_amount().cmp(&a.sort_amount()))
        }
    }
    donations
}

/// Retains the donations matching every predicate in `filter`.
pub fn filter_donations(
    donations: Vec<Donation>,
    filter: &DonationFilter,
    now: DateTime<Utc>,
) -> Vec<Donation> {
    donations
        .into_iter()
        .filter(|donation| filter.matches(donation, now))
        .collect()
}

/// Full derived-facts structure for one campaign. Used directly by the
/// detail view and looped per campaign by the owner's list view. An absent
/// donation list is the caller's responsibility to map to an empty vector;
/// an absent or unparseable deadline clamps to zero days remaining.
pub fn aggregate_for_campaign(
    campaign: &Campaign,
    donations: Vec<Donation>,
    sort: DonationSort,
    now: DateTime<Utc>,
) -> FundingFacts {
    let raised_amount = compute_raised(&donations);
    let percent_funded = compute_percent_funded(raised_amount, campaign.goal_amount());
    let days_remaining = campaign
        .deadline
        .map(|deadline| compute_days_remaining(deadline, now))
        .unwrap_or(0);
    let supporter_count = donations.len();

    FundingFacts {
        raised_amount,
        percent_funded,
        days_remaining,
        supporter_count,
        sorted_donations: sort_donations(donations, sort),
    }
}
