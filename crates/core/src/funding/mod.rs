pub mod aggregator;
pub mod funding_model;

pub use aggregator::{
    aggregate_for_campaign, compute_days_remaining, compute_percent_funded, compute_raised,
    filter_donations, sort_donations,
};
pub use funding_model::FundingFacts;
