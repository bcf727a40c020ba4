use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("Donation of {amount} is below the campaign minimum of {minimum}")]
    BelowMinimum { minimum: Decimal, amount: Decimal },

    #[error("Donation amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),
}
