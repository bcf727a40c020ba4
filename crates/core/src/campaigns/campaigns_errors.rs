use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Campaign '{0}' not found")]
    NotFound(String),

    #[error("User '{user}' does not own campaign '{campaign_id}'")]
    NotOwner { user: String, campaign_id: String },
}
