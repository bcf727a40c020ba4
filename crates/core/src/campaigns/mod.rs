pub mod campaigns_errors;
pub mod campaigns_model;
pub mod campaigns_service;
pub mod campaigns_traits;

pub use campaigns_errors::CampaignError;
pub use campaigns_model::{
    Campaign, CampaignCategory, CampaignUpdate, DeleteResult, InsertResult, NewCampaign,
    UpdateResult,
};
pub use campaigns_service::CampaignService;
pub use campaigns_traits::{CampaignServiceTrait, CampaignStoreTrait};
