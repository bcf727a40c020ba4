pub mod view_state;
pub mod views_model;
pub mod views_service;

pub use view_state::ViewState;
pub use views_model::{CampaignDetail, DonorDashboard, OwnedCampaignSummary};
pub use views_service::{ViewService, ViewServiceTrait};
