use async_trait::async_trait;

use crate::auth::Principal;
use crate::campaigns::campaigns_model::{
    Campaign, CampaignUpdate, DeleteResult, InsertResult, NewCampaign, UpdateResult,
};
use crate::errors::Result;

/// Trait for the external campaign store (the REST backend).
#[async_trait]
pub trait CampaignStoreTrait: Send + Sync {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>>;
    async fn get_campaign(&self, id: &str) -> Result<Campaign>;
    async fn list_campaigns_by_organizer(&self, email: &str) -> Result<Vec<Campaign>>;
    async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<InsertResult>;
    async fn update_campaign(&self, id: &str, update: CampaignUpdate) -> Result<UpdateResult>;
    async fn delete_campaign(&self, id: &str) -> Result<DeleteResult>;
}

/// Trait for campaign operations as exposed to the view layer.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>>;
    async fn get_campaign(&self, id: &str) -> Result<Campaign>;
    async fn get_campaigns_for_organizer(&self, email: &str) -> Result<Vec<Campaign>>;

    /// Creates a campaign on behalf of the principal, denormalizing their
    /// profile onto the record.
    async fn create_campaign(
        &self,
        principal: &Principal,
        new_campaign: NewCampaign,
    ) -> Result<InsertResult>;

    /// Owner-only edit; returns whether the backend modified a record.
    async fn update_campaign(
        &self,
        principal: &Principal,
        id: &str,
        update: CampaignUpdate,
    ) -> Result<bool>;

    /// Owner-only delete; returns whether the backend removed a record.
    async fn delete_campaign(&self, principal: &Principal, id: &str) -> Result<bool>;
}
