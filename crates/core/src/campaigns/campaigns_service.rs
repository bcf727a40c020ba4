use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::auth::Principal;
use crate::campaigns::campaigns_errors::CampaignError;
use crate::campaigns::campaigns_model::{Campaign, CampaignUpdate, InsertResult, NewCampaign};
use crate::campaigns::campaigns_traits::{CampaignServiceTrait, CampaignStoreTrait};
use crate::errors::{Result, ValidationError};

pub struct CampaignService {
    store: Arc<dyn CampaignStoreTrait>,
}

impl CampaignService {
    pub fn new(store: Arc<dyn CampaignStoreTrait>) -> Self {
        CampaignService { store }
    }

    /// Required-field and amount checks matching the create/edit forms.
    fn validate(new_campaign: &NewCampaign) -> std::result::Result<(), ValidationError> {
        if new_campaign.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()));
        }
        if new_campaign.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()));
        }
        if new_campaign.goal <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(
                "goal must be greater than 0".to_string(),
            ));
        }
        if new_campaign.min_donation_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(
                "minimum donation amount must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads the campaign and enforces that the principal owns it.
    async fn load_owned(&self, principal: &Principal, id: &str) -> Result<Campaign> {
        let campaign = self.store.get_campaign(id).await?;
        if !campaign.is_owned_by(&principal.email) {
            warn!(
                "Blocked {} from mutating campaign {} owned by {}",
                principal.email, id, campaign.organizer_email
            );
            return Err(CampaignError::NotOwner {
                user: principal.email.clone(),
                campaign_id: id.to_string(),
            }
            .into());
        }
        Ok(campaign)
    }
}

#[async_trait]
impl CampaignServiceTrait for CampaignService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.store.list_campaigns().await
    }

    async fn get_campaign(&self, id: &str) -> Result<Campaign> {
        self.store.get_campaign(id).await
    }

    async fn get_campaigns_for_organizer(&self, email: &str) -> Result<Vec<Campaign>> {
        self.store.list_campaigns_by_organizer(email).await
    }

    async fn create_campaign(
        &self,
        principal: &Principal,
        mut new_campaign: NewCampaign,
    ) -> Result<InsertResult> {
        Self::validate(&new_campaign)?;
        new_campaign.organizer_name = principal.name().to_string();
        new_campaign.organizer_email = principal.email.clone();
        debug!(
            "Creating campaign '{}' for {}",
            new_campaign.title, principal.email
        );
        self.store.create_campaign(new_campaign).await
    }

    async fn update_campaign(
        &self,
        principal: &Principal,
        id: &str,
        mut update: CampaignUpdate,
    ) -> Result<bool> {
        Self::validate(&update)?;
        self.load_owned(principal, id).await?;
        update.organizer_name = principal.name().to_string();
        update.organizer_email = principal.email.clone();
        let result = self.store.update_campaign(id, update).await?;
        Ok(result.modified_count > 0)
    }

    async fn delete_campaign(&self, principal: &Principal, id: &str) -> Result<bool> {
        self.load_owned(principal, id).await?;
        let result = self.store.delete_campaign(id).await?;
        debug!("Deleted campaign {} ({} record)", id, result.deleted_count);
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaigns::campaigns_model::{CampaignCategory, DeleteResult, UpdateResult};
    use crate::errors::Error;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    struct MockCampaignStore {
        campaigns: RwLock<Vec<Campaign>>,
        deleted: RwLock<Vec<String>>,
    }

    impl MockCampaignStore {
        fn with(campaigns: Vec<Campaign>) -> Self {
            Self {
                campaigns: RwLock::new(campaigns),
                deleted: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CampaignStoreTrait for MockCampaignStore {
        async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
            Ok(self.campaigns.read().unwrap().clone())
        }

        async fn get_campaign(&self, id: &str) -> Result<Campaign> {
            self.campaigns
                .read()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| CampaignError::NotFound(id.to_string()).into())
        }

        async fn list_campaigns_by_organizer(&self, email: &str) -> Result<Vec<Campaign>> {
            Ok(self
                .campaigns
                .read()
                .unwrap()
                .iter()
                .filter(|c| c.is_owned_by(email))
                .cloned()
                .collect())
        }

        async fn create_campaign(&self, _new_campaign: NewCampaign) -> Result<InsertResult> {
            Ok(InsertResult {
                inserted_id: "new-id".to_string(),
            })
        }

        async fn update_campaign(&self, _id: &str, _update: CampaignUpdate) -> Result<UpdateResult> {
            Ok(UpdateResult { modified_count: 1 })
        }

        async fn delete_campaign(&self, id: &str) -> Result<DeleteResult> {
            self.deleted.write().unwrap().push(id.to_string());
            Ok(DeleteResult { deleted_count: 1 })
        }
    }

    fn sample_campaign(id: &str, organizer_email: &str) -> Campaign {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": "Community garden",
            "description": "Planting season is coming.",
            "type": "creative ideas",
            "goal": 1000,
            "minDonationAmount": 5,
            "deadline": "2026-12-01",
            "name": "Organizer",
            "email": organizer_email,
        }))
        .unwrap()
    }

    fn principal(email: &str) -> Principal {
        Principal {
            uid: "uid-1".to_string(),
            display_name: Some("Test User".to_string()),
            email: email.to_string(),
        }
    }

    fn draft() -> NewCampaign {
        NewCampaign {
            title: "Community garden".to_string(),
            description: "Planting season is coming.".to_string(),
            category: CampaignCategory::CreativeIdeas,
            goal: dec!(1000),
            min_donation_amount: dec!(5),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            image: None,
            organizer_name: String::new(),
            organizer_email: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_denormalizes_principal_profile() {
        let store = Arc::new(MockCampaignStore::with(vec![]));
        let service = CampaignService::new(store);
        let result = service
            .create_campaign(&principal("amina@example.com"), draft())
            .await
            .unwrap();
        assert_eq!(result.inserted_id, "new-id");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let service = CampaignService::new(Arc::new(MockCampaignStore::with(vec![])));
        let mut bad = draft();
        bad.title = "   ".to_string();
        let err = service
            .create_campaign(&principal("amina@example.com"), bad)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_goal() {
        let service = CampaignService::new(Arc::new(MockCampaignStore::with(vec![])));
        let mut bad = draft();
        bad.goal = Decimal::ZERO;
        let err = service
            .create_campaign(&principal("amina@example.com"), bad)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_requires_ownership() {
        let store = Arc::new(MockCampaignStore::with(vec![sample_campaign(
            "c1",
            "owner@example.com",
        )]));
        let service = CampaignService::new(store.clone());

        let err = service
            .delete_campaign(&principal("intruder@example.com"), "c1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Campaign(CampaignError::NotOwner { .. })
        ));
        assert!(store.deleted.read().unwrap().is_empty());

        let deleted = service
            .delete_campaign(&principal("owner@example.com"), "c1")
            .await
            .unwrap();
        assert!(deleted);
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let store = Arc::new(MockCampaignStore::with(vec![sample_campaign(
            "c1",
            "owner@example.com",
        )]));
        let service = CampaignService::new(store);

        let err = service
            .update_campaign(&principal("intruder@example.com"), "c1", draft())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Campaign(CampaignError::NotOwner { .. })
        ));

        let modified = service
            .update_campaign(&principal("owner@example.com"), "c1", draft())
            .await
            .unwrap();
        assert!(modified);
    }

    #[tokio::test]
    async fn test_get_campaign_not_found() {
        let service = CampaignService::new(Arc::new(MockCampaignStore::with(vec![])));
        let err = service.get_campaign("missing").await.unwrap_err();
        assert!(matches!(err, Error::Campaign(CampaignError::NotFound(_))));
    }
}
