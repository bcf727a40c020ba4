//! HTTP client for the external HopeFundr REST backend.
//!
//! The backend owns persistence and all server-side rules; this client is a
//! thin fetch layer implementing the store traits the services depend on.
//! There is no retry or backoff, matching the application's existing
//! behavior.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::api_errors::ApiError;
use crate::campaigns::{
    Campaign, CampaignError, CampaignStoreTrait, CampaignUpdate, DeleteResult, InsertResult,
    NewCampaign, UpdateResult,
};
use crate::constants::DEFAULT_BACKEND_URL;
use crate::donations::{Donation, DonationStoreTrait, NewDonation};
use crate::errors::Result;

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        BackendClient {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let url = response.url().to_string();
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url).into());
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            }
            .into());
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()).into())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl CampaignStoreTrait for BackendClient {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        self.get_json("/campaigns").await
    }

    async fn get_campaign(&self, id: &str) -> Result<Campaign> {
        let path = format!("/campaigns/{}", urlencoding::encode(id));
        match self.get_json(&path).await {
            Err(crate::errors::Error::Api(ApiError::NotFound(_))) => {
                Err(CampaignError::NotFound(id.to_string()).into())
            }
            other => other,
        }
    }

    async fn list_campaigns_by_organizer(&self, email: &str) -> Result<Vec<Campaign>> {
        let path = format!("/campaigns/email/{}", urlencoding::encode(email));
        self.get_json(&path).await
    }

    async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<InsertResult> {
        self.post_json("/campaigns", &new_campaign).await
    }

    async fn update_campaign(&self, id: &str, update: CampaignUpdate) -> Result<UpdateResult> {
        let path = format!("/campaigns/{}", urlencoding::encode(id));
        self.put_json(&path, &update).await
    }

    async fn delete_campaign(&self, id: &str) -> Result<DeleteResult> {
        let path = format!("/campaigns/{}", urlencoding::encode(id));
        self.delete_json(&path).await
    }
}

#[async_trait]
impl DonationStoreTrait for BackendClient {
    async fn list_donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>> {
        let path = format!("/donations/campaign/{}", urlencoding::encode(campaign_id));
        self.get_json(&path).await
    }

    async fn list_donations_for_donor(&self, email: &str) -> Result<Vec<Donation>> {
        let path = format!("/donations/email/{}", urlencoding::encode(email));
        self.get_json(&path).await
    }

    async fn create_donation(&self, new_donation: NewDonation) -> Result<InsertResult> {
        self.post_json("/donations", &new_donation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = BackendClient::new("https://example.com/");
        assert_eq!(client.url("/campaigns"), "https://example.com/campaigns");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let encoded = format!("/campaigns/email/{}", urlencoding::encode("a+b@example.com"));
        assert_eq!(encoded, "/campaigns/email/a%2Bb%40example.com");
    }
}
