use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DESCRIPTION_PREVIEW_LENGTH;
use crate::utils::decimal_serde::lenient_decimal;
use crate::utils::time_utils::flexible_datetime;

/// Campaign record as served by the REST backend.
///
/// Numeric and date fields are deserialized leniently: the backend stores
/// whatever the browser submitted, so `goal` may be a string, the deadline a
/// bare date, and so on. The `goal` field itself must be present; a campaign
/// without one is a contract violation and fails deserialization. Organizer
/// name and email are denormalized copies of the creator's profile, kept
/// as-is rather than normalized into a user reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub category: CampaignCategory,
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub goal: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub min_donation_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "flexible_datetime::deserialize")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "name", default)]
    pub organizer_name: String,
    #[serde(rename = "email", default)]
    pub organizer_email: String,
}

impl Campaign {
    /// Goal as a plain amount; an unparseable goal behaves as zero, which the
    /// aggregator then treats as "0% funded".
    pub fn goal_amount(&self) -> Decimal {
        self.goal.unwrap_or(Decimal::ZERO)
    }

    pub fn minimum_donation(&self) -> Decimal {
        self.min_donation_amount.unwrap_or(Decimal::ZERO)
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.organizer_email.eq_ignore_ascii_case(email)
    }

    /// Description preview for the detail view, truncated at a character
    /// threshold. Returns the preview slice and whether truncation applied.
    pub fn description_preview(&self) -> (&str, bool) {
        match self
            .description
            .char_indices()
            .nth(DESCRIPTION_PREVIEW_LENGTH)
        {
            Some((byte_index, _)) => (&self.description[..byte_index], true),
            None => (self.description.as_str(), false),
        }
    }
}

/// Campaign category, matching the wire values of the create/edit forms.
/// Unrecognized values from the backend collapse to `Other` rather than
/// failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignCategory {
    PersonalIssue,
    Startup,
    Business,
    CreativeIdeas,
    #[default]
    Other,
}

impl CampaignCategory {
    /// Wire value used by the forms and stored by the backend.
    pub fn as_wire(&self) -> &'static str {
        match self {
            CampaignCategory::PersonalIssue => "personal issue",
            CampaignCategory::Startup => "startup",
            CampaignCategory::Business => "business",
            CampaignCategory::CreativeIdeas => "creative ideas",
            CampaignCategory::Other => "other",
        }
    }
}

impl From<String> for CampaignCategory {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "personal issue" => CampaignCategory::PersonalIssue,
            "startup" => CampaignCategory::Startup,
            "business" => CampaignCategory::Business,
            "creative ideas" => CampaignCategory::CreativeIdeas,
            _ => CampaignCategory::Other,
        }
    }
}

impl From<CampaignCategory> for String {
    fn from(category: CampaignCategory) -> Self {
        category.as_wire().to_string()
    }
}

impl fmt::Display for CampaignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CampaignCategory::PersonalIssue => "Personal Issue",
            CampaignCategory::Startup => "Startup",
            CampaignCategory::Business => "Business",
            CampaignCategory::CreativeIdeas => "Creative Ideas",
            CampaignCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Payload for creating a campaign. Organizer name and email are filled in
/// by the service from the signed-in principal, never by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: CampaignCategory,
    pub goal: Decimal,
    pub min_donation_amount: Decimal,
    /// Submitted as a bare date, matching the form's date input.
    pub deadline: NaiveDate,
    pub image: Option<String>,
    #[serde(rename = "name", default)]
    pub organizer_name: String,
    #[serde(rename = "email", default)]
    pub organizer_email: String,
}

/// Full-document replacement sent on edit; the backend keeps last-write-wins
/// semantics with no versioning.
pub type CampaignUpdate = NewCampaign;

/// Backend acknowledgment for a create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub inserted_id: String,
}

/// Backend acknowledgment for an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    #[serde(default)]
    pub modified_count: u64,
}

/// Backend acknowledgment for a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(default)]
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_campaign_deserializes_backend_payload() {
        let json = r#"{
            "_id": "abc123",
            "title": "Help build a school",
            "description": "A school for the village.",
            "type": "personal issue",
            "goal": "5000",
            "minDonationAmount": 10,
            "deadline": "2026-12-01",
            "image": "https://example.com/school.jpg",
            "name": "Amina Rahman",
            "email": "amina@example.com"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.goal_amount(), dec!(5000));
        assert_eq!(campaign.minimum_donation(), dec!(10));
        assert_eq!(campaign.category, CampaignCategory::PersonalIssue);
        assert!(campaign.deadline.is_some());
    }

    #[test]
    fn test_missing_goal_is_a_contract_violation() {
        let json = r#"{ "_id": "abc123", "title": "No goal" }"#;
        assert!(serde_json::from_str::<Campaign>(json).is_err());
    }

    #[test]
    fn test_garbage_goal_behaves_as_zero() {
        let json = r#"{ "_id": "abc123", "title": "Bad goal", "goal": "lots" }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.goal, None);
        assert_eq!(campaign.goal_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let json = r#"{ "_id": "c1", "title": "T", "type": "medical", "goal": 100 }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.category, CampaignCategory::Other);
    }

    #[test]
    fn test_ownership_is_case_insensitive_on_email() {
        let json = r#"{ "_id": "c1", "title": "T", "goal": 100, "email": "Amina@Example.com" }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert!(campaign.is_owned_by("amina@example.com"));
        assert!(!campaign.is_owned_by("other@example.com"));
    }

    #[test]
    fn test_description_preview_truncates_long_text() {
        let json = r#"{ "_id": "c1", "title": "T", "goal": 100 }"#;
        let mut campaign: Campaign = serde_json::from_str(json).unwrap();
        campaign.description = "x".repeat(250);
        let (preview, truncated) = campaign.description_preview();
        assert_eq!(preview.len(), 200);
        assert!(truncated);

        campaign.description = "short".to_string();
        let (preview, truncated) = campaign.description_preview();
        assert_eq!(preview, "short");
        assert!(!truncated);
    }
}
