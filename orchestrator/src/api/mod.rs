//! Remote marketing API surface.
//!
//! The `MarketingApi` trait abstracts every remote resource call so the
//! orchestration logic can be exercised against a mock without network
//! access. `ApiClient` is the production reqwest implementation.

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::Result;
use types::{
    BatchRequest, BatchStatus, Campaign, CampaignCreate, List, ListCreate, Member, SendChecklist,
    Template, TemplateCreate,
};

pub use client::ApiClient;

/// Calls against the remote marketing API's resource model.
///
/// The remote system is a fixed collaborator; every method is a single
/// network round-trip with no local state.
#[async_trait]
pub trait MarketingApi: Send + Sync {
    // Lists
    async fn create_list(&self, list: &ListCreate) -> Result<List>;
    async fn delete_list(&self, list_id: &str) -> Result<()>;
    async fn get_list(&self, list_id: &str) -> Result<List>;
    async fn get_lists(&self) -> Result<Vec<List>>;
    async fn get_list_members(&self, list_id: &str) -> Result<Vec<Member>>;

    // Templates
    async fn create_template(&self, template: &TemplateCreate) -> Result<Template>;
    async fn delete_template(&self, template_id: u64) -> Result<()>;
    async fn get_templates(&self) -> Result<Vec<Template>>;

    // Campaigns
    async fn create_campaign(&self, campaign: &CampaignCreate) -> Result<Campaign>;
    async fn delete_campaign(&self, campaign_id: &str) -> Result<()>;
    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign>;
    async fn get_campaigns(&self) -> Result<Vec<Campaign>>;
    async fn get_campaigns_for_list(&self, list_id: &str) -> Result<Vec<Campaign>>;
    async fn send_campaign(&self, campaign_id: &str) -> Result<()>;
    async fn send_checklist(&self, campaign_id: &str) -> Result<SendChecklist>;

    // Batches
    async fn submit_batch(&self, batch: &BatchRequest) -> Result<BatchStatus>;
    async fn get_batch_status(&self, batch_id: &str) -> Result<BatchStatus>;
}
