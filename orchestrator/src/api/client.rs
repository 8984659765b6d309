//! Production API client using reqwest.
//!
//! One shared `reqwest::Client` is constructed once and reused for every
//! call. Authentication is HTTP basic with the API key as password; the
//! endpoint host is derived from the key's datacenter suffix.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::api::types::{
    BatchRequest, BatchStatus, Campaign, CampaignCreate, List, ListCreate, Member, SendChecklist,
    Template, TemplateCreate,
};
use crate::api::MarketingApi;
use crate::config::Config;
use crate::error::{Error, Result};

/// Username half of the basic-auth pair; the remote API only inspects the
/// password (the API key).
const BASIC_AUTH_USER: &str = "anystring";

/// Reqwest-backed implementation of [`MarketingApi`].
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The API key carries its datacenter as a suffix (`<key>-<dc>`); the
    /// suffix selects the endpoint host unless `base_url` overrides it.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = match &config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let (_, datacenter) = config
                    .api_key
                    .rsplit_once('-')
                    .ok_or(Error::MalformedApiKey)?;
                if datacenter.is_empty() {
                    return Err(Error::MalformedApiKey);
                }
                format!("https://{}.api.mailchimp.com/3.0", datacenter)
            }
        };

        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .send()
            .await?;
        read_json(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .json(body)
            .send()
            .await?;
        read_json(path, response).await
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url(path))
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .send()
            .await?;
        read_empty(path, response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .send()
            .await?;
        read_empty(path, response).await
    }
}

/// Error body shape the remote API uses for non-success responses.
#[derive(Debug, Deserialize)]
struct RemoteProblem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    detail: String,
}

async fn remote_error(path: &str, response: Response) -> Error {
    let status = response.status().as_u16();
    let detail = match response.json::<RemoteProblem>().await {
        Ok(problem) if !problem.detail.is_empty() => problem.detail,
        Ok(problem) => problem.title,
        Err(_) => String::new(),
    };
    debug!(path = path, status = status, detail = %detail, "api_remote_error");
    Error::Remote { status, detail }
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(remote_error(path, response).await);
    }
    Ok(response.json().await?)
}

async fn read_empty(path: &str, response: Response) -> Result<()> {
    if !response.status().is_success() && response.status() != StatusCode::NO_CONTENT {
        return Err(remote_error(path, response).await);
    }
    Ok(())
}

// Collection responses arrive wrapped in a resource-named envelope.

#[derive(Deserialize)]
struct ListsEnvelope {
    lists: Vec<List>,
}

#[derive(Deserialize)]
struct MembersEnvelope {
    members: Vec<Member>,
}

#[derive(Deserialize)]
struct TemplatesEnvelope {
    templates: Vec<Template>,
}

#[derive(Deserialize)]
struct CampaignsEnvelope {
    campaigns: Vec<Campaign>,
}

#[async_trait]
impl MarketingApi for ApiClient {
    async fn create_list(&self, list: &ListCreate) -> Result<List> {
        self.post_json("lists", list).await
    }

    async fn delete_list(&self, list_id: &str) -> Result<()> {
        self.delete(&format!("lists/{}", list_id)).await
    }

    async fn get_list(&self, list_id: &str) -> Result<List> {
        self.get_json(&format!("lists/{}", list_id)).await
    }

    async fn get_lists(&self) -> Result<Vec<List>> {
        let envelope: ListsEnvelope = self.get_json("lists").await?;
        Ok(envelope.lists)
    }

    async fn get_list_members(&self, list_id: &str) -> Result<Vec<Member>> {
        let envelope: MembersEnvelope =
            self.get_json(&format!("lists/{}/members", list_id)).await?;
        Ok(envelope.members)
    }

    async fn create_template(&self, template: &TemplateCreate) -> Result<Template> {
        self.post_json("templates", template).await
    }

    async fn delete_template(&self, template_id: u64) -> Result<()> {
        self.delete(&format!("templates/{}", template_id)).await
    }

    async fn get_templates(&self) -> Result<Vec<Template>> {
        let envelope: TemplatesEnvelope = self.get_json("templates").await?;
        Ok(envelope.templates)
    }

    async fn create_campaign(&self, campaign: &CampaignCreate) -> Result<Campaign> {
        self.post_json("campaigns", campaign).await
    }

    async fn delete_campaign(&self, campaign_id: &str) -> Result<()> {
        self.delete(&format!("campaigns/{}", campaign_id)).await
    }

    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign> {
        self.get_json(&format!("campaigns/{}", campaign_id)).await
    }

    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        let envelope: CampaignsEnvelope = self.get_json("campaigns").await?;
        Ok(envelope.campaigns)
    }

    async fn get_campaigns_for_list(&self, list_id: &str) -> Result<Vec<Campaign>> {
        let envelope: CampaignsEnvelope = self
            .get_json(&format!("campaigns?list_id={}", list_id))
            .await?;
        Ok(envelope.campaigns)
    }

    async fn send_campaign(&self, campaign_id: &str) -> Result<()> {
        self.post_empty(&format!("campaigns/{}/actions/send", campaign_id))
            .await
    }

    async fn send_checklist(&self, campaign_id: &str) -> Result<SendChecklist> {
        self.get_json(&format!("campaigns/{}/send-checklist", campaign_id))
            .await
    }

    async fn submit_batch(&self, batch: &BatchRequest) -> Result<BatchStatus> {
        self.post_json("batches", batch).await
    }

    async fn get_batch_status(&self, batch_id: &str) -> Result<BatchStatus> {
        self.get_json(&format!("batches/{}", batch_id)).await
    }
}
