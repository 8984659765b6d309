//! High-level orchestration over the remote marketing API.
//!
//! The orchestrator owns the single API handle and exposes the workflows
//! the binaries drive: list/template/campaign management, bulk member
//! uploads, and the readiness-gated campaign send. Three failure policies
//! coexist here on purpose: mutations propagate errors, read-alls degrade
//! to empty through the retry wrapper, and single-list lookup swallows
//! failure into `None`.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::api::types::{
    BatchStatus, Campaign, CampaignCreate, CampaignDefaults, CampaignSettings, CampaignType,
    Contact, List, ListCreate, Member, Recipients, Template, TemplateCreate,
};
use crate::api::MarketingApi;
use crate::batch;
use crate::batch::poller;
use crate::error::Result;
use crate::retry::{fetch_with_retry, Fetched};

/// How many times the send gate checks campaign readiness.
pub const READINESS_ATTEMPTS: u32 = 10;

/// Wait between readiness checks.
pub const READINESS_INTERVAL: Duration = Duration::from_secs(60);

/// Placeholder reminder text filled into new lists; campaigns templates
/// substitute the real copy downstream.
const PERMISSION_REMINDER: &str = "{PermissionReminder}";

/// Orchestrates workflows against one remote API handle.
pub struct Orchestrator<A> {
    api: A,
}

impl<A: MarketingApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Create a list and return its remote identifier. Errors propagate.
    pub async fn create_list(
        &self,
        name: &str,
        contact: Contact,
        defaults: CampaignDefaults,
    ) -> Result<String> {
        let request = ListCreate {
            name: name.to_string(),
            permission_reminder: PERMISSION_REMINDER.to_string(),
            contact,
            campaign_defaults: defaults,
        };

        let list = self.api.create_list(&request).await?;
        info!(list_id = %list.id, name = name, "list_created");
        Ok(list.id)
    }

    /// Delete a list. Errors propagate.
    pub async fn delete_list(&self, list_id: &str) -> Result<()> {
        self.api.delete_list(list_id).await?;
        info!(list_id = list_id, "list_deleted");
        Ok(())
    }

    /// Look up one list, swallowing any failure into `None`.
    pub async fn get_list(&self, list_id: &str) -> Option<List> {
        match self.api.get_list(list_id).await {
            Ok(list) => Some(list),
            Err(e) => {
                warn!(list_id = list_id, error = %e, "list_lookup_failed");
                None
            }
        }
    }

    /// Fetch all lists, degrading to empty after the retry budget.
    pub async fn get_lists(&self) -> Fetched<Vec<List>> {
        fetch_with_retry("lists", || self.api.get_lists()).await
    }

    /// Roll up members across every list that has at least one campaign.
    ///
    /// Per-list failures are logged and skipped so one broken list does
    /// not hide the members of the others.
    pub async fn all_list_members(&self) -> Vec<Member> {
        let lists = self.get_lists().await.into_inner();
        let mut members = Vec::new();

        for list in lists {
            let campaigns = match self.api.get_campaigns_for_list(&list.id).await {
                Ok(campaigns) => campaigns,
                Err(e) => {
                    warn!(list_id = %list.id, error = %e, "list_campaigns_fetch_failed");
                    continue;
                }
            };

            if campaigns.is_empty() {
                continue;
            }

            match self.api.get_list_members(&list.id).await {
                Ok(mut list_members) => members.append(&mut list_members),
                Err(e) => {
                    warn!(list_id = %list.id, error = %e, "list_members_fetch_failed");
                }
            }
        }

        members
    }

    /// Upsert recipients into a list through the remote batch facility and
    /// wait for the batch to finish.
    ///
    /// Partial failures inside a finished batch are reported as a warning
    /// and do not fail the call; submit and poll errors propagate. Note
    /// that the underlying poll loop has no timeout.
    pub async fn add_members_to_list(
        &self,
        list_id: &str,
        recipients: &[String],
    ) -> Result<BatchStatus> {
        let request = batch::build_member_upsert_batch(list_id, recipients)?;
        poller::submit_and_wait(&self.api, list_id, &request).await
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Create a template and return its remote identifier. Errors propagate.
    pub async fn create_template(&self, name: &str, folder_id: &str, html: &str) -> Result<u64> {
        let request = TemplateCreate {
            name: name.to_string(),
            folder_id: folder_id.to_string(),
            html: html.to_string(),
        };

        let template = self.api.create_template(&request).await?;
        info!(template_id = template.id, name = name, "template_created");
        Ok(template.id)
    }

    /// Delete a template. Errors propagate.
    pub async fn delete_template(&self, template_id: u64) -> Result<()> {
        self.api.delete_template(template_id).await?;
        info!(template_id = template_id, "template_deleted");
        Ok(())
    }

    /// Fetch all templates, degrading to empty after the retry budget.
    pub async fn get_templates(&self) -> Fetched<Vec<Template>> {
        fetch_with_retry("templates", || self.api.get_templates()).await
    }

    // =========================================================================
    // Campaigns
    // =========================================================================

    /// Create a regular campaign addressed at a list and return its
    /// identifier. Errors propagate.
    pub async fn create_campaign(
        &self,
        list_id: &str,
        from_name: &str,
        subject_line: &str,
        reply_to: &str,
        template_id: u64,
    ) -> Result<String> {
        let request = CampaignCreate {
            campaign_type: CampaignType::Regular,
            recipients: Recipients {
                list_id: list_id.to_string(),
            },
            settings: CampaignSettings {
                from_name: Some(from_name.to_string()),
                subject_line: Some(subject_line.to_string()),
                reply_to: Some(reply_to.to_string()),
                template_id: Some(template_id),
            },
        };

        let campaign = self.api.create_campaign(&request).await?;
        info!(campaign_id = %campaign.id, list_id = list_id, "campaign_created");
        Ok(campaign.id)
    }

    /// Delete a campaign. Errors propagate.
    pub async fn delete_campaign(&self, campaign_id: &str) -> Result<()> {
        self.api.delete_campaign(campaign_id).await?;
        info!(campaign_id = campaign_id, "campaign_deleted");
        Ok(())
    }

    /// Fetch all campaigns, degrading to empty after the retry budget.
    pub async fn get_campaigns(&self) -> Fetched<Vec<Campaign>> {
        fetch_with_retry("campaigns", || self.api.get_campaigns()).await
    }

    /// Fetch one campaign's delivery status string. Errors propagate.
    pub async fn campaign_delivery_status(&self, campaign_id: &str) -> Result<String> {
        let campaign = self.api.get_campaign(campaign_id).await?;
        Ok(campaign.status)
    }

    /// Single readiness check against the campaign's send checklist.
    /// No retry; errors propagate.
    pub async fn is_campaign_ready(&self, campaign_id: &str) -> Result<bool> {
        let checklist = self.api.send_checklist(campaign_id).await?;
        Ok(checklist.is_ready)
    }

    /// Gate a campaign send on readiness, then send.
    ///
    /// Checks readiness up to [`READINESS_ATTEMPTS`] times, sleeping
    /// [`READINESS_INTERVAL`] between attempts. The send fires even when
    /// readiness was never confirmed; that outcome is logged as a warning
    /// but does not stop the send. A checklist error aborts the whole
    /// operation before the send.
    pub async fn send_campaign(&self, campaign_id: &str) -> Result<()> {
        let mut ready = false;

        for attempt in 1..=READINESS_ATTEMPTS {
            ready = self.is_campaign_ready(campaign_id).await?;
            if ready {
                info!(campaign_id = campaign_id, attempt = attempt, "campaign_ready");
                break;
            }
            if attempt < READINESS_ATTEMPTS {
                sleep(READINESS_INTERVAL).await;
            }
        }

        if !ready {
            warn!(
                campaign_id = campaign_id,
                attempts = READINESS_ATTEMPTS,
                "campaign_send_without_readiness"
            );
        }

        self.api.send_campaign(campaign_id).await?;
        info!(campaign_id = campaign_id, "campaign_send_triggered");
        Ok(())
    }
}
