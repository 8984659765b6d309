//! Resource models mirroring the remote marketing API.
//!
//! These are plain wire shapes: request types skip `None` fields during
//! serialization so unset attributes never overwrite remote defaults, and
//! response types tolerate fields we do not care about.

use serde::{Deserialize, Serialize};

// =============================================================================
// Lists and members
// =============================================================================

/// An audience list as returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    /// Remote list identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// Contact information required when creating a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub company: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Default campaign settings attached to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDefaults {
    pub from_email: String,
    pub from_name: String,
    pub language: String,
    pub subject: String,
}

impl CampaignDefaults {
    /// Build campaign defaults for list creation.
    pub fn new(
        from_email: impl Into<String>,
        from_name: impl Into<String>,
        language: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from_email: from_email.into(),
            from_name: from_name.into(),
            language: language.into(),
            subject: subject.into(),
        }
    }
}

/// Request body for creating a list.
#[derive(Debug, Clone, Serialize)]
pub struct ListCreate {
    pub name: String,
    pub permission_reminder: String,
    pub contact: Contact,
    pub campaign_defaults: CampaignDefaults,
}

/// Subscription status of a list member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Subscribed,
    Unsubscribed,
    Cleaned,
    Pending,
}

/// A member of an audience list.
///
/// Optional fields are omitted from serialized bodies when unset, so a
/// member upsert never clobbers attributes it does not carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub email_address: String,
    /// Status applied only if the member does not exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_if_new: Option<SubscriberStatus>,
    /// Current status (set by the remote system)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriberStatus>,
}

// =============================================================================
// Templates
// =============================================================================

/// An email template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub name: String,
}

/// Request body for creating a template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateCreate {
    pub name: String,
    pub folder_id: String,
    pub html: String,
}

// =============================================================================
// Campaigns
// =============================================================================

/// Campaign type accepted by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Regular,
    Plaintext,
    Rss,
    Variate,
}

/// The list a campaign is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipients {
    pub list_id: String,
}

/// Sender and content settings for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
}

/// Request body for creating a campaign.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignCreate {
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub recipients: Recipients,
    pub settings: CampaignSettings,
}

/// A campaign as returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    /// Delivery status string ("save", "sending", "sent", ...)
    #[serde(default)]
    pub status: String,
}

/// One entry of a campaign's pre-send checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub details: String,
}

/// Summary of whether a campaign has passed pre-send validation.
///
/// Recomputed by the remote system on every fetch; never cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChecklist {
    pub is_ready: bool,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

// =============================================================================
// Batches
// =============================================================================

/// One unit of work inside a batch: an HTTP call the remote system replays
/// against its own resources. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOperation {
    pub method: String,
    pub path: String,
    /// Pre-serialized JSON request body
    pub body: String,
}

/// An ordered collection of operations submitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub operations: Vec<BatchOperation>,
}

/// Lifecycle states a batch moves through on the remote system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchState {
    Pending,
    Preprocessing,
    Started,
    Finalizing,
    Finished,
    /// Any state this crate does not know about; treated as non-terminal
    #[serde(other)]
    Unknown,
}

impl BatchState {
    /// Whether the batch has reached a state after which no further
    /// transition occurs.
    pub fn is_terminal(self) -> bool {
        self == BatchState::Finished
    }
}

/// Snapshot of a batch's aggregate progress. Each poll produces a fresh,
/// independent snapshot; there is no merge logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatus {
    pub id: String,
    pub status: BatchState,
    #[serde(default)]
    pub total_operations: u64,
    #[serde(default)]
    pub errored_operations: u64,
}
