//! Chimp Orchestrator - async orchestration over a marketing API.
//!
//! This library wraps a Mailchimp-style email marketing API (lists,
//! members, templates, campaigns, batches) behind a single orchestrator:
//!
//! - bulk member uploads through the remote batch facility, polled on a
//!   fixed cadence until the batch finishes;
//! - a readiness gate that bounds how long a campaign send waits on the
//!   remote pre-send checklist;
//! - bounded-retry reads that degrade to empty results instead of failing.
//!
//! ## Architecture
//!
//! ```text
//! Orchestrator → MarketingApi (trait) → ApiClient (reqwest) → remote API
//!       │
//!       ├── batch builder + poller (member uploads)
//!       └── retry wrapper (read-all operations)
//! ```

pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod ops;
pub mod retry;

// Re-export commonly used types
pub use api::types::{
    BatchOperation, BatchRequest, BatchState, BatchStatus, Campaign, CampaignDefaults, Contact,
    List, Member, SendChecklist, SubscriberStatus, Template,
};
pub use api::{ApiClient, MarketingApi};
pub use config::Config;
pub use error::{Error, Result};
pub use ops::Orchestrator;
pub use retry::Fetched;
