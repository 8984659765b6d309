//! Bulk batch construction for member uploads.
//!
//! Converts recipient addresses into a batch of upsert operations. The
//! remote system addresses each member by the MD5 of the lowercased email
//! address, so no per-recipient lookup round-trip is needed.

pub mod poller;

use crate::api::types::{BatchOperation, BatchRequest, Member, SubscriberStatus};
use crate::error::Result;

/// Compute the remote member address for an email.
///
/// Deterministic: the address is normalized to lowercase before hashing,
/// so `Foo@Bar.com` and `foo@bar.com` address the same member.
pub fn subscriber_hash(email: &str) -> String {
    format!("{:x}", md5::compute(email.to_lowercase()))
}

/// Build a batch that upserts each recipient into a list as subscribed.
///
/// Pure transformation with no side effects. An empty recipient slice
/// produces a batch with zero operations. Each operation body omits unset
/// member fields so the upsert never overwrites remote defaults.
pub fn build_member_upsert_batch(list_id: &str, recipients: &[String]) -> Result<BatchRequest> {
    let mut operations = Vec::with_capacity(recipients.len());

    for recipient in recipients {
        let member = Member {
            email_address: recipient.clone(),
            status_if_new: Some(SubscriberStatus::Subscribed),
            status: None,
        };

        operations.push(BatchOperation {
            method: "PUT".to_string(),
            path: format!("/lists/{}/members/{}", list_id, subscriber_hash(recipient)),
            body: serde_json::to_string(&member)?,
        });
    }

    Ok(BatchRequest { operations })
}
