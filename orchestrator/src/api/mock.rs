//! Scriptable in-memory [`MarketingApi`] for tests.
//!
//! Each method pops its next response from a per-method queue; an empty
//! queue yields a sentinel remote error so a test fails loudly when it
//! runs off the end of its script. Call counts are tracked so tests can
//! assert exact poll and retry cadences.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::types::{
    BatchRequest, BatchState, BatchStatus, Campaign, CampaignCreate, List, ListCreate, Member,
    SendChecklist, Template, TemplateCreate,
};
use crate::api::MarketingApi;
use crate::error::{Error, Result};

fn unscripted(method: &str) -> Error {
    Error::remote(599, format!("unscripted mock call: {}", method))
}

fn pop<T>(queue: &Mutex<VecDeque<Result<T>>>, method: &str) -> Result<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(unscripted(method)))
}

/// Call counters for cadence assertions.
#[derive(Default)]
pub(crate) struct Calls {
    pub submit_batch: AtomicU32,
    pub get_batch_status: AtomicU32,
    pub send_checklist: AtomicU32,
    pub send_campaign: AtomicU32,
    pub get_lists: AtomicU32,
    pub get_list: AtomicU32,
}

impl Calls {
    fn bump(counter: &AtomicU32) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scripted mock of the remote API.
#[derive(Default)]
pub(crate) struct MockApi {
    pub calls: Calls,
    pub submit_responses: Mutex<VecDeque<Result<BatchStatus>>>,
    pub poll_responses: Mutex<VecDeque<Result<BatchStatus>>>,
    pub checklist_responses: Mutex<VecDeque<Result<SendChecklist>>>,
    pub list_responses: Mutex<VecDeque<Result<Vec<List>>>>,
    pub single_list_responses: Mutex<VecDeque<Result<List>>>,
    pub member_responses: Mutex<VecDeque<Result<Vec<Member>>>>,
    pub template_responses: Mutex<VecDeque<Result<Vec<Template>>>>,
    pub campaign_responses: Mutex<VecDeque<Result<Vec<Campaign>>>>,
    pub campaigns_for_list_responses: Mutex<VecDeque<Result<Vec<Campaign>>>>,
    pub single_campaign_responses: Mutex<VecDeque<Result<Campaign>>>,
    pub create_list_responses: Mutex<VecDeque<Result<List>>>,
    pub create_template_responses: Mutex<VecDeque<Result<Template>>>,
    pub create_campaign_responses: Mutex<VecDeque<Result<Campaign>>>,
}

impl MockApi {
    /// Script a batch status snapshot.
    pub fn batch(id: &str, status: BatchState, total: u64, errored: u64) -> BatchStatus {
        BatchStatus {
            id: id.to_string(),
            status,
            total_operations: total,
            errored_operations: errored,
        }
    }

    /// Script a checklist response.
    pub fn checklist(is_ready: bool) -> SendChecklist {
        SendChecklist {
            is_ready,
            items: Vec::new(),
        }
    }

    /// Queue `count` not-ready checklist responses.
    pub fn script_never_ready(&self, count: usize) {
        let mut queue = self.checklist_responses.lock().unwrap();
        for _ in 0..count {
            queue.push_back(Ok(Self::checklist(false)));
        }
    }
}

#[async_trait]
impl MarketingApi for MockApi {
    async fn create_list(&self, _list: &ListCreate) -> Result<List> {
        pop(&self.create_list_responses, "create_list")
    }

    async fn delete_list(&self, _list_id: &str) -> Result<()> {
        Ok(())
    }

    async fn get_list(&self, _list_id: &str) -> Result<List> {
        Calls::bump(&self.calls.get_list);
        pop(&self.single_list_responses, "get_list")
    }

    async fn get_lists(&self) -> Result<Vec<List>> {
        Calls::bump(&self.calls.get_lists);
        pop(&self.list_responses, "get_lists")
    }

    async fn get_list_members(&self, _list_id: &str) -> Result<Vec<Member>> {
        pop(&self.member_responses, "get_list_members")
    }

    async fn create_template(&self, _template: &TemplateCreate) -> Result<Template> {
        pop(&self.create_template_responses, "create_template")
    }

    async fn delete_template(&self, _template_id: u64) -> Result<()> {
        Ok(())
    }

    async fn get_templates(&self) -> Result<Vec<Template>> {
        pop(&self.template_responses, "get_templates")
    }

    async fn create_campaign(&self, _campaign: &CampaignCreate) -> Result<Campaign> {
        pop(&self.create_campaign_responses, "create_campaign")
    }

    async fn delete_campaign(&self, _campaign_id: &str) -> Result<()> {
        Ok(())
    }

    async fn get_campaign(&self, _campaign_id: &str) -> Result<Campaign> {
        pop(&self.single_campaign_responses, "get_campaign")
    }

    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        pop(&self.campaign_responses, "get_campaigns")
    }

    async fn get_campaigns_for_list(&self, _list_id: &str) -> Result<Vec<Campaign>> {
        pop(&self.campaigns_for_list_responses, "get_campaigns_for_list")
    }

    async fn send_campaign(&self, _campaign_id: &str) -> Result<()> {
        Calls::bump(&self.calls.send_campaign);
        Ok(())
    }

    async fn send_checklist(&self, _campaign_id: &str) -> Result<SendChecklist> {
        Calls::bump(&self.calls.send_checklist);
        pop(&self.checklist_responses, "send_checklist")
    }

    async fn submit_batch(&self, _batch: &BatchRequest) -> Result<BatchStatus> {
        Calls::bump(&self.calls.submit_batch);
        pop(&self.submit_responses, "submit_batch")
    }

    async fn get_batch_status(&self, _batch_id: &str) -> Result<BatchStatus> {
        Calls::bump(&self.calls.get_batch_status);
        pop(&self.poll_responses, "get_batch_status")
    }
}
