//! Shared test infrastructure for board tests.
//!
//! - `FakeApi` - scripted in-memory backend that records every request
//! - `RecordingSurface` - surface that keeps every commit for inspection
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use activity_board::app::ActivityBoard;
use activity_board::config::Config;
use activity_board::error::{ErrorKind, Result};
use activity_board::interface::{ActivityApi, Confirm, Surface};
use activity_board::model::{ActivitySet, MembershipParams, Mutation, MutationOutcome, MutationReply};
use activity_board::notice::Notice;
use activity_board::view::{ListView, SelectOption};
use serde_json::Value;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CHESS_ONE: &str = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]}}"#;
pub const CHESS_TWO: &str = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com","new@x.com"]}}"#;
pub const ART_EMPTY: &str = r#"{"Art Club": {"description":"Paint","schedule":"Wed","max_participants":15,"participants":[]}}"#;

// ============================================================================
// FAKE BACKEND
// ============================================================================

pub enum FetchReply {
    Body(String),
    Down,
}

pub enum MutationScript {
    Reply { success: bool, body: Value },
    Down,
}

pub struct FakeApi {
    fetches: StdMutex<VecDeque<(Duration, FetchReply)>>,
    fallback_body: StdMutex<String>,
    mutation: StdMutex<MutationScript>,
    pub fetch_count: AtomicUsize,
    pub requests: StdMutex<Vec<(Mutation, String, String)>>,
}

impl FakeApi {
    pub fn serving(body: &str) -> Self {
        Self {
            fetches: StdMutex::new(VecDeque::new()),
            fallback_body: StdMutex::new(body.to_string()),
            mutation: StdMutex::new(MutationScript::Down),
            fetch_count: AtomicUsize::new(0),
            requests: StdMutex::new(Vec::new()),
        }
    }

    /// Queue one fetch answer, returned after `delay`.
    pub fn push_fetch(&self, delay: Duration, reply: FetchReply) {
        self.fetches.lock().unwrap().push_back((delay, reply));
    }

    /// Body served once the queued fetches are used up.
    pub fn set_body(&self, body: &str) {
        *self.fallback_body.lock().unwrap() = body.to_string();
    }

    pub fn reply_with(&self, success: bool, body: Value) {
        *self.mutation.lock().unwrap() = MutationScript::Reply { success, body };
    }

    pub fn go_down(&self) {
        *self.mutation.lock().unwrap() = MutationScript::Down;
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn answer(&self, mutation: Mutation, params: MembershipParams<'_>) -> Result<MutationOutcome> {
        self.requests.lock().unwrap().push((
            mutation,
            params.activity.to_string(),
            params.email.to_string(),
        ));
        match &*self.mutation.lock().unwrap() {
            MutationScript::Reply { success, body } => Ok(MutationOutcome {
                success: *success,
                reply: MutationReply::from_value(body),
            }),
            MutationScript::Down => Err(ErrorKind::ParseError("connection refused".to_string()).into()),
        }
    }
}

impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<ActivitySet> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let next = self.fetches.lock().unwrap().pop_front();
        let (delay, reply) = next.unwrap_or_else(|| {
            (
                Duration::ZERO,
                FetchReply::Body(self.fallback_body.lock().unwrap().clone()),
            )
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            FetchReply::Body(body) => Ok(serde_json::from_str(&body)?),
            FetchReply::Down => Err(ErrorKind::ParseError("connection refused".to_string()).into()),
        }
    }

    async fn signup(&self, params: MembershipParams<'_>) -> Result<MutationOutcome> {
        self.answer(Mutation::Signup, params)
    }

    async fn unregister(&self, params: MembershipParams<'_>) -> Result<MutationOutcome> {
        self.answer(Mutation::Unregister, params)
    }
}

// ============================================================================
// RECORDING SURFACE
// ============================================================================

#[derive(Default)]
pub struct RecordingSurface {
    pub lists: StdMutex<Vec<ListView>>,
    pub options: StdMutex<Vec<Vec<SelectOption>>>,
    pub notices: StdMutex<Vec<Option<Notice>>>,
    pub resets: AtomicUsize,
    pub prompts: StdMutex<Vec<String>>,
    pub decline: AtomicBool,
}

impl RecordingSurface {
    pub fn declining() -> Self {
        let surface = Self::default();
        surface.decline.store(true, Ordering::SeqCst);
        surface
    }

    pub fn last_list(&self) -> Option<ListView> {
        self.lists.lock().unwrap().last().cloned()
    }

    pub fn last_options(&self) -> Option<Vec<SelectOption>> {
        self.options.lock().unwrap().last().cloned()
    }

    pub fn last_notice(&self) -> Option<Option<Notice>> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn list_commits(&self) -> usize {
        self.lists.lock().unwrap().len()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl Surface for RecordingSurface {
    fn commit_list(&self, list: &ListView) {
        self.lists.lock().unwrap().push(list.clone());
    }

    fn commit_options(&self, options: &[SelectOption]) {
        self.options.lock().unwrap().push(options.to_vec());
    }

    fn commit_notice(&self, notice: Option<&Notice>) {
        self.notices.lock().unwrap().push(notice.cloned());
    }

    fn reset_form(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

impl Confirm for RecordingSurface {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        !self.decline.load(Ordering::SeqCst)
    }
}

// ============================================================================
// BOARD SETUP
// ============================================================================

pub fn board(api: FakeApi, surface: RecordingSurface) -> ActivityBoard<FakeApi, RecordingSurface> {
    ActivityBoard::new(api, surface, &Config::default())
}

pub fn cards(list: &ListView) -> usize {
    match list {
        ListView::Cards(cards) => cards.len(),
        ListView::Failed => 0,
    }
}
