//! The activity board: loads the activity set, commits the rendered view and
//! runs signup/unregister round trips.
//!
//! Loads are numbered. A load that completes after a newer one has already
//! been committed is dropped, so the surface always reflects the most recent
//! request that finished rather than whichever response arrived last.
//! Notices live in a [`NoticeSlot`]; each new notice aborts the timer armed
//! for the previous one.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex as TokioMutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::Config;
use crate::interface::{ActivityApi, Confirm, Surface};
use crate::model::{MembershipParams, Mutation};
use crate::notice::{Notice, NoticeKind, NoticeSlot};
use crate::view::{self, ListView, RowKey};

pub const GENERIC_ERROR_TEXT: &str = "An error occurred";

/// What a call to [`ActivityBoard::load`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
    /// A newer load was committed first; nothing was touched.
    Stale,
}

/// What a signup or unregister ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    /// Server accepted; view reloaded.
    Applied,
    /// Server answered with a failure status.
    Rejected,
    /// No usable reply (transport or body error).
    Failed,
    /// Confirmation declined or unknown row; no request sent.
    Cancelled,
}

struct BoardState {
    committed_load: u64,
    rows: HashSet<RowKey>,
    notice: NoticeSlot,
    notice_timer: Option<JoinHandle<()>>,
}

pub struct ActivityBoard<A, S> {
    api: A,
    surface: Arc<S>,
    state: Arc<TokioMutex<BoardState>>,
    load_seq: AtomicU64,
}

impl<A, S> ActivityBoard<A, S>
where
    A: ActivityApi,
    S: Surface + Confirm + Send + Sync + 'static,
{
    pub fn new(api: A, surface: S, config: &Config) -> Self {
        Self::with_surface(api, Arc::new(surface), config)
    }

    pub fn with_surface(api: A, surface: Arc<S>, config: &Config) -> Self {
        Self {
            api,
            surface,
            state: Arc::new(TokioMutex::new(BoardState {
                committed_load: 0,
                rows: HashSet::new(),
                notice: NoticeSlot::new(config.notice_timeout),
                notice_timer: None,
            })),
            load_seq: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Fetches the activity set and replaces the list, the options and the
    /// row table. On failure only the list is replaced.
    pub async fn load(&self) -> LoadOutcome {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.fetch_activities().await;

        let mut state = self.state.lock().await;
        if seq < state.committed_load {
            log::debug!(
                "Dropping load #{} (load #{} already committed)",
                seq,
                state.committed_load
            );
            return LoadOutcome::Stale;
        }
        state.committed_load = seq;

        match result {
            Ok(activities) => {
                let board = view::render(&activities);
                state.rows = board.rows().map(|row| row.key.clone()).collect();
                self.surface.commit_options(&board.options);
                self.surface.commit_list(&ListView::Cards(board.cards));
                log::debug!("Load #{} rendered {} activities", seq, activities.len());
                LoadOutcome::Rendered
            }
            Err(e) => {
                log::error!("Error fetching activities: {}", e);
                self.surface.commit_list(&ListView::Failed);
                LoadOutcome::Failed
            }
        }
    }

    pub async fn signup(&self, email: &str, activity: &str) -> MutationStatus {
        self.mutate(Mutation::Signup, email, activity).await
    }

    /// Asks for confirmation, then removes `email` from `activity`.
    pub async fn unregister(&self, email: &str, activity: &str) -> MutationStatus {
        if !self
            .surface
            .confirm(&format!("Remove {email} from {activity}?"))
        {
            return MutationStatus::Cancelled;
        }
        self.mutate(Mutation::Unregister, email, activity).await
    }

    /// Dispatches the removal control of a rendered row.
    pub async fn remove_row(&self, key: &RowKey) -> MutationStatus {
        let rendered = self.state.lock().await.rows.contains(key);
        if !rendered {
            log::warn!("No removal control for {} in {}", key.email, key.activity);
            return MutationStatus::Cancelled;
        }
        self.unregister(&key.email, &key.activity).await
    }

    /// Rows the last committed load rendered.
    pub async fn rows(&self) -> Vec<RowKey> {
        self.state.lock().await.rows.iter().cloned().collect()
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.state.lock().await.notice.current().cloned()
    }

    /// Scheduler-tick alternative to the armed timer.
    pub async fn tick(&self, now: Instant) {
        let mut state = self.state.lock().await;
        if state.notice.expire_due(now) {
            self.surface.commit_notice(None);
        }
    }

    async fn mutate(&self, mutation: Mutation, email: &str, activity: &str) -> MutationStatus {
        let params = MembershipParams { activity, email };
        let result = match mutation {
            Mutation::Signup => self.api.signup(params).await,
            Mutation::Unregister => self.api.unregister(params).await,
        };

        match result {
            Ok(outcome) if outcome.success => {
                let text = outcome.reply.message.unwrap_or_default();
                self.show_notice(text, NoticeKind::Success).await;
                if mutation == Mutation::Signup {
                    self.surface.reset_form();
                }
                self.load().await;
                MutationStatus::Applied
            }
            Ok(outcome) => {
                let text = outcome
                    .reply
                    .detail
                    .unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string());
                self.show_notice(text, NoticeKind::Error).await;
                MutationStatus::Rejected
            }
            Err(e) => {
                log::error!("Error on {} for {}: {}", mutation.endpoint(), activity, e);
                self.show_notice(mutation.transport_failure_text(), NoticeKind::Error)
                    .await;
                MutationStatus::Failed
            }
        }
    }

    async fn show_notice(&self, text: impl Into<String>, kind: NoticeKind) {
        let mut state = self.state.lock().await;
        let generation = state.notice.show(text, kind, Instant::now());
        self.surface.commit_notice(state.notice.current());

        let expires_at = state
            .notice
            .current()
            .map(|n| n.expires_at)
            .unwrap_or_else(Instant::now);
        let shared = Arc::clone(&self.state);
        let surface = Arc::clone(&self.surface);
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            let mut state = shared.lock().await;
            if state.notice.expire(generation) {
                surface.commit_notice(None);
            }
        });

        if let Some(previous) = state.notice_timer.replace(timer) {
            previous.abort();
        }
    }
}
