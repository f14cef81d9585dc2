//! Bug list state and the actions that drive it.
//!
//! [`BugListState::reduce`] is a pure reducer: server responses are folded
//! into the local list without touching the network, which keeps the
//! reconciliation rules testable on their own. [`BugList`] pairs the state
//! with a [`BugsApi`] and turns user intents into actions.

use bugtracker_core::{Bug, BugStatus, NewBug};

use crate::api::BugsApi;
use crate::view::{render, View};

pub const LOAD_FAILED: &str = "Failed to load bugs";
pub const CREATE_FAILED: &str = "Failed to create bug";
pub const UPDATE_FAILED: &str = "Failed to update bug";
pub const DELETE_FAILED: &str = "Failed to delete bug";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugListState {
    pub bugs: Vec<Bug>,
    pub loading: bool,
    pub error: Option<String>,
    pub draft_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadStarted,
    Loaded(Vec<Bug>),
    DraftChanged(String),
    Created(Bug),
    Updated(Bug),
    Deleted(String),
    Failed(String),
}

impl BugListState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::Loaded(bugs) => {
                self.bugs = bugs;
                self.loading = false;
            }
            Action::DraftChanged(title) => {
                self.draft_title = title;
            }
            Action::Created(bug) => {
                self.bugs.insert(0, bug);
                self.draft_title.clear();
            }
            Action::Updated(bug) => {
                if let Some(existing) = self.bugs.iter_mut().find(|b| b.id == bug.id) {
                    *existing = bug;
                }
            }
            Action::Deleted(id) => {
                self.bugs.retain(|b| b.id != id);
            }
            Action::Failed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
        }
    }
}

/// The list component: local state plus the API it talks to.
pub struct BugList<A: BugsApi> {
    api: A,
    state: BugListState,
}

impl<A: BugsApi> BugList<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BugListState::default(),
        }
    }

    pub fn state(&self) -> &BugListState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.reduce(action);
    }

    /// Fetch the full collection, replacing local state
    pub async fn load(&mut self) {
        self.dispatch(Action::LoadStarted);

        match self.api.fetch_bugs().await {
            Ok(bugs) => self.dispatch(Action::Loaded(bugs)),
            Err(e) => {
                tracing::error!("[BugList] fetch error: {}", e);
                self.dispatch(Action::Failed(LOAD_FAILED.to_string()));
            }
        }
    }

    pub fn set_draft(&mut self, title: impl Into<String>) {
        self.dispatch(Action::DraftChanged(title.into()));
    }

    /// Create a bug from the draft title. Blank drafts are ignored.
    pub async fn submit(&mut self) {
        self.submit_with_description("").await;
    }

    /// Like [`submit`](Self::submit), attaching a description to the new bug.
    pub async fn submit_with_description(&mut self, description: &str) {
        if self.state.draft_title.trim().is_empty() {
            return;
        }

        let new_bug = NewBug::new(self.state.draft_title.clone()).with_description(description);
        match self.api.create_bug(&new_bug).await {
            Ok(created) => self.dispatch(Action::Created(created)),
            Err(e) => {
                tracing::error!("[BugList] create error: {}", e);
                self.dispatch(Action::Failed(CREATE_FAILED.to_string()));
            }
        }
    }

    pub async fn set_status(&mut self, id: &str, status: BugStatus) {
        match self.api.update_bug_status(id, status).await {
            Ok(updated) => self.dispatch(Action::Updated(updated)),
            Err(e) => {
                tracing::error!("[BugList] update error: {}", e);
                self.dispatch(Action::Failed(UPDATE_FAILED.to_string()));
            }
        }
    }

    pub async fn delete(&mut self, id: &str) {
        match self.api.delete_bug(id).await {
            Ok(()) => self.dispatch(Action::Deleted(id.to_string())),
            Err(e) => {
                tracing::error!("[BugList] delete error: {}", e);
                self.dispatch(Action::Failed(DELETE_FAILED.to_string()));
            }
        }
    }
}
