//! Showcase view state and its transitions.
//!
//! [`ShowcaseState::apply`] is the only way state changes. Every event that
//! starts a load hands back a [`FetchRequest`] for the caller to run; results
//! are fed back in as [`ShowcaseEvent::FetchSucceeded`] or
//! [`ShowcaseEvent::FetchFailed`] carrying the request's sequence number.
//! Only the result of the most recently issued request is applied.

use shared::domain::{Category, Project};

pub const FAILURE_TITLE: &str = "Oops! Something Went Wrong";
pub const FAILURE_CAPTION: &str = "We cannot seem to find the page you are looking for";

/// Monotonic id of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: RequestSeq,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    Mounted,
    CategoryChanged(Category),
    Retry,
    FetchSucceeded {
        seq: RequestSeq,
        projects: Vec<Project>,
    },
    FetchFailed {
        seq: RequestSeq,
    },
}

impl ShowcaseEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShowcaseEvent::Mounted => "mounted",
            ShowcaseEvent::CategoryChanged(_) => "category_changed",
            ShowcaseEvent::Retry => "retry",
            ShowcaseEvent::FetchSucceeded { .. } => "fetch_succeeded",
            ShowcaseEvent::FetchFailed { .. } => "fetch_failed",
        }
    }
}

/// Which sub-view the current state renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseView<'a> {
    Empty,
    Loading,
    List(&'a [Project]),
    Failure,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    selected: Category,
    projects: Vec<Project>,
    status: RequestStatus,
    latest_request: Option<RequestSeq>,
    next_seq: u64,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn latest_request(&self) -> Option<RequestSeq> {
        self.latest_request
    }

    pub fn apply(&mut self, event: ShowcaseEvent) -> Option<FetchRequest> {
        match event {
            ShowcaseEvent::Mounted | ShowcaseEvent::Retry => Some(self.begin_load()),
            ShowcaseEvent::CategoryChanged(category) => {
                self.selected = category;
                Some(self.begin_load())
            }
            ShowcaseEvent::FetchSucceeded { seq, projects } => {
                if self.is_current(seq) {
                    self.projects = projects;
                    self.status = RequestStatus::Success;
                } else {
                    tracing::debug!(seq = seq.0, "discarding stale project listing");
                }
                None
            }
            ShowcaseEvent::FetchFailed { seq } => {
                if self.is_current(seq) {
                    self.status = RequestStatus::Failure;
                } else {
                    tracing::debug!(seq = seq.0, "discarding stale fetch failure");
                }
                None
            }
        }
    }

    pub fn view(&self) -> ShowcaseView<'_> {
        match self.status {
            RequestStatus::Initial => ShowcaseView::Empty,
            RequestStatus::InProgress => ShowcaseView::Loading,
            RequestStatus::Success => ShowcaseView::List(&self.projects),
            RequestStatus::Failure => ShowcaseView::Failure,
        }
    }

    fn begin_load(&mut self) -> FetchRequest {
        self.next_seq += 1;
        let seq = RequestSeq(self.next_seq);
        self.latest_request = Some(seq);
        self.status = RequestStatus::InProgress;
        FetchRequest {
            seq,
            category: self.selected,
        }
    }

    fn is_current(&self, seq: RequestSeq) -> bool {
        self.latest_request == Some(seq)
    }
}

#[cfg(test)]
#[path = "tests/showcase_tests.rs"]
mod tests;
