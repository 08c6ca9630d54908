//! Applies showcase events and turns the resulting work into backend commands.

use client_core::{RequestStatus, ShowcaseEvent, ShowcaseState};
use shared::domain::Category;

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::images::ImageCache;

pub fn reduce(state: &mut ShowcaseState, event: ShowcaseEvent) -> Option<BackendCommand> {
    let event_name = event.name();
    let request = state.apply(event);
    tracing::debug!(
        event = event_name,
        status = ?state.status(),
        category = %state.selected(),
        "showcase event applied"
    );
    request.map(BackendCommand::FetchProjects)
}

/// A selector pick only becomes a category change when it moves off the
/// active category. Re-picking the current one reloads nothing.
pub fn category_pick(selected: Category, picked: Category) -> Option<ShowcaseEvent> {
    (picked != selected).then_some(ShowcaseEvent::CategoryChanged(picked))
}

/// Image fetches needed to draw the current listing. Each url is handed out
/// once; the cache remembers it as loading from then on.
pub fn plan_image_fetches(state: &ShowcaseState, images: &mut ImageCache) -> Vec<BackendCommand> {
    if state.status() != RequestStatus::Success {
        return Vec::new();
    }
    state
        .projects()
        .iter()
        .filter(|project| images.begin_request(&project.image_url))
        .map(|project| BackendCommand::FetchImage {
            url: project.image_url.clone(),
        })
        .collect()
}
