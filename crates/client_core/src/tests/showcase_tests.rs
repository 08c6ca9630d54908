use super::*;
use shared::domain::ProjectId;

fn project(id: &str) -> Project {
    Project {
        id: ProjectId(id.to_string()),
        name: format!("project {id}"),
        image_url: format!("http://x/{id}.png"),
    }
}

fn loaded_state(projects: Vec<Project>) -> ShowcaseState {
    let mut state = ShowcaseState::new();
    let request = state.apply(ShowcaseEvent::Mounted).expect("fetch");
    state.apply(ShowcaseEvent::FetchSucceeded {
        seq: request.seq,
        projects,
    });
    state
}

#[test]
fn starts_initial_and_renders_nothing() {
    let state = ShowcaseState::new();
    assert_eq!(state.status(), RequestStatus::Initial);
    assert_eq!(state.selected(), Category::All);
    assert!(state.projects().is_empty());
    assert_eq!(state.latest_request(), None);
    assert_eq!(state.view(), ShowcaseView::Empty);
}

#[test]
fn mount_requests_default_category_and_shows_loading() {
    let mut state = ShowcaseState::new();
    let request = state.apply(ShowcaseEvent::Mounted).expect("fetch");

    assert_eq!(request.category, Category::All);
    assert_eq!(state.latest_request(), Some(request.seq));
    assert_eq!(state.status(), RequestStatus::InProgress);
    assert_eq!(state.view(), ShowcaseView::Loading);
}

#[test]
fn every_category_change_issues_exactly_one_fetch_for_that_category() {
    let mut state = loaded_state(Vec::new());
    for category in Category::ALL {
        let request = state
            .apply(ShowcaseEvent::CategoryChanged(category))
            .expect("fetch");
        assert_eq!(request.category, category);
        assert_eq!(state.selected(), category);
        assert_eq!(state.status(), RequestStatus::InProgress);

        assert!(state
            .apply(ShowcaseEvent::FetchSucceeded {
                seq: request.seq,
                projects: vec![project(category.id())],
            })
            .is_none());
        assert_eq!(state.status(), RequestStatus::Success);
    }
}

#[test]
fn category_change_from_failure_goes_back_to_loading() {
    let mut state = ShowcaseState::new();
    let request = state.apply(ShowcaseEvent::Mounted).expect("fetch");
    state.apply(ShowcaseEvent::FetchFailed { seq: request.seq });
    assert_eq!(state.status(), RequestStatus::Failure);

    state
        .apply(ShowcaseEvent::CategoryChanged(Category::Static))
        .expect("fetch");
    assert_eq!(state.status(), RequestStatus::InProgress);
}

#[test]
fn sequence_numbers_increase_with_every_load() {
    let mut state = ShowcaseState::new();
    let first = state.apply(ShowcaseEvent::Mounted).expect("fetch");
    let second = state
        .apply(ShowcaseEvent::CategoryChanged(Category::React))
        .expect("fetch");
    let third = state.apply(ShowcaseEvent::Retry).expect("fetch");
    assert!(first.seq < second.seq);
    assert!(second.seq < third.seq);
}

#[test]
fn success_replaces_list_in_order() {
    let state = loaded_state(vec![project("3"), project("1"), project("2")]);
    let ids: Vec<_> = state.projects().iter().map(|p| p.id.0.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
    assert_eq!(state.view(), ShowcaseView::List(state.projects()));
}

#[test]
fn empty_success_renders_empty_list_not_failure() {
    let state = loaded_state(Vec::new());
    assert_eq!(state.status(), RequestStatus::Success);
    assert_eq!(state.view(), ShowcaseView::List(&[]));
}

#[test]
fn failure_preserves_previous_projects() {
    let mut state = loaded_state(vec![project("1")]);
    let request = state
        .apply(ShowcaseEvent::CategoryChanged(Category::Dynamic))
        .expect("fetch");
    state.apply(ShowcaseEvent::FetchFailed { seq: request.seq });

    assert_eq!(state.status(), RequestStatus::Failure);
    assert_eq!(state.projects(), &[project("1")]);
    assert_eq!(state.view(), ShowcaseView::Failure);
}

#[test]
fn retry_uses_currently_selected_category() {
    let mut state = ShowcaseState::new();
    let first = state
        .apply(ShowcaseEvent::CategoryChanged(Category::Static))
        .expect("fetch");
    state.apply(ShowcaseEvent::FetchFailed { seq: first.seq });

    let second = state
        .apply(ShowcaseEvent::CategoryChanged(Category::React))
        .expect("fetch");
    state.apply(ShowcaseEvent::FetchFailed { seq: second.seq });

    let retry = state.apply(ShowcaseEvent::Retry).expect("fetch");
    assert_eq!(retry.category, Category::React);
    assert_eq!(state.status(), RequestStatus::InProgress);
}

#[test]
fn stale_success_does_not_overwrite_newer_result() {
    let mut state = ShowcaseState::new();
    let slow = state.apply(ShowcaseEvent::Mounted).expect("fetch");
    let fast = state
        .apply(ShowcaseEvent::CategoryChanged(Category::React))
        .expect("fetch");

    state.apply(ShowcaseEvent::FetchSucceeded {
        seq: fast.seq,
        projects: vec![project("react")],
    });
    let settled = state.clone();

    state.apply(ShowcaseEvent::FetchSucceeded {
        seq: slow.seq,
        projects: vec![project("all")],
    });
    assert_eq!(state, settled);
    assert_eq!(state.projects(), &[project("react")]);
}

#[test]
fn stale_result_while_newer_request_pending_keeps_loading() {
    let mut state = ShowcaseState::new();
    let stale = state.apply(ShowcaseEvent::Mounted).expect("fetch");
    let current = state
        .apply(ShowcaseEvent::CategoryChanged(Category::Responsive))
        .expect("fetch");

    state.apply(ShowcaseEvent::FetchSucceeded {
        seq: stale.seq,
        projects: vec![project("stale")],
    });
    assert_eq!(state.status(), RequestStatus::InProgress);
    assert!(state.projects().is_empty());

    state.apply(ShowcaseEvent::FetchFailed { seq: stale.seq });
    assert_eq!(state.status(), RequestStatus::InProgress);

    state.apply(ShowcaseEvent::FetchFailed { seq: current.seq });
    assert_eq!(state.status(), RequestStatus::Failure);
}

#[test]
fn results_before_any_request_are_ignored() {
    let mut state = ShowcaseState::new();
    state.apply(ShowcaseEvent::FetchSucceeded {
        seq: RequestSeq(1),
        projects: vec![project("1")],
    });
    assert_eq!(state, ShowcaseState::new());
}

#[test]
fn event_names_are_stable_for_logging() {
    assert_eq!(ShowcaseEvent::Mounted.name(), "mounted");
    assert_eq!(
        ShowcaseEvent::CategoryChanged(Category::All).name(),
        "category_changed"
    );
    assert_eq!(ShowcaseEvent::Retry.name(), "retry");
    assert_eq!(
        ShowcaseEvent::FetchFailed { seq: RequestSeq(1) }.name(),
        "fetch_failed"
    );
}
