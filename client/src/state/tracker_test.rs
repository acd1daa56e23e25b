use super::*;
use tasks::consts::{DEFAULT_ESTIMATE_MINUTES, MAX_ESTIMATE_MINUTES};
use tasks::store::MemoryStore;
use tasks::timer::{TickOutcome, TimerMode};
use tasks::tracker::Category;

fn loaded_state() -> TrackerState {
    let mut state = TrackerState::default();
    state.load_from(&MemoryStore::new());
    state
}

#[test]
fn default_state_is_not_loaded() {
    let state = TrackerState::default();
    assert!(!state.loaded);
    assert!(state.list.is_empty());
    assert_eq!(state.filter, StatusFilter::All);
    assert!(!state.timer.is_running());
}

#[test]
fn load_from_empty_store_seeds() {
    let state = loaded_state();
    assert!(state.loaded);
    assert_eq!(state.list.len(), 3);
}

#[test]
fn load_from_duplicate_ids_seeds_and_reports() {
    let store = MemoryStore::new();
    store
        .set_item(
            TRACKER_STORAGE_KEY,
            r#"[{"id":"a","title":"x","done":false,"minutes":10,"category":"work"},
                {"id":"a","title":"y","done":true,"minutes":10,"category":"work"}]"#,
        )
        .unwrap();
    let mut state = TrackerState::default();
    let err = state.load_from(&store);
    assert!(matches!(err, Some(store::StoreError::DuplicateIds)));
    assert_eq!(state.list.tasks()[0].title, "Write weekly plan");
}

#[test]
fn submit_parses_and_clamps_minutes_input() {
    let mut state = loaded_state();
    state.draft.title = "Deep work".to_owned();
    state.draft.category = Category::Study;
    state.minutes_input = "1000".to_owned();
    let id = state.submit().unwrap();
    let task = state.task(&id).unwrap();
    assert_eq!(task.minutes, MAX_ESTIMATE_MINUTES);
    assert_eq!(task.category, Category::Study);
    assert_eq!(state.minutes_input, "");
    assert_eq!(state.draft, TrackerDraft::default());
}

#[test]
fn submit_with_garbage_minutes_uses_default() {
    let mut state = loaded_state();
    state.draft.title = "Read".to_owned();
    state.minutes_input = "lots".to_owned();
    let id = state.submit().unwrap();
    assert_eq!(state.task(&id).unwrap().minutes, DEFAULT_ESTIMATE_MINUTES);
}

#[test]
fn submit_blank_title_keeps_input() {
    let mut state = loaded_state();
    state.minutes_input = "40".to_owned();
    assert_eq!(state.submit(), None);
    assert_eq!(state.minutes_input, "40");
    assert_eq!(state.list.len(), 3);
}

#[test]
fn rejected_submit_does_not_leak_estimate_into_next_add() {
    let mut state = loaded_state();
    state.minutes_input = "1000".to_owned();
    assert_eq!(state.submit(), None);
    assert_eq!(state.draft.minutes, DEFAULT_ESTIMATE_MINUTES);

    state.minutes_input.clear();
    state.draft.title = "Plan sprint".to_owned();
    let id = state.submit().unwrap();
    assert_eq!(state.task(&id).unwrap().minutes, DEFAULT_ESTIMATE_MINUTES);
}

#[test]
fn filter_and_query_narrow_visible_rows() {
    let mut state = loaded_state();
    state.filter = StatusFilter::Done;
    assert_eq!(state.visible().len(), 1);
    state.filter = StatusFilter::Open;
    state.query = "chapter".to_owned();
    assert_eq!(state.visible_ids().len(), 1);
    assert_eq!(state.stats().total, 3);
}

#[test]
fn toggle_and_remove_update_stats() {
    let mut state = loaded_state();
    let id = state.list.tasks()[0].id.clone();
    assert!(state.toggle(&id));
    assert_eq!(state.stats().done, 2);
    assert!(state.remove(&id));
    assert_eq!(state.stats().total, 2);
}

#[test]
fn timer_lives_in_state() {
    let mut state = loaded_state();
    state.timer.start();
    assert_eq!(state.timer.tick(), TickOutcome::Counting);
    state.timer.skip();
    assert_eq!(state.timer.mode(), TimerMode::Break);
}
