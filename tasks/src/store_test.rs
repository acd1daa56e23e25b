use super::*;
use crate::consts::{KANBAN_STORAGE_KEY, TRACKER_STORAGE_KEY};
use crate::kanban::{KanbanBoard, KanbanPatch, KanbanTask, Priority, QuickAdd, Status};
use crate::tracker::{Category, TrackerDraft, TrackerList, TrackerTask};

/// Backend that refuses every write, like a full quota.
struct FullStore;

impl KeyValueStore for FullStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".to_owned()))
    }
}

fn edited_board() -> KanbanBoard {
    let mut board = KanbanBoard::from_tasks(KanbanBoard::seed());
    let id = board
        .add(&QuickAdd { title: "Deploy".to_owned(), status: Status::Doing, priority: Priority::High })
        .unwrap();
    board.update(&id, &KanbanPatch::tags_from_input("ops, release"));
    board.update(&id, &KanbanPatch::notes("after 18:00"));
    board
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn kanban_reload_reproduces_state() {
    let store = MemoryStore::new();
    let board = edited_board();
    save(&store, KANBAN_STORAGE_KEY, board.tasks()).unwrap();
    let reloaded = KanbanBoard::from_tasks(load_or_seed(&store, KANBAN_STORAGE_KEY, KanbanBoard::seed));
    assert_eq!(reloaded, board);
}

#[test]
fn tracker_reload_reproduces_state() {
    let store = MemoryStore::new();
    let mut list = TrackerList::from_tasks(TrackerList::seed());
    let id = list
        .add(&TrackerDraft { title: "Yoga".to_owned(), minutes: 40, category: Category::Health })
        .unwrap();
    list.toggle(&id);
    save(&store, TRACKER_STORAGE_KEY, list.tasks()).unwrap();
    let reloaded = TrackerList::from_tasks(load_or_seed(&store, TRACKER_STORAGE_KEY, TrackerList::seed));
    assert_eq!(reloaded, list);
}

#[test]
fn save_rewrites_whole_array() {
    let store = MemoryStore::new();
    let mut board = edited_board();
    save(&store, KANBAN_STORAGE_KEY, board.tasks()).unwrap();
    let first_id = board.tasks()[0].id.clone();
    board.remove(&first_id);
    save(&store, KANBAN_STORAGE_KEY, board.tasks()).unwrap();
    let raw = store.get_item(KANBAN_STORAGE_KEY).unwrap();
    let stored: Vec<KanbanTask> = decode(&raw).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|t| t.id != first_id));
}

#[test]
fn stored_layout_is_flat_json_array() {
    let task = KanbanTask {
        id: "abc".to_owned(),
        title: "Login Bug".to_owned(),
        status: Status::Doing,
        priority: Priority::High,
        tags: vec!["auth".to_owned()],
        notes: String::new(),
    };
    let raw = encode(&[task]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": "abc",
            "title": "Login Bug",
            "status": "doing",
            "priority": "high",
            "tags": ["auth"],
            "notes": ""
        }])
    );
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn missing_key_seeds() {
    let store = MemoryStore::new();
    assert!(matches!(load::<KanbanTask, _>(&store, KANBAN_STORAGE_KEY), Loaded::Empty));
    let tasks = load_or_seed(&store, KANBAN_STORAGE_KEY, KanbanBoard::seed);
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].title, "Landing Page fixen");
}

#[test]
fn malformed_json_seeds() {
    let store = MemoryStore::new();
    store.set_item(KANBAN_STORAGE_KEY, "{not json").unwrap();
    assert!(matches!(
        load::<KanbanTask, _>(&store, KANBAN_STORAGE_KEY),
        Loaded::Invalid(StoreError::Decode(_))
    ));
    assert_eq!(load_or_seed(&store, KANBAN_STORAGE_KEY, KanbanBoard::seed).len(), 3);
}

#[test]
fn wrong_shape_seeds() {
    let store = MemoryStore::new();
    store.set_item(TRACKER_STORAGE_KEY, r#"[{"id":"x","title":"T"}]"#).unwrap();
    let tasks: Vec<TrackerTask> = load_or_seed(&store, TRACKER_STORAGE_KEY, TrackerList::seed);
    assert_eq!(tasks[0].title, "Write weekly plan");
}

#[test]
fn unknown_enum_value_seeds() {
    let store = MemoryStore::new();
    store
        .set_item(KANBAN_STORAGE_KEY, r#"[{"id":"x","title":"T","status":"blocked","priority":"mid","tags":[],"notes":""}]"#)
        .unwrap();
    assert_eq!(load_or_seed(&store, KANBAN_STORAGE_KEY, KanbanBoard::seed).len(), 3);
}

#[test]
fn duplicate_ids_are_rejected() {
    let raw = r#"[
        {"id":"x","title":"A","status":"todo","priority":"mid","tags":[],"notes":""},
        {"id":"x","title":"B","status":"done","priority":"low","tags":[],"notes":""}
    ]"#;
    assert!(matches!(decode::<KanbanTask>(raw), Err(StoreError::DuplicateIds)));
}

#[test]
fn empty_array_is_valid_state() {
    let store = MemoryStore::new();
    store.set_item(KANBAN_STORAGE_KEY, "[]").unwrap();
    let tasks = load_or_seed(&store, KANBAN_STORAGE_KEY, KanbanBoard::seed);
    assert!(tasks.is_empty());
}

#[test]
fn backend_write_failure_surfaces() {
    let err = save(&FullStore, KANBAN_STORAGE_KEY, KanbanBoard::seed().as_slice()).unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));
    assert_eq!(err.to_string(), "storage backend rejected write: quota exceeded");
}

#[test]
fn keys_are_distinct() {
    assert_ne!(KANBAN_STORAGE_KEY, TRACKER_STORAGE_KEY);
}

#[test]
fn or_seed_hands_back_the_decode_error() {
    let store = MemoryStore::new();
    store.set_item(KANBAN_STORAGE_KEY, "{not json").unwrap();
    let (tasks, err) = load::<KanbanTask, _>(&store, KANBAN_STORAGE_KEY).or_seed(KanbanBoard::seed);
    assert_eq!(tasks.len(), 3);
    assert!(matches!(err, Some(StoreError::Decode(_))));

    let (tasks, err) = load::<KanbanTask, _>(&MemoryStore::new(), KANBAN_STORAGE_KEY).or_seed(KanbanBoard::seed);
    assert_eq!(tasks.len(), 3);
    assert!(err.is_none());
}
