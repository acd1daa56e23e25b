use super::*;

fn task(id: &str, title: &str, status: Status, priority: Priority) -> KanbanTask {
    KanbanTask {
        id: id.to_owned(),
        title: title.to_owned(),
        status,
        priority,
        tags: Vec::new(),
        notes: String::new(),
    }
}

fn sample_board() -> KanbanBoard {
    let mut login = task("b", "Login Bug", Status::Doing, Priority::High);
    login.tags = vec!["auth".to_owned()];
    login.notes = "Repro: Safari iOS".to_owned();
    KanbanBoard::from_tasks(vec![
        task("a", "Landing Page", Status::Todo, Priority::Mid),
        login,
        task("c", "Readme", Status::Done, Priority::Low),
    ])
}

fn ids(tasks: &[&KanbanTask]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

// =============================================================
// Status / Priority
// =============================================================

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Status::Doing).unwrap(), "\"doing\"");
    let back: Status = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(back, Status::Done);
}

#[test]
fn status_rejects_unknown_key() {
    assert!(serde_json::from_str::<Status>("\"blocked\"").is_err());
    assert_eq!(Status::parse("blocked"), None);
}

#[test]
fn status_parse_matches_as_str() {
    for status in Status::ALL {
        assert_eq!(Status::parse(status.as_str()), Some(status));
    }
}

#[test]
fn priority_labels() {
    assert_eq!(Priority::High.label(), "High");
    assert_eq!(Priority::Mid.label(), "Mid");
    assert_eq!(Priority::Low.label(), "Low");
    assert_eq!(Priority::parse("mid"), Some(Priority::Mid));
}

#[test]
fn task_without_tags_or_notes_deserializes() {
    let raw = r#"{"id":"x","title":"T","status":"todo","priority":"low"}"#;
    let t: KanbanTask = serde_json::from_str(raw).unwrap();
    assert!(t.tags.is_empty());
    assert_eq!(t.notes, "");
}

// =============================================================
// Seed
// =============================================================

#[test]
fn seed_has_one_task_per_column() {
    let seed = KanbanBoard::seed();
    assert_eq!(seed.len(), 3);
    let counts = StatusCounts::tally(&seed);
    assert_eq!(counts, StatusCounts { todo: 1, doing: 1, done: 1 });
    assert_eq!(seed[1].title, "Login Bug");
    assert_eq!(seed[1].priority, Priority::High);
    assert_eq!(seed[1].notes, "Repro: Safari iOS");
}

// =============================================================
// add
// =============================================================

#[test]
fn add_prepends_with_trimmed_title() {
    let mut board = sample_board();
    let draft = QuickAdd { title: "  Ship it  ".to_owned(), status: Status::Doing, priority: Priority::High };
    let id = board.add(&draft).unwrap();
    assert_eq!(board.len(), 4);
    let first = &board.tasks()[0];
    assert_eq!(first.id, id);
    assert_eq!(first.title, "Ship it");
    assert_eq!(first.status, Status::Doing);
    assert_eq!(first.priority, Priority::High);
    assert!(first.tags.is_empty());
    assert_eq!(first.notes, "");
}

#[test]
fn add_blank_title_is_noop() {
    let mut board = sample_board();
    let before = board.clone();
    let draft = QuickAdd { title: "   ".to_owned(), ..QuickAdd::default() };
    assert_eq!(board.add(&draft), None);
    assert_eq!(board, before);
}

#[test]
fn add_keeps_existing_ids() {
    let mut board = sample_board();
    let before: Vec<String> = board.tasks().iter().map(|t| t.id.clone()).collect();
    board.add(&QuickAdd { title: "New".to_owned(), ..QuickAdd::default() });
    let after: Vec<String> = board.tasks()[1..].iter().map(|t| t.id.clone()).collect();
    assert_eq!(before, after);
    assert!(!before.contains(&board.tasks()[0].id));
}

#[test]
fn quick_add_clear_restores_defaults() {
    let mut draft = QuickAdd { title: "x".to_owned(), status: Status::Done, priority: Priority::Low };
    draft.clear();
    assert_eq!(draft.title, "");
    assert_eq!(draft.status, Status::Todo);
    assert_eq!(draft.priority, Priority::Mid);
}

// =============================================================
// remove / update / move
// =============================================================

#[test]
fn remove_deletes_exactly_one() {
    let mut board = sample_board();
    assert!(board.remove("b"));
    assert_eq!(board.len(), 2);
    assert!(board.get("b").is_none());
    assert!(board.get("a").is_some());
    assert!(board.get("c").is_some());
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut board = sample_board();
    assert!(!board.remove("zzz"));
    assert_eq!(board.len(), 3);
}

#[test]
fn update_only_touches_patched_fields() {
    let mut board = sample_board();
    assert!(board.update("b", &KanbanPatch::title("Login crash")));
    let t = board.get("b").unwrap();
    assert_eq!(t.title, "Login crash");
    assert_eq!(t.status, Status::Doing);
    assert_eq!(t.priority, Priority::High);
    assert_eq!(t.tags, vec!["auth".to_owned()]);
    assert_eq!(t.notes, "Repro: Safari iOS");
}

#[test]
fn update_tags_from_comma_input() {
    let mut board = sample_board();
    board.update("a", &KanbanPatch::tags_from_input(" ui, ,frontend ,"));
    assert_eq!(board.get("a").unwrap().tags, vec!["ui".to_owned(), "frontend".to_owned()]);
}

#[test]
fn update_unknown_id_is_noop() {
    let mut board = sample_board();
    let before = board.clone();
    assert!(!board.update("nope", &KanbanPatch::notes("x")));
    assert_eq!(board, before);
}

#[test]
fn move_to_changes_status_and_keeps_order() {
    let mut board = sample_board();
    assert!(board.move_to("a", Status::Done));
    assert_eq!(board.get("a").unwrap().status, Status::Done);
    let order: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

// =============================================================
// filter / column / counts
// =============================================================

#[test]
fn filter_empty_query_returns_all() {
    let board = sample_board();
    assert_eq!(ids(&board.filter("   ")), vec!["a", "b", "c"]);
}

#[test]
fn filter_matches_title_tags_notes_and_keys_case_insensitively() {
    let board = sample_board();
    assert_eq!(ids(&board.filter("LANDING")), vec!["a"]);
    assert_eq!(ids(&board.filter("auth")), vec!["b"]);
    assert_eq!(ids(&board.filter(" safari ")), vec!["b"]);
    assert_eq!(ids(&board.filter("done")), vec!["c"]);
    assert_eq!(ids(&board.filter("high")), vec!["b"]);
}

#[test]
fn filter_is_pure() {
    let board = sample_board();
    let before = board.clone();
    let first = ids(&board.filter("e"));
    let second = ids(&board.filter("e"));
    assert_eq!(first, second);
    assert_eq!(board, before);
}

#[test]
fn column_splits_filtered_view() {
    let board = sample_board();
    let visible = board.filter("");
    assert_eq!(ids(&column(&visible, Status::Doing)), vec!["b"]);
    let narrowed = board.filter("readme");
    assert!(column(&narrowed, Status::Todo).is_empty());
}

#[test]
fn counts_follow_filtered_view() {
    let board = sample_board();
    let counts = StatusCounts::tally(board.filter("a").iter().copied());
    assert_eq!(counts.get(Status::Todo), 1);
    assert_eq!(counts.get(Status::Doing), 1);
    assert_eq!(counts.get(Status::Done), 1);
    let counts = StatusCounts::tally(board.filter("safari").iter().copied());
    assert_eq!(counts, StatusCounts { todo: 0, doing: 1, done: 0 });
}

// =============================================================
// tags / drag
// =============================================================

#[test]
fn parse_tags_drops_empty_segments() {
    assert_eq!(parse_tags(""), Vec::<String>::new());
    assert_eq!(parse_tags("a,b , c"), vec!["a", "b", "c"]);
}

#[test]
fn tag_line_formats_hashes() {
    let board = sample_board();
    assert_eq!(board.get("b").unwrap().tag_line().as_deref(), Some("#auth"));
    assert_eq!(board.get("a").unwrap().tag_line(), None);
}

#[test]
fn drag_drop_yields_move_once() {
    let mut drag = DragState::default();
    drag.start("a");
    assert_eq!(drag.dragging(), Some("a"));
    assert_eq!(drag.drop_on(Status::Done), Some(("a".to_owned(), Status::Done)));
    assert_eq!(drag.dragging(), None);
    assert_eq!(drag.drop_on(Status::Todo), None);
}
