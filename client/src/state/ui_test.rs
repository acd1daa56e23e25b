use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}

#[test]
fn variant_default_is_board() {
    assert_eq!(Variant::default(), Variant::Board);
}

#[test]
fn variant_routes_are_distinct() {
    assert_eq!(Variant::Board.href(), "/");
    assert_eq!(Variant::Tracker.href(), "/tracker");
    assert_ne!(Variant::Board.label(), Variant::Tracker.label());
}

#[test]
fn variant_taglines_name_the_version() {
    assert!(Variant::Board.tagline().starts_with("Version A"));
    assert!(Variant::Tracker.tagline().starts_with("Version B"));
}
