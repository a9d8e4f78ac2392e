use ratatui::style::Color;
use rollcall::constants::HINT_KEYS;
use rollcall::status::{StatusBoard, StatusKind};
use rollcall::ui::components::StatusBarComponent;
use std::time::Duration;

#[test]
fn test_hints_when_idle() {
    let bar = StatusBarComponent::new();
    let (text, style) = bar.content();
    assert_eq!(text, HINT_KEYS);
    assert_eq!(style.fg, Some(Color::Gray));
}

#[test]
fn test_busy_indicator() {
    let mut bar = StatusBarComponent::new();
    bar.update_data(None, true);
    let (text, style) = bar.content();
    assert!(text.contains("Working"));
    assert_eq!(style.fg, Some(Color::Yellow));
}

#[test]
fn test_message_colors() {
    let mut board = StatusBoard::new(Duration::from_secs(5));
    let mut bar = StatusBarComponent::new();

    let success = board.show(StatusKind::Success, "Signed up a@x.com for Chess Club").clone();
    bar.update_data(Some(&success), true);
    let (text, style) = bar.content();
    assert_eq!(text, "Signed up a@x.com for Chess Club");
    assert_eq!(style.fg, Some(Color::Green));

    let error = board.show(StatusKind::Error, "Not found").clone();
    bar.update_data(Some(&error), false);
    let (text, style) = bar.content();
    assert_eq!(text, "Not found");
    assert_eq!(style.fg, Some(Color::Red));
}
