use crate::common::chess_club;
use crate::{buffer_text, key};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use rollcall::constants::{ERROR_LOAD_ACTIVITIES, TEXT_LOADING_ACTIVITIES, TEXT_NO_PARTICIPANTS};
use rollcall::render::{render_roster, RemoveTarget};
use rollcall::roster::Roster;
use rollcall::sync::{Action, ViewPhase};
use rollcall::ui::components::ActivityListComponent;
use rollcall::ui::core::Component;

fn ready_list(roster: &Roster) -> ActivityListComponent {
    let mut list = ActivityListComponent::new();
    list.update_data(&ViewPhase::Ready, &render_roster(roster));
    list
}

fn draw(list: &mut ActivityListComponent) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            list.render(f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn removal_of(action: Action) -> Option<RemoveTarget> {
    match action {
        Action::RemoveParticipant(target) => Some(target),
        _ => None,
    }
}

fn target(email: &str) -> Option<RemoveTarget> {
    Some(RemoveTarget {
        activity: "Chess Club".to_string(),
        email: email.to_string(),
    })
}

#[test]
fn test_remove_key_carries_rendered_target() {
    let mut list = ready_list(&chess_club(&["b@x.com", "a@x.com"]));

    assert_eq!(removal_of(list.handle_key_events(key(KeyCode::Char('d')))), target("a@x.com"));

    assert!(matches!(list.handle_key_events(key(KeyCode::Char('j'))), Action::None));
    assert_eq!(removal_of(list.handle_key_events(key(KeyCode::Delete))), target("b@x.com"));

    // No wrap past the last participant
    list.handle_key_events(key(KeyCode::Down));
    assert_eq!(list.selected_target(), target("b@x.com"));

    list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(list.selected_target(), target("a@x.com"));

    list.handle_key_events(key(KeyCode::End));
    assert_eq!(removal_of(list.handle_key_events(key(KeyCode::Char('x')))), target("b@x.com"));

    list.handle_key_events(key(KeyCode::Home));
    assert_eq!(list.selected_target(), target("a@x.com"));
}

#[test]
fn test_remove_key_without_participants() {
    let mut list = ready_list(&chess_club(&[]));
    assert!(list.selected_target().is_none());
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None));
}

#[test]
fn test_selection_clamped_after_refresh() {
    let mut list = ready_list(&chess_club(&["a@x.com", "b@x.com"]));
    list.handle_key_events(key(KeyCode::End));
    assert_eq!(list.selected_target(), target("b@x.com"));

    list.update_data(&ViewPhase::Ready, &render_roster(&chess_club(&["a@x.com"])));
    assert_eq!(list.selected_target(), target("a@x.com"));
}

#[test]
fn test_render_shows_activity_block() {
    let mut list = ready_list(&chess_club(&["a@x.com"]));
    let text = buffer_text(&draw(&mut list));

    assert!(text.contains("Chess Club"));
    assert!(text.contains("Schedule: Mon"));
    assert!(text.contains("Availability: 1 spots left"));
    assert!(text.contains("a@x.com"));
    assert!(text.contains("[d] remove"));
}

#[test]
fn test_render_placeholder_for_empty_activity() {
    let mut list = ready_list(&chess_club(&[]));
    let text = buffer_text(&draw(&mut list));

    assert!(text.contains("Availability: 2 spots left"));
    assert!(text.contains(TEXT_NO_PARTICIPANTS));
    assert!(!text.contains("[d] remove"));
}

#[test]
fn test_render_is_idempotent() {
    let mut list = ready_list(&chess_club(&["c@x.com", "a@x.com", "b@x.com"]));
    let first = draw(&mut list);
    let second = draw(&mut list);
    assert_eq!(first, second);

    // Re-applying the same view paints the same frame
    list.update_data(&ViewPhase::Ready, &render_roster(&chess_club(&["b@x.com", "c@x.com", "a@x.com"])));
    assert_eq!(draw(&mut list), first);
}

#[test]
fn test_render_replaces_previous_roster() {
    let mut list = ready_list(&chess_club(&["a@x.com"]));
    draw(&mut list);

    list.update_data(&ViewPhase::Ready, &render_roster(&chess_club(&["z@x.com"])));
    let text = buffer_text(&draw(&mut list));
    assert!(text.contains("z@x.com"));
    assert!(!text.contains("a@x.com"));
}

#[test]
fn test_render_loading_and_error_phases() {
    let mut list = ActivityListComponent::new();
    let text = buffer_text(&draw(&mut list));
    assert!(text.contains(TEXT_LOADING_ACTIVITIES));

    list.update_data(&ViewPhase::LoadError(ERROR_LOAD_ACTIVITIES.to_string()), &Default::default());
    let text = buffer_text(&draw(&mut list));
    assert!(text.contains(ERROR_LOAD_ACTIVITIES));
    assert!(!text.contains(TEXT_LOADING_ACTIVITIES));

    list.update_data(&ViewPhase::Ready, &render_roster(&Roster::new()));
    let text = buffer_text(&draw(&mut list));
    assert!(text.contains("No activities available"));
}
