use crate::common::{chess_club, receipt, Call, FakeRosterApi};
use crate::{buffer_text, ctrl, key};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use rollcall::client::RosterApi;
use rollcall::constants::{TEXT_LOADING_ACTIVITIES, TEXT_NO_PARTICIPANTS};
use rollcall::logger::Logger;
use rollcall::sync::{Action, SyncController};
use rollcall::ui::core::{Component, EventType};
use rollcall::ui::{AppComponent, Focus};
use std::sync::Arc;
use std::time::Duration;

fn app_with(api: &Arc<FakeRosterApi>) -> AppComponent {
    let api: Arc<dyn RosterApi> = api.clone();
    AppComponent::new(SyncController::new(api, Duration::from_secs(5)), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

/// Dispatch background results until one matches.
async fn pump_until<F>(app: &mut AppComponent, matches: F)
where
    F: Fn(&Action) -> bool,
{
    loop {
        let action = tokio::time::timeout(Duration::from_secs(60), app.controller_mut().next_background_action())
            .await
            .expect("timed out waiting for a background action")
            .expect("action channel closed");
        let done = matches(&action);
        app.dispatch(action);
        if done {
            return;
        }
    }
}

async fn loaded_app(api: &Arc<FakeRosterApi>) -> AppComponent {
    let mut app = app_with(api);
    app.start();
    pump_until(&mut app, |a| matches!(a, Action::InitialRosterLoaded(_))).await;
    app
}

#[tokio::test(start_paused = true)]
async fn shows_loading_until_first_roster() {
    let api = Arc::new(FakeRosterApi::new());
    api.push_list(Ok(chess_club(&["a@x.com"])));

    let mut app = app_with(&api);
    app.start();
    assert!(screen(&mut app).contains(TEXT_LOADING_ACTIVITIES));

    pump_until(&mut app, |a| matches!(a, Action::InitialRosterLoaded(_))).await;
    let text = screen(&mut app);
    assert!(!text.contains(TEXT_LOADING_ACTIVITIES));
    assert!(text.contains("Availability: 1 spots left"));
    assert!(text.contains("a@x.com"));
}

#[tokio::test(start_paused = true)]
async fn tab_cycles_focus() {
    let api = Arc::new(FakeRosterApi::new());
    let mut app = app_with(&api);
    assert_eq!(app.focus(), Focus::Activities);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Email);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Activity);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Activities);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Activity);
}

#[tokio::test(start_paused = true)]
async fn typing_in_email_does_not_quit() {
    let api = Arc::new(FakeRosterApi::new());
    let mut app = app_with(&api);

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "q@x.com");
    assert!(!app.should_quit());
    assert_eq!(app.controller().form().email, "q@x.com");

    // Esc leaves the form, then q quits
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Activities);
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_quits_from_the_form() {
    let api = Arc::new(FakeRosterApi::new());
    let mut app = app_with(&api);

    press(&mut app, KeyCode::Tab);
    app.handle_event(EventType::Key(ctrl('c'))).unwrap();
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn log_panel_captures_keys() {
    let api = Arc::new(FakeRosterApi::new());
    api.push_list(Ok(chess_club(&["a@x.com"])));
    let mut app = loaded_app(&api).await;

    press(&mut app, KeyCode::Char('G'));
    assert!(app.logs_visible());

    // Keys go to the panel, not the list
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.logs_visible());
    assert!(!app.should_quit());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(api.mutation_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn remove_key_round_trip() {
    let api = Arc::new(FakeRosterApi::new());
    api.push_list(Ok(chess_club(&["a@x.com"])));
    api.push_removal("a@x.com", Ok(receipt("Removed a@x.com from Chess Club")));
    api.push_list(Ok(chess_club(&[])));

    let mut app = loaded_app(&api).await;
    press(&mut app, KeyCode::Char('d'));

    pump_until(&mut app, |a| matches!(a, Action::MutationSucceeded { .. })).await;
    assert!(screen(&mut app).contains("Removed a@x.com from Chess Club"));

    pump_until(&mut app, |a| matches!(a, Action::RosterLoaded(_))).await;
    let text = screen(&mut app);
    assert!(text.contains(TEXT_NO_PARTICIPANTS));
    assert!(text.contains("Availability: 2 spots left"));

    assert_eq!(
        api.calls()[1],
        Call::Remove {
            activity: "Chess Club".to_string(),
            email: "a@x.com".to_string(),
        }
    );

    // The message goes away on a later tick
    tokio::time::advance(Duration::from_millis(5001)).await;
    app.handle_event(EventType::Tick).unwrap();
    assert!(!screen(&mut app).contains("Removed a@x.com from Chess Club"));
}

#[tokio::test(start_paused = true)]
async fn signup_through_the_form() {
    let api = Arc::new(FakeRosterApi::new());
    api.push_list(Ok(chess_club(&[])));
    api.push_signup("b@x.com", Ok(receipt("Signed up b@x.com for Chess Club")));
    api.push_list(Ok(chess_club(&["b@x.com"])));

    let mut app = loaded_app(&api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert!(screen(&mut app).contains("Email is required"));

    type_text(&mut app, "b@x.com");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    pump_until(&mut app, |a| matches!(a, Action::RosterLoaded(_))).await;
    let text = screen(&mut app);
    assert!(text.contains("Signed up b@x.com for Chess Club"));
    assert!(text.contains("b@x.com  [d] remove"));
    assert!(!text.contains("Email is required"));
    assert!(app.controller().form().email.is_empty());
}

#[tokio::test(start_paused = true)]
async fn log_panel_clears_on_c() {
    let api = Arc::new(FakeRosterApi::new());
    let logger = Logger::new();
    let controller_api: Arc<dyn RosterApi> = api.clone();
    let mut app = AppComponent::new(SyncController::new(controller_api, Duration::from_secs(5)), logger.clone());
    logger.log("roster refreshed".to_string());

    press(&mut app, KeyCode::Char('G'));
    assert!(screen(&mut app).contains("roster refreshed"));

    press(&mut app, KeyCode::Char('c'));
    assert!(app.logs_visible());
    assert!(logger.get_logs().is_empty());
    assert!(!screen(&mut app).contains("roster refreshed"));
}
