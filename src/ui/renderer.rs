//! Terminal setup and the main loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use super::app::AppComponent;
use super::core::{Component, EventHandler};
use crate::client::HttpRosterClient;
use crate::config::Config;
use crate::logger::Logger;
use crate::sync::SyncController;

/// Run the TUI until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let client = HttpRosterClient::from_config(&config.api).context("Failed to create roster client")?;
    log::info!("Using roster service at {}", client.base_url());
    let controller = SyncController::new(Arc::new(client), config.ui.status_message_ttl());
    let mut app = AppComponent::new(controller, logger);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let event = events.next_event().await?;
        app.handle_event(event)?;
        app.process_background_actions();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
