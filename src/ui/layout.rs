//! Layout management and calculations

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the signup form gets, in columns
const FORM_MAX_WIDTH: u16 = 48;

/// Screen geometry shared by the app and its overlays
pub struct LayoutManager;

impl LayoutManager {
    /// Main area on top, one status line at the bottom
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Activity list on the left, signup form on the right
    #[must_use]
    pub fn top_pane_layout(area: Rect) -> Vec<Rect> {
        let form_width = (area.width * 2 / 5).min(FORM_MAX_WIDTH);
        let list_width = area.width.saturating_sub(form_width);

        Layout::horizontal([Constraint::Length(list_width), Constraint::Length(form_width)])
            .split(area)
            .to_vec()
    }

    /// Rectangle covering `percent_x` by `percent_y` of `area`, centered in it
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let [_, band, _] = Layout::vertical(Self::centered(percent_y)).areas(area);
        let [_, center, _] = Layout::horizontal(Self::centered(percent_x)).areas(band);
        center
    }

    fn centered(percent: u16) -> [Constraint; 3] {
        let margin = (100 - percent.min(100)) / 2;
        [
            Constraint::Percentage(margin),
            Constraint::Percentage(percent),
            Constraint::Percentage(margin),
        ]
    }
}
