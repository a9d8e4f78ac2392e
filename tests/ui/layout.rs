use ratatui::layout::Rect;
use rollcall::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_status_line() {
    let chunks = LayoutManager::main_layout(Rect::new(0, 0, 100, 30));
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].height, 29);
    assert_eq!(chunks[1].height, 1);
    assert_eq!(chunks[1].y, 29);
}

#[test]
fn test_top_pane_form_width_is_capped() {
    let chunks = LayoutManager::top_pane_layout(Rect::new(0, 0, 100, 29));
    assert_eq!(chunks[0].width, 60);
    assert_eq!(chunks[1].width, 40);

    let chunks = LayoutManager::top_pane_layout(Rect::new(0, 0, 200, 29));
    assert_eq!(chunks[0].width, 152);
    assert_eq!(chunks[1].width, 48);
}

#[test]
fn test_centered_rect_stays_inside() {
    let outer = Rect::new(0, 0, 100, 40);
    let inner = LayoutManager::centered_rect(80, 70, outer);
    assert!(inner.width <= 80 && inner.width > 0);
    assert!(inner.x >= 10);
    assert!(inner.bottom() <= outer.bottom());
}
