use ratatui::layout::Rect;

use eventist::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_one_status_line() {
    let screen = Rect::new(0, 0, 120, 40);
    let chunks = LayoutManager::main_layout(screen);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], Rect::new(0, 0, 120, 39));
    assert_eq!(chunks[1], Rect::new(0, 39, 120, 1));
}

#[test]
fn test_top_pane_layout_splits_list_and_featured() {
    let top = Rect::new(0, 0, 120, 39);
    let chunks = LayoutManager::top_pane_layout(top, 40);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].width, 80);
    assert_eq!(chunks[1].width, 40);
    assert_eq!(chunks[0].x, 0);
    assert_eq!(chunks[1].x, 80);
}

#[test]
fn test_top_pane_layout_clamps_featured_width() {
    let top = Rect::new(0, 0, 200, 39);

    // Below the minimum
    let chunks = LayoutManager::top_pane_layout(top, 5);
    assert_eq!(chunks[1].width, 24);

    // Above the maximum
    let chunks = LayoutManager::top_pane_layout(top, 150);
    assert_eq!(chunks[1].width, 80);
}

#[test]
fn test_top_pane_layout_keeps_minimum_list_width() {
    // Narrow terminal: the featured panel shrinks so the list keeps 20 columns
    let top = Rect::new(0, 0, 50, 39);
    let chunks = LayoutManager::top_pane_layout(top, 40);

    assert_eq!(chunks[0].width, 20);
    assert_eq!(chunks[1].width, 30);
}

#[test]
fn test_centered_rect_is_inside_parent() {
    let screen = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect(70, 70, screen);

    assert!(popup.x > 0);
    assert!(popup.y > 0);
    assert!(popup.right() <= screen.right());
    assert!(popup.bottom() <= screen.bottom());
    assert_eq!(popup.width, 70);
}

#[test]
fn test_centered_rect_lines_fixes_the_height() {
    let screen = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect_lines(50, 9, screen);

    assert_eq!(popup.height, 9);
    assert_eq!(popup.width, 50);
}

#[test]
fn test_tooltip_sits_right_and_below_the_cursor() {
    let screen = Rect::new(0, 0, 120, 40);
    let rect = LayoutManager::tooltip_rect(10, 10, 44, 6, screen);

    assert_eq!(rect.x, 12);
    assert_eq!(rect.y, 11);
    assert_eq!(rect.width, 44);
    assert_eq!(rect.height, 6);
}

#[test]
fn test_tooltip_flips_left_near_the_right_edge() {
    let screen = Rect::new(0, 0, 120, 40);
    let rect = LayoutManager::tooltip_rect(110, 10, 44, 6, screen);

    // 110 - (44 + 2) = 64
    assert_eq!(rect.x, 64);
    assert!(rect.right() <= screen.right());
}

#[test]
fn test_tooltip_flips_up_near_the_bottom_edge() {
    let screen = Rect::new(0, 0, 120, 40);
    let rect = LayoutManager::tooltip_rect(10, 38, 44, 6, screen);

    // 38 - (6 + 1) = 31
    assert_eq!(rect.y, 31);
    assert!(rect.bottom() <= screen.bottom());
}

#[test]
fn test_tooltip_stays_on_screen_in_a_corner() {
    let screen = Rect::new(0, 0, 60, 20);
    let rect = LayoutManager::tooltip_rect(59, 19, 44, 6, screen);

    assert!(rect.right() <= screen.right());
    assert!(rect.bottom() <= screen.bottom());
}

#[test]
fn test_tooltip_never_exceeds_the_screen() {
    let screen = Rect::new(0, 0, 30, 5);
    let rect = LayoutManager::tooltip_rect(2, 2, 44, 6, screen);

    assert!(rect.width <= screen.width);
    assert!(rect.height <= screen.height);
    assert!(rect.right() <= screen.right());
    assert!(rect.bottom() <= screen.bottom());
}
