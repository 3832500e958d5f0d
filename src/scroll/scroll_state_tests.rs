use super::*;
use proptest::prelude::*;

fn scrolled(content_lines: u32, viewport_height: u16) -> ScrollState {
    let mut state = ScrollState::new();
    state.update_bounds(content_lines, viewport_height);
    state
}

#[test]
fn test_follows_bottom_by_default() {
    let state = scrolled(50, 10);
    assert_eq!(state.max_offset, 40);
    assert_eq!(state.offset, 40);
}

#[test]
fn test_short_content_has_no_scroll() {
    let state = scrolled(5, 10);
    assert_eq!(state.max_offset, 0);
    assert_eq!(state.offset, 0);
}

#[test]
fn test_scroll_up_stops_following() {
    let mut state = scrolled(50, 10);
    state.scroll_up(5);
    assert_eq!(state.offset, 35);
    assert!(!state.follow);

    // new content does not move the view
    state.update_bounds(60, 10);
    assert_eq!(state.offset, 35);
}

#[test]
fn test_scroll_down_to_bottom_resumes_following() {
    let mut state = scrolled(50, 10);
    state.scroll_up(5);
    state.scroll_down(100);
    assert_eq!(state.offset, 40);
    assert!(state.follow);

    state.update_bounds(60, 10);
    assert_eq!(state.offset, 50);
}

#[test]
fn test_page_moves_half_viewport() {
    let mut state = scrolled(50, 10);
    state.page_up();
    assert_eq!(state.offset, 35);
    state.page_down();
    assert_eq!(state.offset, 40);
}

#[test]
fn test_jump_to_top_and_bottom() {
    let mut state = scrolled(50, 10);
    state.jump_to_top();
    assert_eq!(state.offset, 0);
    assert!(!state.follow);
    state.jump_to_bottom();
    assert_eq!(state.offset, 40);
    assert!(state.follow);
}

#[test]
fn test_reset_keeps_viewport() {
    let mut state = scrolled(50, 10);
    state.scroll_up(3);
    state.reset();
    assert_eq!(state.offset, 0);
    assert!(state.follow);
    assert_eq!(state.viewport_height, 10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_offset_never_exceeds_max(
        content in 0u32..500,
        viewport in 1u16..50,
        ups in 0u16..100,
        downs in 0u16..100,
    ) {
        let mut state = scrolled(content, viewport);
        state.scroll_up(ups);
        state.scroll_down(downs);
        prop_assert!(state.offset <= state.max_offset);
    }
}
