// Host-side tests for the page state record and its transitions.

use maison_core::{autoplay_tick, CursorVariant, PageState, CAROUSEL_ITEMS};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn default_state_at_creation() {
    let s = PageState::new(CAROUSEL_ITEMS.len());
    assert!(!s.menu_open);
    assert_eq!(s.current_slide, 0);
    assert!(!s.scrolled);
    assert!(s.dark_mode, "dark theme is the default");
    assert_eq!(s.cursor_variant, CursorVariant::Default);
}

#[test]
fn advance_is_cyclic_over_item_count() {
    for n in 1..=5usize {
        for start in 0..n {
            let mut s = PageState::new(n);
            s.set_slide(start);
            for _ in 0..n {
                s.advance_slide();
            }
            assert_eq!(s.current_slide, start, "n={n} start={start}");
        }
    }
}

#[test]
fn advance_and_retreat_are_inverse() {
    for n in 1..=5usize {
        for start in 0..n {
            let mut s = PageState::new(n);
            s.set_slide(start);
            s.advance_slide();
            s.retreat_slide();
            assert_eq!(s.current_slide, start);
            s.retreat_slide();
            s.advance_slide();
            assert_eq!(s.current_slide, start);
        }
    }
}

#[test]
fn set_slide_jumps_exactly() {
    let mut s = PageState::new(3);
    for i in [2usize, 0, 1, 1, 2] {
        s.set_slide(i);
        assert_eq!(s.current_slide, i);
    }
}

#[test]
fn three_item_walk_matches_page_behavior() {
    let mut s = PageState::new(3);
    s.advance_slide();
    s.advance_slide();
    s.advance_slide();
    assert_eq!(s.current_slide, 0);
    s.advance_slide();
    assert_eq!(s.current_slide, 1);

    let mut s = PageState::new(3);
    s.retreat_slide();
    assert_eq!(s.current_slide, 2, "retreat from 0 wraps to the last item");
}

#[test]
fn theme_and_menu_toggles_are_involutions() {
    let mut s = PageState::new(3);
    let dark = s.dark_mode;
    s.toggle_theme();
    assert_eq!(s.dark_mode, !dark);
    s.toggle_theme();
    assert_eq!(s.dark_mode, dark);

    let open = s.menu_open;
    s.toggle_menu();
    s.toggle_menu();
    assert_eq!(s.menu_open, open);
}

#[test]
fn scroll_threshold_is_strict() {
    let mut s = PageState::new(3);
    for (offset, expect) in [
        (0.0, false),
        (49.9, false),
        (50.0, false), // the boundary itself stays transparent
        (50.1, true),
        (500.0, true),
        (0.0, false), // and back
    ] {
        s.on_scroll(offset);
        assert_eq!(s.scrolled, expect, "offset={offset}");
    }
}

#[test]
fn pointer_move_records_last_position() {
    let mut s = PageState::new(3);
    s.on_pointer_move(12.5, -3.0);
    assert_eq!(s.cursor.x, 12.5);
    assert_eq!(s.cursor.y, -3.0);
    s.on_pointer_move(0.0, 800.0);
    assert_eq!(s.cursor.y, 800.0);
}

#[test]
fn cursor_variant_follows_hover_region() {
    let mut s = PageState::new(3);
    s.set_cursor_variant(CursorVariant::Hover);
    assert_eq!(s.cursor_variant, CursorVariant::Hover);
    s.set_cursor_variant(CursorVariant::Default);
    assert_eq!(s.cursor_variant, CursorVariant::Default);
}

#[test]
fn autoplay_tick_advances_live_state() {
    let state = Rc::new(RefCell::new(PageState::new(3)));
    let weak = Rc::downgrade(&state);
    assert!(autoplay_tick(&weak));
    assert_eq!(state.borrow().current_slide, 1);
}

#[test]
fn late_timer_fire_after_dispose_is_a_noop() {
    let state = Rc::new(RefCell::new(PageState::new(3)));
    let weak = Rc::downgrade(&state);
    drop(state);
    // Simulated stray interval callback delivered after teardown.
    assert!(!autoplay_tick(&weak));
}

#[test]
fn manual_navigation_and_autoplay_share_the_same_arithmetic() {
    // The interval is independent of manual controls; interleaving them is
    // just repeated advance/retreat on one index.
    let state = Rc::new(RefCell::new(PageState::new(3)));
    let weak = Rc::downgrade(&state);
    state.borrow_mut().set_slide(2);
    assert!(autoplay_tick(&weak));
    assert_eq!(state.borrow().current_slide, 0);
    state.borrow_mut().retreat_slide();
    assert_eq!(state.borrow().current_slide, 2);
}
