//! Interactive page state and its transitions.
//!
//! One record owns everything the page reacts to: menu drawer, carousel
//! index, scroll-dependent nav style, theme, and the custom cursor. All
//! transitions are total and synchronous; the frontend re-renders after each
//! write. The record is created at mount and dropped at dispose, and event
//! callbacks reach it through `Weak` so anything that fires after dispose is
//! a no-op.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::constants::SCROLL_NAV_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

#[derive(Clone, Debug)]
pub struct PageState {
    pub menu_open: bool,
    pub current_slide: usize,
    pub slide_count: usize,
    pub scrolled: bool,
    pub dark_mode: bool,
    pub cursor: Vec2,
    pub cursor_variant: CursorVariant,
}

impl PageState {
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0, "carousel needs at least one item");
        Self {
            menu_open: false,
            current_slide: 0,
            slide_count: slide_count.max(1),
            scrolled: false,
            dark_mode: true,
            cursor: Vec2::ZERO,
            cursor_variant: CursorVariant::Default,
        }
    }

    pub fn advance_slide(&mut self) {
        self.current_slide = (self.current_slide + 1) % self.slide_count;
    }

    pub fn retreat_slide(&mut self) {
        self.current_slide = (self.current_slide + self.slide_count - 1) % self.slide_count;
    }

    /// Direct jump. Indices from the UI are always in range; anything else is
    /// a caller bug, bounded with modulo so the invariant holds regardless.
    pub fn set_slide(&mut self, index: usize) {
        debug_assert!(index < self.slide_count, "slide index out of range");
        if index >= self.slide_count {
            log::warn!(
                "[carousel] set_slide({index}) out of range (count {})",
                self.slide_count
            );
        }
        self.current_slide = index % self.slide_count;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Derived on every scroll event; strictly greater, so the threshold
    /// itself leaves the nav transparent.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_NAV_THRESHOLD;
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn set_cursor_variant(&mut self, variant: CursorVariant) {
        self.cursor_variant = variant;
    }
}

/// Shared handle the frontend threads through its event closures.
pub type SharedPageState = Rc<RefCell<PageState>>;

/// One autoplay beat. Callbacks hold `Weak` so a timer that fires after the
/// owning controller was dropped does nothing; returns whether it advanced.
pub fn autoplay_tick(state: &Weak<RefCell<PageState>>) -> bool {
    match state.upgrade() {
        Some(state) => {
            state.borrow_mut().advance_slide();
            true
        }
        None => false,
    }
}
