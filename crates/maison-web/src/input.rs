use glam::Vec2;

// Cursor ring is 32 px; keep in sync with maison_core::CURSOR_HALF_SIZE_PX.
// Duplicated as a literal here so this module stays include!-testable on the
// host without pulling the whole core crate in.
const CURSOR_HALF_SIZE_PX: f32 = 16.0;

/// Top-left translation that centers the cursor ring on a pointer position.
#[inline]
pub fn cursor_translate(pos: Vec2) -> Vec2 {
    pos - Vec2::splat(CURSOR_HALF_SIZE_PX)
}

/// Slide index carried by an indicator dot's `data-slide-index` attribute.
#[inline]
pub fn parse_slide_index(attr: Option<String>) -> Option<usize> {
    attr.as_deref().and_then(|s| s.trim().parse::<usize>().ok())
}

/// CSS `transform` value for the cursor element.
#[inline]
pub fn cursor_transform_css(pos: Vec2) -> String {
    let p = cursor_translate(pos);
    format!("translate3d({:.1}px, {:.1}px, 0)", p.x, p.y)
}
