// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn cursor_translate_centers_the_ring() {
    let p = cursor_translate(Vec2::new(100.0, 40.0));
    assert_eq!(p, Vec2::new(84.0, 24.0));
}

#[test]
fn cursor_transform_css_is_a_translate3d() {
    let css = cursor_transform_css(Vec2::new(116.0, 216.0));
    assert_eq!(css, "translate3d(100.0px, 200.0px, 0)");
}

#[test]
fn parse_slide_index_accepts_valid_attributes() {
    assert_eq!(parse_slide_index(Some("0".to_string())), Some(0));
    assert_eq!(parse_slide_index(Some(" 2 ".to_string())), Some(2));
}

#[test]
fn parse_slide_index_rejects_garbage() {
    assert_eq!(parse_slide_index(None), None);
    assert_eq!(parse_slide_index(Some(String::new())), None);
    assert_eq!(parse_slide_index(Some("-1".to_string())), None);
    assert_eq!(parse_slide_index(Some("two".to_string())), None);
}
