//! DOM rendering surface.
//!
//! `build` creates the content-driven elements once at init; `sync` reflects
//! the current page state by toggling classes. Visual treatment (slide
//! cross-fade, drawer slide-in, theme palette) lives entirely in CSS keyed
//! off these classes.

use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use maison_core::{PageState, CAROUSEL_ITEMS, CATEGORIES, NAV_LINKS};

use crate::dom;
use crate::input;

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("createElement({tag}): {e:?}"))
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("appendChild: {e:?}"))
}

/// Build the carousel slides, indicator dots, nav links, and category cards
/// from the core content tables.
pub fn build(document: &web::Document) -> anyhow::Result<()> {
    build_nav_links(document, "nav-links")?;
    build_nav_links(document, "mobile-links")?;
    build_slides(document)?;
    build_dots(document)?;
    build_categories(document)?;
    Ok(())
}

fn build_nav_links(document: &web::Document, container_id: &str) -> anyhow::Result<()> {
    let container = dom::by_id(document, container_id)
        .ok_or_else(|| anyhow!("missing #{container_id}"))?;
    for label in NAV_LINKS {
        let link = create(document, "a")?;
        let _ = link.set_attribute("href", "#");
        let _ = link.set_attribute("data-interactive", "");
        link.set_text_content(Some(label));
        append(&container, &link)?;
    }
    Ok(())
}

fn build_slides(document: &web::Document) -> anyhow::Result<()> {
    let container =
        dom::by_id(document, "carousel").ok_or_else(|| anyhow!("missing #carousel"))?;
    for item in CAROUSEL_ITEMS {
        let slide = create(document, "div")?;
        let _ = slide.set_attribute("class", "hero-slide");

        let img = create(document, "img")?;
        let _ = img.set_attribute("src", item.image_url);
        let _ = img.set_attribute("alt", item.title);
        append(&slide, &img)?;

        let caption = create(document, "div")?;
        let _ = caption.set_attribute("class", "hero-caption");
        let subtitle = create(document, "h3")?;
        subtitle.set_text_content(Some(item.subtitle));
        let title = create(document, "h2")?;
        title.set_text_content(Some(item.title));
        let description = create(document, "p")?;
        description.set_text_content(Some(item.description));
        let cta = create(document, "button")?;
        let _ = cta.set_attribute("class", "cta");
        let _ = cta.set_attribute("data-interactive", "");
        cta.set_text_content(Some("DÉCOUVRIR"));
        for child in [&subtitle, &title, &description, &cta] {
            append(&caption, child)?;
        }
        append(&slide, &caption)?;
        append(&container, &slide)?;
    }
    Ok(())
}

fn build_dots(document: &web::Document) -> anyhow::Result<()> {
    let container =
        dom::by_id(document, "carousel-dots").ok_or_else(|| anyhow!("missing #carousel-dots"))?;
    for index in 0..CAROUSEL_ITEMS.len() {
        let dot = create(document, "button")?;
        let _ = dot.set_attribute("class", "carousel-dot");
        let _ = dot.set_attribute("data-slide-index", &index.to_string());
        let _ = dot.set_attribute("data-interactive", "");
        append(&container, &dot)?;
    }
    Ok(())
}

fn build_categories(document: &web::Document) -> anyhow::Result<()> {
    let container =
        dom::by_id(document, "categories").ok_or_else(|| anyhow!("missing #categories"))?;
    for category in CATEGORIES {
        let card = create(document, "div")?;
        let _ = card.set_attribute("class", "category-card");
        let _ = card.set_attribute("data-interactive", "");

        let img = create(document, "img")?;
        let _ = img.set_attribute("src", category.image_url);
        let _ = img.set_attribute("alt", category.title);
        append(&card, &img)?;

        let title = create(document, "h3")?;
        title.set_text_content(Some(category.title));
        append(&card, &title)?;
        let description = create(document, "p")?;
        description.set_text_content(Some(category.description));
        append(&card, &description)?;
        let explore = create(document, "button")?;
        explore.set_text_content(Some("EXPLORER"));
        append(&card, &explore)?;

        append(&container, &card)?;
    }
    Ok(())
}

/// Reflect the full state record onto the DOM. Cheap enough to run after
/// every transition; class writes the browser already has are no-ops.
pub fn sync(document: &web::Document, state: &PageState) {
    if let Some(body) = document.body() {
        dom::set_class_enabled(&body, "theme-light", !state.dark_mode);
    }
    if let Some(nav) = dom::by_id(document, "site-nav") {
        dom::set_class_enabled(&nav, "scrolled", state.scrolled);
    }
    if let Some(menu) = dom::by_id(document, "mobile-menu") {
        dom::set_class_enabled(&menu, "open", state.menu_open);
    }
    if let Some(toggle) = dom::by_id(document, "menu-toggle") {
        dom::set_class_enabled(&toggle, "open", state.menu_open);
    }
    for (index, slide) in dom::query_all(document, ".hero-slide").into_iter().enumerate() {
        dom::set_class_enabled(&slide, "active", index == state.current_slide);
    }
    for (index, dot) in dom::query_all(document, ".carousel-dot").into_iter().enumerate() {
        dom::set_class_enabled(&dot, "active", index == state.current_slide);
    }
    if let Some(cursor) = dom::by_id(document, "cursor") {
        dom::set_class_enabled(
            &cursor,
            "hover",
            state.cursor_variant == maison_core::CursorVariant::Hover,
        );
    }
}

/// Move the cursor ring. Driven from the frame loop with the spring-smoothed
/// position rather than the raw pointer.
pub fn place_cursor(document: &web::Document, position: Vec2) {
    if let Some(cursor) = dom::by_id(document, "cursor") {
        if let Some(el) = cursor.dyn_ref::<web::HtmlElement>() {
            let _ = el
                .style()
                .set_property("transform", &input::cursor_transform_css(position));
        }
    }
}
