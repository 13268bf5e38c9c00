//! Page state controller: owns the state record and every event
//! registration, with an explicit mount/dispose lifecycle.
//!
//! Three sources feed the state — the window scroll signal, the pointer-move
//! signal, and the autoplay interval — plus the click and hover controls.
//! All of them are held as drop-to-deregister handles, so dispose tears the
//! whole page down synchronously and a late callback can never touch freed
//! state (the autoplay closure goes through `Weak`).

use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use maison_core::{
    autoplay_tick, CursorVariant, PageState, SharedPageState, AUTOPLAY_INTERVAL_MS, CAROUSEL_ITEMS,
};

use crate::dom;
use crate::events::{EventSubscription, IntervalHandle};
use crate::input;
use crate::view;

pub struct PageController {
    state: SharedPageState,
    subscriptions: Vec<EventSubscription>,
    _autoplay: IntervalHandle,
}

impl PageController {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let state: SharedPageState = Rc::new(std::cell::RefCell::new(PageState::new(
            CAROUSEL_ITEMS.len(),
        )));
        view::sync(document, &state.borrow());

        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let mut subscriptions = Vec::new();

        // Scroll: derived nav style, recomputed on every event.
        {
            let state = state.clone();
            let document = document.clone();
            subscriptions.push(EventSubscription::listen(&window, "scroll", move |_ev| {
                let offset = web::window()
                    .and_then(|w| w.page_y_offset().ok())
                    .unwrap_or(0.0);
                state.borrow_mut().on_scroll(offset);
                view::sync(&document, &state.borrow());
            })?);
        }

        // Pointer move: record the raw position; the frame loop presents it
        // through the cursor spring, so no class sync is needed here.
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "pointermove",
                move |ev| {
                    let ev: web::PointerEvent = ev.unchecked_into();
                    state
                        .borrow_mut()
                        .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
                },
            )?);
        }

        // Click controls.
        wire_click(&mut subscriptions, document, &state, "menu-toggle", |s| {
            s.toggle_menu();
            log::info!("[menu] open={}", s.menu_open);
        })?;
        wire_click(&mut subscriptions, document, &state, "theme-toggle", |s| {
            s.toggle_theme();
            log::info!("[theme] dark={}", s.dark_mode);
        })?;
        wire_click(&mut subscriptions, document, &state, "prev-slide", |s| {
            s.retreat_slide();
        })?;
        wire_click(&mut subscriptions, document, &state, "next-slide", |s| {
            s.advance_slide();
        })?;

        // Indicator dots jump straight to their slide.
        for dot in dom::query_all(document, ".carousel-dot") {
            let index = input::parse_slide_index(dot.get_attribute("data-slide-index"));
            let Some(index) = index else {
                log::warn!("[carousel] dot without a slide index");
                continue;
            };
            let state = state.clone();
            let document = document.clone();
            subscriptions.push(EventSubscription::listen(
                dot.unchecked_ref::<web::EventTarget>(),
                "click",
                move |_ev| {
                    state.borrow_mut().set_slide(index);
                    view::sync(&document, &state.borrow());
                },
            )?);
        }

        // Hover region of every interactive element swaps the cursor variant.
        for el in dom::query_all(document, "[data-interactive]") {
            let target: &web::EventTarget = el.unchecked_ref();
            let enter_state = state.clone();
            let enter_document = document.clone();
            subscriptions.push(EventSubscription::listen(
                target,
                "pointerenter",
                move |_ev| {
                    enter_state
                        .borrow_mut()
                        .set_cursor_variant(CursorVariant::Hover);
                    view::sync(&enter_document, &enter_state.borrow());
                },
            )?);
            let leave_state = state.clone();
            let leave_document = document.clone();
            subscriptions.push(EventSubscription::listen(
                target,
                "pointerleave",
                move |_ev| {
                    leave_state
                        .borrow_mut()
                        .set_cursor_variant(CursorVariant::Default);
                    view::sync(&leave_document, &leave_state.borrow());
                },
            )?);
        }

        // Autoplay runs on its own fixed schedule for the controller's whole
        // lifetime; manual navigation neither stops nor resets it.
        let autoplay = {
            let weak = Rc::downgrade(&state);
            let document = document.clone();
            IntervalHandle::every(AUTOPLAY_INTERVAL_MS, move || {
                if autoplay_tick(&weak) {
                    if let Some(state) = weak.upgrade() {
                        view::sync(&document, &state.borrow());
                    }
                }
            })?
        };

        log::info!(
            "[controller] mounted: {} subscriptions, autoplay every {AUTOPLAY_INTERVAL_MS} ms",
            subscriptions.len()
        );
        Ok(Self {
            state,
            subscriptions,
            _autoplay: autoplay,
        })
    }

    pub fn state(&self) -> SharedPageState {
        self.state.clone()
    }

    /// Synchronously deregister the interval and every listener. Dropping
    /// does the same; this name exists for call sites that tear down a page.
    pub fn dispose(mut self) {
        log::info!(
            "[controller] disposing {} subscriptions",
            self.subscriptions.len()
        );
        self.subscriptions.clear();
    }
}

fn wire_click(
    subscriptions: &mut Vec<EventSubscription>,
    document: &web::Document,
    state: &SharedPageState,
    id: &str,
    apply: impl Fn(&mut PageState) + 'static,
) -> anyhow::Result<()> {
    let el = dom::by_id(document, id).ok_or_else(|| anyhow!("missing #{id}"))?;
    let state = state.clone();
    let document = document.clone();
    subscriptions.push(EventSubscription::listen(
        el.unchecked_ref::<web::EventTarget>(),
        "click",
        move |_ev| {
            apply(&mut state.borrow_mut());
            view::sync(&document, &state.borrow());
        },
    )?);
    Ok(())
}
