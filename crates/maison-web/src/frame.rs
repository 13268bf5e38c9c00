//! requestAnimationFrame loop: product spin, cursor spring, GPU render.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use maison_core::{Camera, CursorSpring, ProductSpin};

use crate::controller::PageController;
use crate::render;
use crate::view;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    // The loop owns the controller; tearing the loop down releases every
    // subscription and the autoplay interval.
    pub controller: PageController,
    pub gpu: Option<render::GpuState<'static>>,
    pub spin: ProductSpin,
    pub cursor_spring: CursorSpring,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.spin.advance(dt_sec);

        // Present the raw pointer position through the spring.
        let target = self.controller.state().borrow().cursor;
        let smoothed = self.cursor_spring.step(target, dt_sec);
        view::place_cursor(&self.document, smoothed);

        if let Some(gpu) = self.gpu.as_mut() {
            let w = self.canvas.width();
            let h = self.canvas.height();
            gpu.resize_if_needed(w, h);
            let camera = Camera::product_viewer(w as f32 / h.max(1) as f32);
            if let Err(e) = gpu.render(
                camera.view_proj(),
                self.spin.primary_model(),
                self.spin.detail_model(),
            ) {
                log::error!("[viewer] render error: {e:?}");
            }
        }
    }
}

pub fn start_loop(ctx: FrameContext) {
    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
