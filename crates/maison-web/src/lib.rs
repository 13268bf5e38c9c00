#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use maison_core::{CursorSpring, ProductSpin};

pub mod controller;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod render;
pub mod view;

use controller::PageController;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("maison-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    view::build(&document)?;
    let controller = PageController::mount(&document)?;

    let canvas: web::HtmlCanvasElement = dom::by_id(&document, "viewer-canvas")
        .ok_or_else(|| anyhow!("missing #viewer-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{e:?}"))?;
    wire_canvas_resize(&canvas);

    // Leak a canvas clone to satisfy the 'static lifetime of the surface.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            // The rest of the page works without the viewer.
            log::error!("[viewer] WebGPU init error: {e:?}");
            None
        }
    };

    frame::start_loop(frame::FrameContext {
        document,
        canvas,
        controller,
        gpu,
        spin: ProductSpin::default(),
        cursor_spring: CursorSpring::new(),
        last_instant: Instant::now(),
    });
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
