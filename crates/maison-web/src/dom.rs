use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn set_class_enabled(el: &web::Element, class: &str, enabled: bool) {
    let list = el.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
