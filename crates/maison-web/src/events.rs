//! Subscription handles for DOM listeners and interval timers.
//!
//! Every registration returns a handle that deregisters exactly once when
//! dropped, so unmounting the controller can never leak a listener or leave
//! a timer firing into freed state.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that is removed when the handle drops. The closure
/// lives inside the handle, so the browser can never invoke it after drop.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({event}): {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setInterval` registration, cleared when the handle drops.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn every(interval_ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms,
            )
            .map_err(|e| anyhow!("setInterval: {e:?}"))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
