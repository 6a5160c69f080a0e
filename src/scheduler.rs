use code_rain_core::{FrameRequest, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot for the closure `requestAnimationFrame` invokes. Filled once the
/// animator it calls into exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let slot = self.callback.borrow();
        let tick = slot.as_ref()?;
        match self.window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameRequest(id as u64)),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        _ = self.window.cancel_animation_frame(request.0 as i32);
    }
}
