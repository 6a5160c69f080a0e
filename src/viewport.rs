use code_rain_core::{Viewport, ViewportSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `window.innerWidth/innerHeight` plus the window `resize` event.
pub struct WindowViewport {
    window: web::Window,
    callback: ResizeCallback,
    subscribed: bool,
}

impl WindowViewport {
    pub fn new(window: web::Window, callback: ResizeCallback) -> Self {
        Self {
            window,
            callback,
            subscribed: false,
        }
    }
}

impl ViewportSource for WindowViewport {
    fn size(&self) -> Viewport {
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Viewport::new(dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    fn subscribe_resize(&mut self) {
        if self.subscribed {
            return;
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            match self
                .window
                .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            {
                Ok(()) => self.subscribed = true,
                Err(e) => log::error!("resize listener error: {:?}", e),
            }
        }
    }

    fn unsubscribe_resize(&mut self) {
        if !self.subscribed {
            return;
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        self.subscribed = false;
    }
}
