use crate::scheduler::{FrameCallback, RafScheduler};
use crate::surface::CanvasSurface;
use crate::viewport::{ResizeCallback, WindowViewport};
use code_rain_core::{Animator, FieldParams, ZoneLayout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

type WebAnimator = Animator<CanvasSurface, RafScheduler, WindowViewport>;

/// Handle to a running code-rain backdrop. Dropping it (or `free()` from JS)
/// stops the animation.
#[wasm_bindgen]
pub struct Backdrop {
    animator: Rc<RefCell<WebAnimator>>,
    frame_cb: FrameCallback,
    resize_cb: ResizeCallback,
}

#[wasm_bindgen]
impl Backdrop {
    /// Cancel the pending frame and detach the resize listener.
    pub fn stop(&self) {
        if self.animator.borrow_mut().stop().is_some() {
            log::info!("[backdrop] stopped");
        }
        // Both closures are unreachable from JS now; release them.
        self.frame_cb.borrow_mut().take();
        self.resize_cb.borrow_mut().take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.animator.borrow().frames() as f64
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the backdrop on `canvas`, sized to the window.
pub fn mount(window: &web::Window, canvas: web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Backdrop> {
    let surface = CanvasSurface::new(canvas)?;
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let resize_cb: ResizeCallback = Rc::new(RefCell::new(None));

    let animator = Rc::new(RefCell::new(Animator::new(
        FieldParams::default(),
        ZoneLayout::default(),
        seed,
        RafScheduler::new(window.clone(), frame_cb.clone()),
        WindowViewport::new(window.clone(), resize_cb.clone()),
    )));

    // Closures hold weak references so the animator is owned by the handle alone.
    let tick_target = Rc::downgrade(&animator);
    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(animator) = tick_target.upgrade() {
            animator.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));

    let resize_target = Rc::downgrade(&animator);
    *resize_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(animator) = resize_target.upgrade() {
            animator.borrow_mut().on_resize();
        }
    }) as Box<dyn FnMut()>));

    log::info!("[backdrop] mounting seed={}", seed);
    animator.borrow_mut().start(surface);

    Ok(Backdrop {
        animator,
        frame_cb,
        resize_cb,
    })
}
