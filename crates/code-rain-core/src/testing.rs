//! In-memory host pieces for driving an animator without a browser.
//!
//! Each type is a cheap handle over shared state, so a test keeps one clone
//! for inspection while the animator owns the other.

use crate::geometry::Viewport;
use crate::host::{FrameRequest, FrameScheduler, GlyphStyle, Surface, ViewportSource};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Clear,
    Text {
        x: f32,
        y: f32,
        text: String,
        style: GlyphStyle,
    },
}

/// Surface that records every call.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    calls: Rc<RefCell<Vec<DrawCall>>>,
    style: Option<GlyphStyle>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Text draws recorded since the last clear.
    pub fn last_frame_texts(&self) -> Vec<DrawCall> {
        let calls = self.calls.borrow();
        let start = calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        calls[start..]
            .iter()
            .filter(|c| matches!(c, DrawCall::Text { .. }))
            .cloned()
            .collect()
    }

    pub fn text_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, DrawCall::Text { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.calls.borrow_mut().push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push(DrawCall::Clear);
    }

    fn set_style(&mut self, style: &GlyphStyle) {
        self.style = Some(*style);
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str) {
        let Some(style) = self.style else {
            return;
        };
        self.calls.borrow_mut().push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }
}

#[derive(Default)]
struct SchedulerState {
    next_id: u64,
    pending: Vec<FrameRequest>,
    cancelled: Vec<FrameRequest>,
}

/// Scheduler whose requests fire only when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<FrameRequest> {
        self.state.borrow().pending.clone()
    }

    pub fn cancelled(&self) -> Vec<FrameRequest> {
        self.state.borrow().cancelled.clone()
    }

    /// Remove the oldest pending request, as a host does right before running it.
    pub fn fire(&self) -> Option<FrameRequest> {
        let mut state = self.state.borrow_mut();
        if state.pending.is_empty() {
            None
        } else {
            Some(state.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let request = FrameRequest(state.next_id);
        state.pending.push(request);
        Some(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut state = self.state.borrow_mut();
        state.pending.retain(|r| *r != request);
        state.cancelled.push(request);
    }
}

#[derive(Default)]
struct ViewportState {
    size: Viewport,
    subscribers: usize,
}

/// Viewport whose size changes on demand.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl ManualViewport {
    pub fn new(size: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                size,
                subscribers: 0,
            })),
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().subscribers > 0
    }

    /// Change the size. Returns whether a listener is registered, i.e. whether
    /// the host would now deliver a resize callback.
    pub fn set_size(&self, size: Viewport) -> bool {
        let mut state = self.state.borrow_mut();
        state.size = size;
        state.subscribers > 0
    }
}

impl ViewportSource for ManualViewport {
    fn size(&self) -> Viewport {
        self.state.borrow().size
    }

    fn subscribe_resize(&mut self) {
        self.state.borrow_mut().subscribers += 1;
    }

    fn unsubscribe_resize(&mut self) {
        let mut state = self.state.borrow_mut();
        state.subscribers = state.subscribers.saturating_sub(1);
    }
}
