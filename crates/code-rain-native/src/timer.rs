//! Fixed-rate stand-ins for the browser's refresh signal and window size.

use code_rain_core::{FrameRequest, FrameScheduler, Viewport, ViewportSource};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct TimerState {
    interval: Duration,
    next_id: u64,
    last_due: Option<Instant>,
    pending: Option<(FrameRequest, Instant)>,
}

/// Schedules each frame one interval after the previous deadline.
#[derive(Clone, Debug)]
pub struct TimerScheduler {
    state: Rc<RefCell<TimerState>>,
}

impl TimerScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: Rc::new(RefCell::new(TimerState {
                interval,
                next_id: 0,
                last_due: None,
                pending: None,
            })),
        }
    }

    /// Take the pending request's deadline; the driver sleeps until then and runs the frame.
    pub fn take_due(&self) -> Option<Instant> {
        self.state.borrow_mut().pending.take().map(|(_, due)| due)
    }
}

impl FrameScheduler for TimerScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let mut state = self.state.borrow_mut();
        let now = Instant::now();
        // Keep a steady cadence, but never queue frames in the past after a stall.
        let due = state
            .last_due
            .map_or(now, |last| last + state.interval)
            .max(now);
        state.last_due = Some(due);
        state.next_id += 1;
        let request = FrameRequest(state.next_id);
        state.pending = Some((request, due));
        Some(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut state = self.state.borrow_mut();
        if matches!(state.pending, Some((r, _)) if r == request) {
            state.pending = None;
        }
    }
}

/// A viewport that never changes size.
#[derive(Debug)]
pub struct FixedViewport {
    size: Viewport,
}

impl FixedViewport {
    pub fn new(size: Viewport) -> Self {
        Self { size }
    }
}

impl ViewportSource for FixedViewport {
    fn size(&self) -> Viewport {
        self.size
    }

    fn subscribe_resize(&mut self) {}

    fn unsubscribe_resize(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_clears_only_the_matching_request() {
        let mut timer = TimerScheduler::new(Duration::from_millis(16));
        let first = timer.request_frame().unwrap();
        timer.cancel_frame(FrameRequest(first.0 + 100));
        assert!(timer.take_due().is_some());

        let second = timer.request_frame().unwrap();
        timer.cancel_frame(second);
        assert!(timer.take_due().is_none());
    }

    #[test]
    fn deadlines_advance_by_the_interval() {
        let interval = Duration::from_millis(50);
        let mut timer = TimerScheduler::new(interval);
        timer.request_frame();
        let a = timer.take_due().unwrap();
        timer.request_frame();
        let b = timer.take_due().unwrap();
        assert!(b >= a + interval);
    }
}
