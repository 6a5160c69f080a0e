//! Start/stop lifecycle around a [`ParticleField`].
//!
//! The animator owns everything the loop touches: the RNG, the field, the
//! surface it draws on, the pending frame request and the resize
//! subscription. Hosts wrap it in `Rc<RefCell<_>>` and forward their frame and
//! resize callbacks to [`Animator::frame`] and [`Animator::on_resize`]; both
//! are no-ops once the animator is stopped, so a callback already queued by
//! the host cannot touch particle state after [`Animator::stop`] returns.

use crate::field::{FrameStats, ParticleField};
use crate::geometry::ZoneLayout;
use crate::host::{FrameRequest, FrameScheduler, Surface, ViewportSource};
use crate::params::FieldParams;
use rand::prelude::*;

struct Running<S> {
    surface: S,
    field: ParticleField,
    pending: Option<FrameRequest>,
    frames: u64,
}

pub struct Animator<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    params: FieldParams,
    layout: ZoneLayout,
    rng: StdRng,
    scheduler: F,
    viewport: V,
    running: Option<Running<S>>,
}

impl<S, F, V> Animator<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    pub fn new(params: FieldParams, layout: ZoneLayout, seed: u64, scheduler: F, viewport: V) -> Self {
        Self {
            params,
            layout,
            rng: StdRng::seed_from_u64(seed),
            scheduler,
            viewport,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.running.as_ref().map(|r| &r.field)
    }

    /// Frames rendered since the last `start`.
    pub fn frames(&self) -> u64 {
        self.running.as_ref().map_or(0, |r| r.frames)
    }

    /// Size `surface` to the viewport, spawn the particles, draw the first
    /// frame and schedule the next one.
    pub fn start(&mut self, mut surface: S) {
        if self.running.is_some() {
            log::warn!("[animator] start called while running; ignoring");
            return;
        }
        let viewport = self.viewport.size();
        surface.resize(viewport);
        let field = ParticleField::new(viewport, &self.layout, &self.params, &mut self.rng);
        self.viewport.subscribe_resize();
        log::info!(
            "[animator] start particles={} viewport={:.0}x{:.0} zones={}",
            field.particles().len(),
            viewport.width,
            viewport.height,
            field.regions().len()
        );
        self.running = Some(Running {
            surface,
            field,
            pending: None,
            frames: 0,
        });
        self.frame();
    }

    /// One tick of the loop. Returns `None` when the animator is stopped.
    pub fn frame(&mut self) -> Option<FrameStats> {
        let run = self.running.as_mut()?;
        run.pending = None;
        let stats = run.field.step(&self.params, &mut self.rng, &mut run.surface);
        run.frames += 1;
        run.pending = self.scheduler.request_frame();
        if run.pending.is_none() {
            log::warn!("[animator] host refused the next frame after {}", run.frames);
        }
        Some(stats)
    }

    pub fn on_resize(&mut self) {
        let Some(run) = self.running.as_mut() else {
            return;
        };
        let viewport = self.viewport.size();
        run.surface.resize(viewport);
        run.field.resize(viewport, &self.layout);
        log::debug!(
            "[animator] resize viewport={:.0}x{:.0}",
            viewport.width,
            viewport.height
        );
    }

    /// Cancel the pending frame, drop the resize subscription and hand the
    /// surface back. Returns `None` if the animator was not running.
    pub fn stop(&mut self) -> Option<S> {
        let run = self.running.take()?;
        if let Some(request) = run.pending {
            self.scheduler.cancel_frame(request);
        }
        self.viewport.unsubscribe_resize();
        log::info!("[animator] stop after {} frames", run.frames);
        Some(run.surface)
    }
}

impl<S, F, V> Drop for Animator<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    fn drop(&mut self) {
        self.stop();
    }
}
