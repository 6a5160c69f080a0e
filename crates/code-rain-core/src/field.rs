use crate::geometry::{inside_any, Rect, Viewport, ZoneLayout};
use crate::host::{GlyphStyle, Surface};
use crate::params::FieldParams;
use crate::particle::{FadeTurn, Particle};
use glam::Vec2;
use rand::Rng;

/// What one frame did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    /// Particles simulated but skipped because they sat inside a protected zone.
    pub hidden: usize,
    /// Particles whose text was re-rolled this frame.
    pub rerolled: usize,
}

/// The particle collection plus the viewport and zones it moves in.
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    regions: Vec<Rect>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        viewport: Viewport,
        layout: &ZoneLayout,
        params: &FieldParams,
        rng: &mut R,
    ) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle::spawn(rng, viewport, params))
            .collect();
        Self::from_particles(viewport, layout, particles)
    }

    pub fn from_particles(viewport: Viewport, layout: &ZoneLayout, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            viewport,
            regions: layout.regions(viewport),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn is_protected(&self, p: Vec2) -> bool {
        inside_any(&self.regions, p)
    }

    /// New bounds for bouncing and a fresh zone set; particles keep their state.
    pub fn resize(&mut self, viewport: Viewport, layout: &ZoneLayout) {
        self.viewport = viewport;
        self.regions = layout.regions(viewport);
    }

    /// Advance every particle by one frame and draw the visible ones.
    pub fn step<R, S>(&mut self, params: &FieldParams, rng: &mut R, surface: &mut S) -> FrameStats
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let mut stats = FrameStats::default();
        surface.clear();
        let viewport = self.viewport;
        let regions = &self.regions;
        for p in &mut self.particles {
            p.advance(viewport);

            // Visibility is decided here, before the push moves the particle.
            let protected = inside_any(regions, p.position);
            if protected {
                p.push_through(params.push_factor);
            }

            if p.fade_step(rng, params) == Some(FadeTurn::Floor) {
                stats.rerolled += 1;
            }

            if protected {
                stats.hidden += 1;
                continue;
            }
            surface.set_style(&GlyphStyle {
                font_px: p.font_size,
                font_family: params.font_family,
                rgb: params.glyph_rgb,
                alpha: p.opacity,
                glow_blur: params.glow_blur,
            });
            surface.fill_text(p.position.x, p.position.y, p.text);
            stats.drawn += 1;
        }
        stats
    }
}
