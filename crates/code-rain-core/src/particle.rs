use crate::geometry::Viewport;
use crate::params::FieldParams;
use glam::Vec2;
use rand::prelude::*;

/// Which way a particle's opacity is currently moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    Dimming,
    Brightening,
}

/// Direction change reported by [`Particle::fade_step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeTurn {
    /// Hit the floor; the particle now brightens and carries new text.
    Floor,
    /// Hit the ceiling; the particle now dims.
    Ceiling,
}

/// A drifting code snippet.
///
/// Fields:
/// - `position`: viewport coordinates of the text baseline origin
/// - `velocity`: displacement per frame
/// - `text`: snippet currently shown
/// - `font_size`: pixels
/// - `opacity`: kept inside the field's fade envelope
/// - `fade`: current fade direction
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub text: &'static str,
    pub font_size: f32,
    pub opacity: f32,
    pub fade: Fade,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, params: &FieldParams) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let span = params.max_speed * 2.0;
        let velocity = Vec2::new(
            rng.gen::<f32>() * span - params.max_speed,
            rng.gen::<f32>() * span - params.max_speed,
        );
        let font_size = params.font_size_min
            + rng.gen::<f32>() * (params.font_size_max - params.font_size_min);
        // Spawn range reaches above the ceiling; clamp so the envelope holds from frame zero.
        let opacity = (params.spawn_opacity_min
            + rng.gen::<f32>() * (params.spawn_opacity_max - params.spawn_opacity_min))
            .clamp(params.opacity_floor, params.opacity_ceiling);
        let fade = if rng.gen_bool(0.5) {
            Fade::Dimming
        } else {
            Fade::Brightening
        };
        Self {
            position,
            velocity,
            text: pick_snippet(rng, params.snippets),
            font_size,
            opacity,
            fade,
        }
    }

    /// Integrate one frame of motion, then reflect velocity off the viewport edges.
    ///
    /// Reflection only flips the sign of the offending component; the position is
    /// left where integration put it, so it may sit up to one step outside.
    #[inline]
    pub fn advance(&mut self, viewport: Viewport) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Extra displacement that hurries a particle across a protected zone.
    #[inline]
    pub fn push_through(&mut self, factor: f32) {
        self.position += self.velocity * factor;
    }

    pub fn fade_step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        params: &FieldParams,
    ) -> Option<FadeTurn> {
        match self.fade {
            Fade::Dimming => {
                self.opacity -= params.fade_step;
                if self.opacity <= params.opacity_floor {
                    self.opacity = params.opacity_floor;
                    self.fade = Fade::Brightening;
                    self.text = pick_snippet(rng, params.snippets);
                    return Some(FadeTurn::Floor);
                }
            }
            Fade::Brightening => {
                self.opacity += params.fade_step;
                if self.opacity >= params.opacity_ceiling {
                    self.opacity = params.opacity_ceiling;
                    self.fade = Fade::Dimming;
                    return Some(FadeTurn::Ceiling);
                }
            }
        }
        None
    }
}

#[inline]
fn pick_snippet<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn particle(opacity: f32, fade: Fade) -> Particle {
        Particle {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(0.1, 0.1),
            text: "pass",
            font_size: 14.0,
            opacity,
            fade,
        }
    }

    #[test]
    fn spawn_respects_ranges() {
        let params = FieldParams::default();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, viewport, &params);
            assert!((0.0..=800.0).contains(&p.position.x));
            assert!((0.0..=600.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= params.max_speed);
            assert!(p.velocity.y.abs() <= params.max_speed);
            assert!((params.font_size_min..=params.font_size_max).contains(&p.font_size));
            assert!((params.opacity_floor..=params.opacity_ceiling).contains(&p.opacity));
            assert!(params.snippets.contains(&p.text));
        }
    }

    #[test]
    fn bounce_flips_velocity_without_clamping() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut p = particle(0.3, Fade::Dimming);
        p.position = Vec2::new(99.95, 50.0);
        p.velocity = Vec2::new(0.1, 0.0);
        p.advance(viewport);
        assert!(p.position.x > 100.0, "position must not be clamped");
        assert!(p.velocity.x < 0.0);
        p.advance(viewport);
        assert!(p.position.x < 100.05);
    }

    #[test]
    fn floor_flip_clamps_and_rerolls_text() {
        let params = FieldParams {
            snippets: &["import math"],
            ..FieldParams::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = particle(params.opacity_floor, Fade::Dimming);
        let turn = p.fade_step(&mut rng, &params);
        assert_eq!(turn, Some(FadeTurn::Floor));
        assert_eq!(p.opacity, params.opacity_floor);
        assert_eq!(p.fade, Fade::Brightening);
        assert_eq!(p.text, "import math");
    }

    #[test]
    fn ceiling_flip_keeps_text() {
        let params = FieldParams {
            snippets: &["import math"],
            ..FieldParams::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = particle(params.opacity_ceiling - 0.001, Fade::Brightening);
        assert_eq!(p.fade_step(&mut rng, &params), Some(FadeTurn::Ceiling));
        assert_eq!(p.opacity, params.opacity_ceiling);
        assert_eq!(p.fade, Fade::Dimming);
        assert_eq!(p.text, "pass");
    }

    #[test]
    fn push_through_uses_current_velocity() {
        let mut p = particle(0.3, Fade::Dimming);
        p.velocity = Vec2::new(-0.1, 0.05);
        p.push_through(2.0);
        assert!((p.position.x - 9.8).abs() < 1e-5);
        assert!((p.position.y - 10.1).abs() < 1e-5);
    }
}
