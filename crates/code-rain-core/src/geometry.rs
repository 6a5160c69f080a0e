//! Viewport and protected-zone geometry.
//!
//! Zones are absolute pixel rectangles anchored to the top-left corner of the
//! viewport. Some zones stretch to the full viewport width, so the set is
//! rebuilt from a [`ZoneLayout`] every time the viewport changes size.

use crate::constants::*;
use glam::Vec2;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when `p` lies strictly inside the rectangle; points on an edge are outside.
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }
}

/// Horizontal extent of a zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneWidth {
    Fixed(f32),
    /// Spans the current viewport width.
    Viewport,
}

/// One protected zone before it is resolved against a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSpec {
    pub x: f32,
    pub y: f32,
    pub width: ZoneWidth,
    pub height: f32,
}

impl ZoneSpec {
    pub fn resolve(&self, viewport: Viewport) -> Rect {
        let width = match self.width {
            ZoneWidth::Fixed(w) => w,
            ZoneWidth::Viewport => viewport.width,
        };
        Rect::new(self.x, self.y, width, self.height)
    }
}

/// The page regions particles must stay invisible over.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLayout {
    pub zones: Vec<ZoneSpec>,
}

impl Default for ZoneLayout {
    /// Profile photo, the about-me strip and the projects/contact block.
    fn default() -> Self {
        let [px, py, pw, ph] = PHOTO_ZONE;
        Self {
            zones: vec![
                ZoneSpec {
                    x: px,
                    y: py,
                    width: ZoneWidth::Fixed(pw),
                    height: ph,
                },
                ZoneSpec {
                    x: 0.0,
                    y: ABOUT_ZONE_Y,
                    width: ZoneWidth::Viewport,
                    height: ABOUT_ZONE_HEIGHT,
                },
                ZoneSpec {
                    x: 0.0,
                    y: PROJECTS_ZONE_Y,
                    width: ZoneWidth::Viewport,
                    height: PROJECTS_ZONE_HEIGHT,
                },
            ],
        }
    }
}

impl ZoneLayout {
    /// A layout with no zones; every particle is drawn.
    pub fn empty() -> Self {
        Self { zones: Vec::new() }
    }

    pub fn from_rects(rects: &[Rect]) -> Self {
        Self {
            zones: rects
                .iter()
                .map(|r| ZoneSpec {
                    x: r.x,
                    y: r.y,
                    width: ZoneWidth::Fixed(r.width),
                    height: r.height,
                })
                .collect(),
        }
    }

    pub fn regions(&self, viewport: Viewport) -> Vec<Rect> {
        self.zones.iter().map(|z| z.resolve(viewport)).collect()
    }
}

#[inline]
pub fn inside_any(regions: &[Rect], p: Vec2) -> bool {
    regions.iter().any(|r| r.contains_strict(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_containment_excludes_edges() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_strict(Vec2::new(50.0, 50.0)));
        assert!(!r.contains_strict(Vec2::new(0.0, 50.0)));
        assert!(!r.contains_strict(Vec2::new(100.0, 50.0)));
        assert!(!r.contains_strict(Vec2::new(50.0, 100.0)));
        assert!(!r.contains_strict(Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn default_layout_tracks_viewport_width_only() {
        let layout = ZoneLayout::default();
        let narrow = layout.regions(Viewport::new(800.0, 600.0));
        let wide = layout.regions(Viewport::new(1920.0, 1080.0));
        assert_eq!(narrow.len(), 3);
        assert_eq!(narrow[0], Rect::new(20.0, 20.0, 450.0, 450.0));
        assert_eq!(wide[0], narrow[0]);
        assert_eq!(narrow[1], Rect::new(0.0, 500.0, 800.0, 150.0));
        assert_eq!(wide[1], Rect::new(0.0, 500.0, 1920.0, 150.0));
        assert_eq!(wide[2], Rect::new(0.0, 700.0, 1920.0, 300.0));
    }
}
