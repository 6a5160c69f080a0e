//! Seams between the animator and whatever hosts it.
//!
//! A host supplies three things: a [`Surface`] to draw on, a
//! [`FrameScheduler`] that calls back into the animator once per repaint, and
//! a [`ViewportSource`] reporting the current size and resize notifications.
//! The browser host implements them over canvas 2D, `requestAnimationFrame`
//! and the window `resize` event; the native preview uses a fixed-rate timer.

use crate::geometry::Viewport;

/// Style applied to the next [`Surface::fill_text`] calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub font_px: f32,
    pub font_family: &'static str,
    pub rgb: [u8; 3],
    pub alpha: f32,
    /// Blur radius of a glow drawn in the fill colour.
    pub glow_blur: f32,
}

impl GlyphStyle {
    /// CSS font shorthand, e.g. `14px monospace`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_px, self.font_family)
    }

    /// CSS colour with the style's alpha, e.g. `rgba(200,200,200,0.35)`.
    pub fn css_color(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({},{},{},{})", r, g, b, self.alpha)
    }
}

pub trait Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn set_style(&mut self, style: &GlyphStyle);
    fn fill_text(&mut self, x: f32, y: f32, text: &str);
}

/// Handle for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

pub trait FrameScheduler {
    /// Ask the host to call the animator's `frame` once before the next repaint.
    ///
    /// `None` means the host could not schedule; the loop then ends quietly.
    fn request_frame(&mut self) -> Option<FrameRequest>;
    fn cancel_frame(&mut self, request: FrameRequest);
}

pub trait ViewportSource {
    fn size(&self) -> Viewport;
    /// Start delivering resize notifications to the animator's `on_resize`.
    fn subscribe_resize(&mut self);
    fn unsubscribe_resize(&mut self);
}
