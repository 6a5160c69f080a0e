use anyhow::anyhow;
use code_rain_core::{GlyphStyle, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D context the backdrop draws its glyphs on.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        // Backing store in CSS pixels, one canvas pixel per viewport pixel.
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn set_style(&mut self, style: &GlyphStyle) {
        let color = style.css_color();
        self.ctx.set_font(&style.css_font());
        self.ctx.set_fill_style_str(&color);
        self.ctx.set_shadow_color(&color);
        self.ctx.set_shadow_blur(style.glow_blur as f64);
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str) {
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
