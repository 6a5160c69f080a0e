use code_rain_core::{GlyphStyle, Surface, Viewport};

// Terminal cell size in viewport pixels.
pub const CELL_W: f32 = 8.0;
pub const CELL_H: f32 = 16.0;

/// Rasterizes glyph draws onto a character grid, one cell per 8x16 pixels.
///
/// Dim text is drawn with `.` and bright text with its own characters so the
/// fade is still visible in a terminal.
#[derive(Debug, Default)]
pub struct GridSurface {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    alpha: f32,
    pub glyphs_drawn: u64,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols.max(1)) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Surface for GridSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.cols = (viewport.width / CELL_W).ceil().max(0.0) as usize;
        self.rows = (viewport.height / CELL_H).ceil().max(0.0) as usize;
        self.cells = vec![' '; self.cols * self.rows];
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn set_style(&mut self, style: &GlyphStyle) {
        self.alpha = style.alpha;
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str) {
        self.glyphs_drawn += 1;
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = ((x / CELL_W) as usize, (y / CELL_H) as usize);
        if row >= self.rows {
            return;
        }
        let faint = self.alpha < 0.25;
        for (i, ch) in text.chars().enumerate() {
            let c = col + i;
            if c >= self.cols {
                break;
            }
            self.cells[row * self.cols + c] = if faint && !ch.is_whitespace() { '.' } else { ch };
        }
    }
}
