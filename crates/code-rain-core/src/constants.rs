// Shared tuning constants for the code-rain backdrop.

// Population
pub const PARTICLE_COUNT: usize = 50;

// Motion (pixels per frame)
pub const MAX_SPEED: f32 = 0.15; // each velocity component is drawn from [-MAX_SPEED, MAX_SPEED)
pub const PUSH_FACTOR: f32 = 2.0; // extra displacement inside a protected zone, in multiples of velocity

// Typography (pixels)
pub const FONT_SIZE_MIN: f32 = 12.0;
pub const FONT_SIZE_MAX: f32 = 30.0;
pub const FONT_FAMILY: &str = "monospace";

// Opacity envelope
pub const SPAWN_OPACITY_MIN: f32 = 0.2;
pub const SPAWN_OPACITY_MAX: f32 = 0.7;
pub const OPACITY_FLOOR: f32 = 0.1;
pub const OPACITY_CEILING: f32 = 0.5;
pub const FADE_STEP: f32 = 0.005; // per frame

// Glyph look
pub const GLYPH_RGB: [u8; 3] = [200, 200, 200];
pub const GLOW_BLUR: f32 = 5.0;

// Page layout anchors for the protected zones (pixels, top-left origin)
pub const PHOTO_ZONE: [f32; 4] = [20.0, 20.0, 450.0, 450.0]; // x, y, w, h
pub const ABOUT_ZONE_Y: f32 = 500.0;
pub const ABOUT_ZONE_HEIGHT: f32 = 150.0;
pub const PROJECTS_ZONE_Y: f32 = 700.0;
pub const PROJECTS_ZONE_HEIGHT: f32 = 300.0;

/// Short Python fragments the particles carry.
pub const CODE_SNIPPETS: &[&str] = &[
    "def suma(a, b):",
    "return a + b",
    "for i in range(10):",
    "print(i)",
    "if x > 0:",
    "print('Positivo')",
    "else:",
    "print('Negativo')",
    "while True:",
    "break",
    "class Persona:",
    "def __init__(self, nombre):",
    "self.nombre = nombre",
    "import math",
    "import random",
    "lambda x: x*2",
    "# Comentario de ejemplo",
    "try:",
    "x = int(input())",
    "except ValueError:",
    "pass",
];
