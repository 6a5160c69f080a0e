use crate::constants::*;

/// Tuning knobs for a particle field, fixed at animator construction time.
///
/// - `particle_count`: size of the particle collection (never changes while running)
/// - `max_speed`: bound for each velocity component, in pixels per frame
/// - `font_size_min`/`font_size_max`: font size range sampled at spawn
/// - `spawn_opacity_min`/`spawn_opacity_max`: opacity range sampled at spawn
/// - `opacity_floor`/`opacity_ceiling`: fade envelope the opacity oscillates in
/// - `fade_step`: opacity change per frame
/// - `push_factor`: extra velocity multiples applied inside a protected zone
/// - `glyph_rgb`, `glow_blur`, `font_family`: text appearance
/// - `snippets`: pool of strings particles display
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub max_speed: f32,
    pub font_size_min: f32,
    pub font_size_max: f32,
    pub spawn_opacity_min: f32,
    pub spawn_opacity_max: f32,
    pub opacity_floor: f32,
    pub opacity_ceiling: f32,
    pub fade_step: f32,
    pub push_factor: f32,
    pub glyph_rgb: [u8; 3],
    pub glow_blur: f32,
    pub font_family: &'static str,
    pub snippets: &'static [&'static str],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_speed: MAX_SPEED,
            font_size_min: FONT_SIZE_MIN,
            font_size_max: FONT_SIZE_MAX,
            spawn_opacity_min: SPAWN_OPACITY_MIN,
            spawn_opacity_max: SPAWN_OPACITY_MAX,
            opacity_floor: OPACITY_FLOOR,
            opacity_ceiling: OPACITY_CEILING,
            fade_step: FADE_STEP,
            push_factor: PUSH_FACTOR,
            glyph_rgb: GLYPH_RGB,
            glow_blur: GLOW_BLUR,
            font_family: FONT_FAMILY,
            snippets: CODE_SNIPPETS,
        }
    }
}
