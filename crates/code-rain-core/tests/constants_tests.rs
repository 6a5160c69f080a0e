// Host-side tests for tuning constants and their relationships.

use code_rain_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_envelope_is_ordered() {
    assert!(OPACITY_FLOOR > 0.0);
    assert!(OPACITY_FLOOR < OPACITY_CEILING);
    assert!(OPACITY_CEILING <= 1.0);
    // Spawn range overlaps the envelope so clamping never empties it.
    assert!(SPAWN_OPACITY_MIN < OPACITY_CEILING);
    assert!(SPAWN_OPACITY_MAX > OPACITY_FLOOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_step_reaches_both_bounds() {
    assert!(FADE_STEP > 0.0);
    assert!(FADE_STEP < OPACITY_CEILING - OPACITY_FLOOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_and_type_ranges_are_sane() {
    assert!(MAX_SPEED > 0.0);
    assert!(PUSH_FACTOR > 0.0);
    assert!(FONT_SIZE_MIN > 0.0 && FONT_SIZE_MIN < FONT_SIZE_MAX);
    assert!(GLOW_BLUR >= 0.0);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
fn snippet_pool_is_non_empty_and_single_line() {
    assert!(!CODE_SNIPPETS.is_empty());
    for s in CODE_SNIPPETS {
        assert!(!s.is_empty());
        assert!(!s.contains('\n'), "snippet {s:?} spans lines");
    }
}

#[test]
fn default_params_mirror_constants() {
    let p = FieldParams::default();
    assert_eq!(p.particle_count, PARTICLE_COUNT);
    assert_eq!(p.opacity_floor, OPACITY_FLOOR);
    assert_eq!(p.opacity_ceiling, OPACITY_CEILING);
    assert_eq!(p.snippets.len(), CODE_SNIPPETS.len());
}
