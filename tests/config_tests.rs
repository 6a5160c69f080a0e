// Host-side tests for page configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use code_rain_core::content::DEFAULT_API_URL;
use config::*;

#[test]
fn seed_parses_decimal_u64() {
    assert_eq!(parse_seed(Some("42")), Some(42));
    assert_eq!(parse_seed(Some("  7 ")), Some(7));
    assert_eq!(parse_seed(Some("18446744073709551615")), Some(u64::MAX));
}

#[test]
fn seed_rejects_junk_and_absence() {
    assert_eq!(parse_seed(None), None);
    assert_eq!(parse_seed(Some("")), None);
    assert_eq!(parse_seed(Some("-1")), None);
    assert_eq!(parse_seed(Some("0x2a")), None);
}

#[test]
fn api_base_defaults_when_unset_or_blank() {
    assert_eq!(api_base(None), DEFAULT_API_URL);
    assert_eq!(api_base(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn api_base_strips_trailing_slashes() {
    assert_eq!(api_base(Some("http://localhost:8000/")), "http://localhost:8000");
    assert_eq!(api_base(Some(" http://localhost:8000// ")), "http://localhost:8000");
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, PROFILE_ID, PROJECTS_ID, CONTACT_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
