// Page wiring: element ids, data attributes and their parsing.

use code_rain_core::content::DEFAULT_API_URL;

pub const CANVAS_ID: &str = "code-rain";
pub const PROFILE_ID: &str = "profile";
pub const PROJECTS_ID: &str = "projects";
pub const CONTACT_ID: &str = "contact";

pub const SEED_ATTR: &str = "data-seed"; // on the canvas
pub const API_URL_ATTR: &str = "data-api-url"; // on <body>

/// Property on `window` holding the running backdrop handle.
pub const HANDLE_PROPERTY: &str = "codeRain";

/// A decimal `u64`; anything else means "pick a random seed".
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

/// Backend base URL without a trailing slash, defaulting when unset or blank.
pub fn api_base(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_URL);
    base.trim_end_matches('/').to_string()
}
