/// Utility functions
use serde_json::Value;
use std::collections::HashMap;

/// Sentinel meaning "no constraint" for dropdown filters
pub const ALL_SENTINEL: &str = "all";

/// Extract a launch year from a JSON number or numeric string
pub fn year_from_value(v: &Value) -> Option<i32> {
    if let Some(x) = v.as_i64() {
        return i32::try_from(x).ok();
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<i32>().ok();
    }
    None
}

/// Pick a non-negative count from JSON by trying multiple keys
pub fn count_pick(v: &Value, keys: &[&str]) -> Option<u64> {
    for k in keys {
        if let Some(x) = v.get(*k) {
            if let Some(n) = x.as_u64() {
                return Some(n);
            }
            if let Some(s) = x.as_str() {
                if let Ok(n) = s.trim().parse::<u64>() {
                    return Some(n);
                }
            }
        }
    }
    None
}

/// Non-empty query parameter value
pub fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Free-text query parameter kept exactly as typed; blank input is absent
pub fn text_param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Non-empty query parameter value that is not the "all" sentinel
pub fn constraint<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    param(params, key).filter(|s| !s.eq_ignore_ascii_case(ALL_SENTINEL))
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Slug to lower-case words: "sample-return" -> "sample return"
pub fn normalize_slug(slug: &str) -> String {
    slug.replace('-', " ").to_lowercase()
}

/// Split a compound mission type ("Orbiter & Rover", "Flyby, Interstellar")
/// into trimmed, lower-cased, non-empty segments
pub fn type_segments(mission_type: &str) -> impl Iterator<Item = String> + '_ {
    mission_type
        .split([',', '/', '&'])
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
