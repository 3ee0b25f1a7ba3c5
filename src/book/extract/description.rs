use regex::Regex;
use std::sync::OnceLock;

fn shelves_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"shelves: ([\w,\s-]+)").unwrap())
}

fn read_at_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"read at: (\d{4}/\d{2}/\d{2})").unwrap())
}

/// Shelf labels listed after `shelves:`, in order. Empty if there is no marker.
pub fn shelves(description: &str) -> Vec<String> {
    let list = match shelves_pattern().captures(description) {
        Some(caps) => caps[1].to_string(),
        None => return Vec::new(),
    };

    list.split(',').map(|shelf| shelf.trim().to_string()).collect()
}

/// The `YYYY/MM/DD` date after `read at:`, if there is one.
pub fn read_at(description: &str) -> Option<String> {
    let caps = read_at_pattern().captures(description)?;
    Some(caps[1].to_string())
}
