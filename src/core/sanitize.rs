// src/core/sanitize.rs

/// Collapse non-breaking spaces (`&nbsp;` and a literal U+00A0) to plain spaces.
/// The leaderboard row pattern expects a real space after the player link.
pub fn normalize_nbsp(s: &str) -> String {
    s.replace("&nbsp;", " ").replace('\u{a0}', " ")
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "12,345" -> "12345"
pub fn strip_thousands(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}

/// Comma-grouped decimal text to an integer. `None` on anything else,
/// including the empty string.
pub fn parse_count(s: &str) -> Option<u32> {
    strip_thousands(s.trim()).parse().ok()
}
