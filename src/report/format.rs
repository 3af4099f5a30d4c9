// src/report/format.rs

pub fn player_noun(n: usize) -> &'static str {
    if n == 1 { "player" } else { "players" }
}

/// `2 players did a 1-day Grey You run. Of those, 1 players also did a 1-day casual run.`
pub fn group_line(days: u32, key: &str, size: usize, overlap: usize) -> String {
    format!(
        "{size} {} did a {days}-day {key} run. Of those, {overlap} players also did a {days}-day casual run.",
        player_noun(size)
    )
}

pub fn total_line(days: u32, casual: usize) -> String {
    format!("{casual} {} did a {days}-day casual run in total.", player_noun(casual))
}

pub fn header_line(history: u32) -> String {
    format!("In the last {history} ascensions:")
}
