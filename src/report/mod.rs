// src/report/mod.rs
//
// Turn extracted runs into the overlap summary.
//
// aggregate: who did what (sets per group + the casual set)
// format:    how it reads (one line per group, then the casual total)

mod aggregate;
mod format;

pub use aggregate::{by_core, by_path, Aggregator, Group, KeyFn, Report};
pub use format::{group_line, header_line, player_noun, total_line};
