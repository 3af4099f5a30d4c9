// src/report/aggregate.rs
use indexmap::{IndexMap, IndexSet};

use crate::config::consts::SENTINEL_PATH;
use crate::config::options::Grouping;
use crate::runs::{Core, Run};

use super::format;

/// Maps a qualifying run to the group it counts toward, or `None` to leave it
/// out of every group. The casual set is built independently of this.
pub type KeyFn = fn(&Run) -> Option<String>;

/// Group by path name. "Unrestricted" means "no path" and never gets a line.
pub fn by_path(run: &Run) -> Option<String> {
    (run.path != SENTINEL_PATH).then(|| run.path.clone())
}

/// Group by core mode. Casual is the comparison set, not a group of its own.
pub fn by_core(run: &Run) -> Option<String> {
    (run.core != Core::Casual).then(|| s!(run.core.as_str()))
}

impl Grouping {
    pub fn key_fn(self) -> KeyFn {
        match self {
            Grouping::Path => by_path,
            Grouping::Core => by_core,
        }
    }
}

/// Players who did at least one qualifying run in one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub players: IndexSet<String>,
    /// How many of `players` are also in the casual set.
    pub overlap: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Day count a run needed to qualify.
    pub days: u32,
    /// In order of first appearance among qualifying runs.
    pub groups: Vec<Group>,
    pub casual: IndexSet<String>,
}

impl Report {
    /// Keep only the named groups. The casual set is untouched.
    pub fn retain_keys(&mut self, keys: &[String]) {
        if keys.is_empty() { return; }
        self.groups.retain(|g| keys.iter().any(|k| k == &g.key));
    }

    /// One line per group, then the casual total.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .groups
            .iter()
            .map(|g| format::group_line(self.days, &g.key, g.players.len(), g.overlap))
            .collect();
        out.push(format::total_line(self.days, self.casual.len()));
        out
    }
}

/// Set-membership engine shared by every grouping.
pub struct Aggregator {
    days: u32,
    key: KeyFn,
}

impl Aggregator {
    pub fn new(days: u32, key: KeyFn) -> Self {
        Self { days, key }
    }

    pub fn for_grouping(days: u32, grouping: Grouping) -> Self {
        Self::new(days, grouping.key_fn())
    }

    /// Pure; same runs in, same report out.
    pub fn aggregate(&self, runs: &[Run]) -> Report {
        let mut groups: IndexMap<String, IndexSet<String>> = IndexMap::new();
        let mut casual: IndexSet<String> = IndexSet::new();

        for run in runs.iter().filter(|r| r.days == self.days) {
            if run.core == Core::Casual {
                casual.insert(run.player.clone());
            }
            if let Some(key) = (self.key)(run) {
                groups.entry(key).or_default().insert(run.player.clone());
            }
        }

        let groups = groups
            .into_iter()
            .map(|(key, players)| {
                let overlap = players.iter().filter(|p| casual.contains(*p)).count();
                Group { key, players, overlap }
            })
            .collect();

        Report { days: self.days, groups, casual }
    }
}
