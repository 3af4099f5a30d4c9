// src/config/options.rs
use std::str::FromStr;

use super::consts::*;
use crate::error::Error;

/// Which leaderboard page to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub floor: u32,
    pub board: u32,
    pub history: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            floor: DEFAULT_FLOOR,
            board: DEFAULT_BOARD,
            history: DEFAULT_HISTORY,
        }
    }
}

impl PageQuery {
    /// Request path + query string, e.g.
    /// `/museum.php?floor=1&place=leaderboards&whichboard=999&showhist=500`.
    pub fn to_path(&self) -> String {
        format!(
            "{}?floor={}&place=leaderboards&whichboard={}&showhist={}",
            LEADERBOARD_PATH, self.floor, self.board, self.history
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// One group per path name (minus the sentinel path).
    Path,
    /// One group per non-casual core mode.
    Core,
}

impl FromStr for Grouping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" => Ok(Grouping::Path),
            "core" => Ok(Grouping::Core),
            other => Err(Error::UnknownGrouping(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub days: u32,
    pub grouping: Grouping,
    /// Only emit these group keys (empty = all).
    pub only_paths: Vec<String>,
    /// Lead with "In the last N ascensions:" for this N.
    pub header: Option<u32>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            days: QUALIFYING_DAYS,
            grouping: Grouping::Path,
            only_paths: Vec::new(),
            header: None,
        }
    }
}
