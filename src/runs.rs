// src/runs.rs
//
// Typed leaderboard records.

use std::fmt;

const HARDCORE_SUFFIX: &str = "(Hardcore)";
const CASUAL_SUFFIX: &str = "(Casual)";

/// Difficulty mode, encoded on the site as a suffix of the path cell:
/// `Grey You (Casual)`, `Oxygenarian (Hardcore)`, or no suffix at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Core {
    Softcore,
    Hardcore,
    Casual,
}

impl Core {
    /// Read the mode off a raw path cell. Hardcore wins if both appear.
    pub fn classify(raw_path: &str) -> Core {
        if raw_path.contains(HARDCORE_SUFFIX) {
            Core::Hardcore
        } else if raw_path.contains(CASUAL_SUFFIX) {
            Core::Casual
        } else {
            Core::Softcore
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Core::Softcore => "softcore",
            Core::Hardcore => "hardcore",
            Core::Casual => "casual",
        }
    }
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path name without the core-mode suffix.
pub fn strip_core_suffix(raw_path: &str) -> String {
    raw_path
        .replace(HARDCORE_SUFFIX, "")
        .replace(CASUAL_SUFFIX, "")
        .trim()
        .to_string()
}

/// One finished ascension as listed on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub id: u32,
    pub player: String,
    pub class: String,
    pub path: String,
    pub core: Core,
    pub days: u32,
    pub turns: u32,
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) {}, {} [{}]: {} days / {} turns",
            self.player, self.id, self.class, self.path, self.core, self.days, self.turns
        )
    }
}
