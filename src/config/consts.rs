// src/config/consts.rs

// Net config
pub const HOST: &str = "www.kingdomofloathing.com";
pub const PORT: u16 = 80;
pub const LEADERBOARD_PATH: &str = "/museum.php";
pub const USER_AGENT: &str = "kol_runs/0.2";
pub const TIMEOUT_SECS: u64 = 15;

// Leaderboard query
pub const DEFAULT_FLOOR: u32 = 1;
pub const DEFAULT_BOARD: u32 = 999;   // "recent ascensions" board
pub const DEFAULT_HISTORY: u32 = 500;

// Report
pub const SENTINEL_PATH: &str = "Unrestricted";
pub const QUALIFYING_DAYS: u32 = 1;
