//! # Page “specs”
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the markup* and *how to pull it out* for one page.
//!
//! ## What lives here
//! - **Pure text parsing** of a page that has already been fetched.
//! - **Row shapes**: the exact row pattern a page uses, with fixed capture order.
//! - **Light shaping** of matches into typed records (`runs::Run`).
//!
//! ## What does **not** live here
//! - **Fetching** – see `source` (HTTP, saved file, in-memory).
//! - **Aggregation / formatting** – see `report`.
//!
//! ## Typical call chain
//! ```text
//! runner → source::PageSource::fetch() → specs::leaderboard::extract_runs()
//!                                      ↘  Vec<Run>
//!        → report::Aggregator → LineSink
//! ```
//!
//! ## Conventions & invariants
//! - Rows that don't fit the shape are skipped, never reported. Only a row that
//!   fits but carries garbage numbers is an error.
//! - Specs are testable **offline** against inline fixtures.
pub mod leaderboard;
