// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a report run.
///
/// Rows that simply don't look like leaderboard rows are not errors; the
/// extractor skips them. Only a matched row whose numbers won't parse is.
#[derive(Debug, Error)]
pub enum Error {
    /// A matched row carried a numeric field that isn't an integer
    /// once the thousands separators are gone.
    #[error("row {row}: cannot parse {field} from {raw:?}")]
    Parse {
        row: usize,
        field: &'static str,
        raw: String,
    },

    /// Reading the page failed (socket, file).
    #[error("page source: {0}")]
    Source(#[from] std::io::Error),

    #[error("HTTP error: {status}")]
    Http { status: String },

    #[error("malformed HTTP response")]
    MalformedResponse,

    #[error("unknown grouping: {0} (expected `path` or `core`)")]
    UnknownGrouping(String),
}
