// src/specs/leaderboard.rs
//
// Ascension leaderboard (museum.php?place=leaderboards&whichboard=999).
//
// A standard row looks like:
//   <tr><td>12</td><td><a href=showplayer.php?who=1234 class=nounder><b>Name</b></a> </td>
//   <td>Seal Clubber</td><td>Grey You (Casual)</td><td>1</td><td align=right>1,234</td></tr>
// (one line on the site). OCRS rows use a different layout and are not
// matched; they are left out of the report on purpose.

use std::sync::LazyLock;
use std::time::Instant;

use log::{debug, warn};
use regex::{CaptureMatches, Captures, Regex};

use crate::core::sanitize::{normalize_nbsp, normalize_ws, parse_count};
use crate::error::{Error, Result};
use crate::runs::{strip_core_suffix, Core, Run};

// Capture order: id, player, class, path, days, turns. Don't reorder.
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"<tr><td>[^<]*?</td>",
        r"<td><a href=showplayer\.php\?who=(\d+) class=nounder><b>([^<]*?)</b></a> </td>",
        r"<td>([^<]*?)</td>",
        r"<td>([^<]*?)</td>",
        r"<td>([\d,]*?)</td>",
        r"<td align=right>([\d,]*?)</td></tr>",
    ))
    .expect("leaderboard row pattern")
});

/// The text the row pattern runs against.
pub fn normalize_page(raw: &str) -> String {
    normalize_nbsp(raw)
}

/// Forward-only scan over a normalized page, one `Run` per matching row.
///
/// Matches never overlap and the scan position only moves forward; once it
/// returns `None` it stays exhausted.
pub struct RunMatches<'t> {
    caps: CaptureMatches<'static, 't>,
    row: usize,
}

impl<'t> RunMatches<'t> {
    pub fn new(page: &'t str) -> Self {
        Self { caps: ROW_RE.captures_iter(page), row: 0 }
    }
}

impl<'t> Iterator for RunMatches<'t> {
    type Item = Result<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.caps.next()?;
        let row = self.row;
        self.row += 1;
        Some(run_from_captures(&caps, row))
    }
}

fn run_from_captures(caps: &Captures<'_>, row: usize) -> Result<Run> {
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let raw_path = field(4);

    Ok(Run {
        id: number(field(1), row, "id")?,
        player: normalize_ws(field(2)),
        class: normalize_ws(field(3)),
        path: strip_core_suffix(raw_path),
        core: Core::classify(raw_path),
        days: number(field(5), row, "days")?,
        turns: number(field(6), row, "turns")?,
    })
}

fn number(raw: &str, row: usize, field: &'static str) -> Result<u32> {
    parse_count(raw).ok_or_else(|| Error::Parse { row, field, raw: s!(raw) })
}

/// All runs on the page, in page order. Fails on the first row whose numbers
/// don't parse; a page with no matching rows is just empty.
pub fn extract_runs(raw: &str) -> Result<Vec<Run>> {
    let t = Instant::now();
    let page = normalize_page(raw);
    let runs = RunMatches::new(&page).collect::<Result<Vec<_>>>()?;

    let candidates = page.matches("<tr>").count();
    debug!(
        "Leaderboard: {} of {} rows matched, parsed in {:?}",
        runs.len(), candidates, t.elapsed()
    );
    if runs.is_empty() && candidates > 0 {
        warn!("Leaderboard: {candidates} table rows but none in the expected layout");
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: u32, id: u32, player: &str, class: &str, path: &str, days: &str, turns: &str) -> String {
        format!(
            "<tr><td>{rank}</td><td><a href=showplayer.php?who={id} class=nounder><b>{player}</b></a>&nbsp;</td>\
             <td>{class}</td><td>{path}</td><td>{days}</td><td align=right>{turns}</td></tr>"
        )
    }

    #[test]
    fn parses_standard_rows_in_order() {
        let doc = format!(
            "<html><body><table>{}{}</table></body></html>",
            row(1, 1001, "Alice", "Seal Clubber", "Unrestricted", "1", "200"),
            row(2, 1002, " Bob ", "Turtle Tamer ", "Grey You (Casual)", "1", "1,150"),
        );

        let runs = extract_runs(&doc).unwrap();
        assert_eq!(runs.len(), 2);

        assert_eq!(runs[0].id, 1001);
        assert_eq!(runs[0].player, "Alice");
        assert_eq!(runs[0].path, "Unrestricted");
        assert_eq!(runs[0].core, Core::Softcore);

        assert_eq!(runs[1].player, "Bob");
        assert_eq!(runs[1].class, "Turtle Tamer");
        assert_eq!(runs[1].path, "Grey You");
        assert_eq!(runs[1].core, Core::Casual);
        assert_eq!(runs[1].turns, 1150);
    }

    #[test]
    fn hardcore_suffix_is_split_off() {
        let doc = row(1, 5, "Carol", "Sauceror", "Oxygenarian (Hardcore)", "3", "12,345");
        let runs = extract_runs(&doc).unwrap();
        assert_eq!(runs[0].path, "Oxygenarian");
        assert_eq!(runs[0].core, Core::Hardcore);
        assert_eq!(runs[0].days, 3);
        assert_eq!(runs[0].turns, 12345);
    }

    #[test]
    fn needs_nbsp_normalized_before_matching() {
        let doc = row(1, 5, "Carol", "Sauceror", "Unrestricted", "1", "100");
        assert_eq!(RunMatches::new(&doc).count(), 0);
        assert_eq!(RunMatches::new(&normalize_page(&doc)).count(), 1);
    }

    #[test]
    fn truncated_row_is_skipped() {
        let broken = "<tr><td>2</td><td><a href=showplayer.php?who=9 class=nounder><b>Eve</b></a> </td><td>Sauceror</td></tr>";
        let doc = format!("{}{}", broken, row(1, 1, "Alice", "Seal Clubber", "Unrestricted", "1", "200"));
        let runs = extract_runs(&doc).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].player, "Alice");
    }

    #[test]
    fn ocrs_layout_is_not_matched() {
        // OCRS rows carry the path as an image, not text.
        let doc = "<tr><td>1</td><td><a href=showplayer.php?who=3 class=nounder><b>Dan</b></a> </td>\
                   <td>Pastamancer</td><td><img src=ocrs.gif></td><td>1</td><td align=right>600</td></tr>";
        assert!(extract_runs(doc).unwrap().is_empty());
    }

    #[test]
    fn empty_page_is_empty() {
        assert!(extract_runs("").unwrap().is_empty());
        assert!(extract_runs("<html><table></table></html>").unwrap().is_empty());
    }

    #[test]
    fn empty_numeric_cell_names_the_row() {
        let doc = format!(
            "{}{}",
            row(1, 1, "Alice", "Seal Clubber", "Unrestricted", "1", "200"),
            row(2, 2, "Bob", "Turtle Tamer", "Grey You", "", "150"),
        );
        match extract_runs(&doc) {
            Err(Error::Parse { row, field, raw }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "days");
                assert_eq!(raw, "");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn iterator_stays_exhausted() {
        let doc = normalize_page(&row(1, 1, "Alice", "Seal Clubber", "Unrestricted", "1", "200"));
        let mut it = RunMatches::new(&doc);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
