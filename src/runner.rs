// src/runner.rs
//
// One report, start to finish: fetch -> extract -> aggregate -> emit.

use std::time::Instant;

use log::debug;

use crate::{
    config::options::ReportOptions,
    error::Result,
    report::{header_line, Aggregator},
    runs::Run,
    sink::LineSink,
    source::PageSource,
    specs::leaderboard,
};

/// Summary of what was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub runs: usize,
    pub groups: usize,
    pub lines: usize,
}

/// Fetch and extract. Any extraction error aborts before anything is emitted.
pub fn load_runs<S: PageSource + ?Sized>(source: &S) -> Result<Vec<Run>> {
    let page = source.fetch()?;
    debug!("Page: {} bytes", page.len());
    leaderboard::extract_runs(&page)
}

/// Top-level: build the overlap report and hand each line to `sink`.
pub fn run<S, K>(source: &S, opts: &ReportOptions, sink: &mut K) -> Result<RunSummary>
where
    S: PageSource + ?Sized,
    K: LineSink + ?Sized,
{
    let runs = load_runs(source)?;

    let t = Instant::now();
    let mut report = Aggregator::for_grouping(opts.days, opts.grouping).aggregate(&runs);
    report.retain_keys(&opts.only_paths);
    debug!(
        "Report: {} groups, {} casual players, aggregated in {:?}",
        report.groups.len(), report.casual.len(), t.elapsed()
    );

    let mut lines = Vec::with_capacity(report.groups.len() + 2);
    if let Some(history) = opts.header {
        lines.push(header_line(history));
    }
    lines.extend(report.lines());

    for line in &lines {
        sink.emit(line);
    }

    Ok(RunSummary { runs: runs.len(), groups: report.groups.len(), lines: lines.len() })
}

/// Every extracted run, one line each, in page order.
pub fn list<S, K>(source: &S, sink: &mut K) -> Result<usize>
where
    S: PageSource + ?Sized,
    K: LineSink + ?Sized,
{
    let runs = load_runs(source)?;
    for r in &runs {
        sink.emit(&r.to_string());
    }
    Ok(runs.len())
}
