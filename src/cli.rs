// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::config::consts::*;
use crate::config::options::{Grouping, PageQuery, ReportOptions};
use crate::error::Result;
use crate::runner;
use crate::sink::StdoutSink;
use crate::source::{FileSource, HttpSource, PageSource};

#[derive(Parser, Debug)]
#[command(name = "kol_runs")]
#[command(version)]
#[command(about = "Who did 1-day runs of which path on the ascension leaderboard, and how many also went casual")]
pub struct Args {
    /// Read a saved leaderboard page instead of fetching it
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = HOST)]
    pub host: String,

    #[arg(long, default_value_t = PORT)]
    pub port: u16,

    /// Session cookie, e.g. "PHPSESSID=…"
    #[arg(long, env = "KOL_COOKIE")]
    pub cookie: Option<String>,

    #[arg(long, default_value_t = DEFAULT_FLOOR)]
    pub floor: u32,

    #[arg(long, default_value_t = DEFAULT_BOARD)]
    pub board: u32,

    /// How many recent ascensions to list
    #[arg(long, default_value_t = DEFAULT_HISTORY)]
    pub history: u32,

    /// Day count a run needs to qualify
    #[arg(short, long, default_value_t = QUALIFYING_DAYS)]
    pub days: u32,

    /// `path` or `core`
    #[arg(short, long, default_value = "path")]
    pub group_by: Grouping,

    /// Only report these groups (repeatable)
    #[arg(short, long = "path")]
    pub paths: Vec<String>,

    /// Lead with "In the last N ascensions:"
    #[arg(long)]
    pub header: bool,

    /// Print every extracted run instead of the summary
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn query(&self) -> PageQuery {
        PageQuery { floor: self.floor, board: self.board, history: self.history }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            days: self.days,
            grouping: self.group_by,
            only_paths: self.paths.clone(),
            header: self.header.then_some(self.history),
        }
    }

    pub fn source(&self) -> Box<dyn PageSource> {
        match &self.file {
            Some(p) => Box::new(FileSource(p.clone())),
            None => Box::new(HttpSource {
                host: self.host.clone(),
                port: self.port,
                query: self.query(),
                cookie: self.cookie.clone(),
            }),
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    let source = args.source();
    let mut sink = StdoutSink;
    if args.list {
        let n = runner::list(source.as_ref(), &mut sink)?;
        info!("Listed {n} runs");
    } else {
        let summary = runner::run(source.as_ref(), &args.report_options(), &mut sink)?;
        info!("{} runs, {} groups, {} lines", summary.runs, summary.groups, summary.lines);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let args = Args::parse_from(["kol_runs"]);
        assert_eq!(args.query(), PageQuery::default());
        assert_eq!(args.report_options(), ReportOptions::default());
        assert!(!args.list);
    }

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "kol_runs", "--history", "100", "--header", "-d", "2", "-g", "core",
            "-p", "Grey You", "-p", "Community Service",
        ]);
        let opts = args.report_options();
        assert_eq!(opts.days, 2);
        assert_eq!(opts.grouping, Grouping::Core);
        assert_eq!(opts.only_paths, ["Grey You", "Community Service"]);
        assert_eq!(opts.header, Some(100));
        assert_eq!(args.query().history, 100);
    }

    #[test]
    fn bad_grouping_rejected() {
        assert!(Args::try_parse_from(["kol_runs", "-g", "class"]).is_err());
    }
}
