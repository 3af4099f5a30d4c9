// src/sink.rs

/// Receives the finished report, one line per call, in report order.
/// Frontends implement this to put lines wherever they belong.
pub trait LineSink {
    fn emit(&mut self, line: &str);
}

/// Prints each line to stdout.
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines (tests, embedding).
impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(s!(line));
    }
}
