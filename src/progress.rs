//! Progress reporting for long-running line scans.

/// Receives the number of lines processed so far.
///
/// Implemented for any `FnMut(u64)`, so tests can pass a closure that
/// records the calls.
pub trait ProgressObserver {
    fn on_progress(&mut self, processed: u64);
}

impl<F: FnMut(u64)> ProgressObserver for F {
    fn on_progress(&mut self, processed: u64) {
        self(processed)
    }
}

/// Prints `"<i> annotations processed"` to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgress;

impl ProgressObserver for StdoutProgress {
    fn on_progress(&mut self, processed: u64) {
        println!("{} annotations processed", processed);
    }
}

/// Discards progress reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _processed: u64) {}
}
