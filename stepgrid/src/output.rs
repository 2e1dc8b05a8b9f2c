//! Text report written for each query.

use std::io::{self, Write};
use std::time::Duration;

use stepgrid_core::Point;
use stepgrid_search::{NodeId, SearchObserver};

use crate::probe::MemoryUsage;
use crate::query::Strategy;

/// Writes query results in the line format consumers expect:
///
/// ```text
/// Type IDS
/// [0] [1]
/// [  2,   0]
/// [  1,   0]
/// [  0,   0]
/// Elapsed time: 42 us
/// ```
pub struct Reporter<W: Write> {
    out: W,
    // First write error raised from inside an observer callback.
    deferred: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            deferred: None,
        }
    }

    pub fn header(&mut self, strategy: Strategy) -> io::Result<()> {
        writeln!(self.out, "Type {strategy}")
    }

    /// IDS progress marker, flushed so it shows while the pass runs.
    pub fn iteration(&mut self, limit: usize) -> io::Result<()> {
        write!(self.out, "[{limit}] ")?;
        self.out.flush()
    }

    /// Terminate the line of progress markers.
    pub fn end_progress(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// One `[  x,   y]` line per coordinate, in the order given.
    pub fn path(&mut self, path: &[Point]) -> io::Result<()> {
        for p in path {
            writeln!(self.out, "[{:>3}, {:>3}]", p.x, p.y)?;
        }
        Ok(())
    }

    pub fn memory(&mut self, usage: MemoryUsage) -> io::Result<()> {
        write!(self.out, "Memory: rss={} kB", usage.resident_kb)?;
        if let Some(peak) = usage.peak_kb {
            write!(self.out, " peak={peak} kB")?;
        }
        writeln!(self.out)
    }

    pub fn elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "Elapsed time: {} us", elapsed.as_micros())?;
        self.out.flush()
    }

    /// Return the first error swallowed by an observer callback, if any.
    pub fn take_deferred(&mut self) -> io::Result<()> {
        match self.deferred.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SearchObserver for Reporter<W> {
    fn on_iteration(&mut self, limit: usize) {
        if self.deferred.is_some() {
            return;
        }
        if let Err(e) = self.iteration(limit) {
            self.deferred = Some(e);
        }
    }

    fn on_expand(&mut self, node: NodeId, depth: usize, step: u32) {
        log::trace!("expand #{} depth {depth} step {step}", node.index());
    }
}
