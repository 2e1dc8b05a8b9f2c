//! Executes query lines against a fresh search tree and reports the result.

use std::io::{BufRead, Write};
use std::time::Instant;

use stepgrid_core::Point;
use stepgrid_search::{SearchLimits, SearchTree};

use crate::error::RunError;
use crate::output::Reporter;
use crate::probe::MemoryProbe;
use crate::query::{Query, Strategy};

/// Per-session tallies, logged when the input is exhausted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub queries: usize,
    pub found: usize,
    pub rejected: usize,
    pub aborted: usize,
}

pub struct Runner<W: Write> {
    out: Reporter<W>,
    probe: Box<dyn MemoryProbe>,
    limits: SearchLimits,
    summary: Summary,
}

impl<W: Write> Runner<W> {
    pub fn new(out: W, probe: Box<dyn MemoryProbe>, limits: SearchLimits) -> Self {
        Self {
            out: Reporter::new(out),
            probe,
            limits,
            summary: Summary::default(),
        }
    }

    /// Run every line of `input`. Rejected lines and searches stopped by a
    /// limit are logged and skipped; read or write failures end the session.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<Summary, RunError> {
        for line in input.lines() {
            let line = line?;
            match self.run_line(&line) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    log::error!("{line:?}: {e}");
                    self.summary.aborted += 1;
                }
                Err(e) => return Err(e),
            }
        }
        log::info!("session done: {:?}", self.summary);
        Ok(self.summary)
    }

    /// Parse and run a single line, followed by its elapsed time.
    pub fn run_line(&mut self, line: &str) -> Result<(), RunError> {
        let query = match Query::parse(line) {
            Ok(Some(query)) => query,
            Ok(None) => return Ok(()),
            Err(e) => {
                log::warn!("skipping {line:?}: {e}");
                self.summary.rejected += 1;
                return Ok(());
            }
        };

        let start = Instant::now();
        let outcome = self.run_query(&query);
        self.out.elapsed(start.elapsed())?;
        outcome.map(|_| ())
    }

    /// Search for `query.target` from the origin. On success the memory
    /// probe is sampled and the path is printed from target to origin; the
    /// same path is returned.
    pub fn run_query(&mut self, query: &Query) -> Result<Option<Vec<Point>>, RunError> {
        self.summary.queries += 1;
        self.out.header(query.strategy)?;

        let mut tree = SearchTree::with_limits(Point::ZERO, self.limits);
        let report = match query.strategy {
            Strategy::Bfs => tree.bfs(&query.target, &query.steps, &mut ()),
            Strategy::Ids => {
                let report = tree.ids(&query.target, &query.steps, &mut self.out);
                self.out.take_deferred()?;
                self.out.end_progress()?;
                report
            }
            Strategy::Greedy => tree.greedy(&query.target, &query.steps, &mut ()),
        }?;

        log::info!(
            "{}: {} expansions, {} nodes, depth {}",
            query.strategy,
            report.stats.expansions,
            tree.len(),
            report.stats.max_depth
        );

        let Some(found) = report.found else {
            log::info!("{}: target {} not found", query.strategy, query.target.point());
            return Ok(None);
        };

        self.summary.found += 1;
        if let Some(usage) = self.probe.sample() {
            self.out.memory(usage)?;
        }
        let path = tree.backtrace(found);
        self.out.path(&path)?;
        Ok(Some(path))
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{MemoryUsage, NoProbe};

    struct FixedProbe;

    impl MemoryProbe for FixedProbe {
        fn sample(&self) -> Option<MemoryUsage> {
            Some(MemoryUsage {
                resident_kb: 64,
                peak_kb: Some(128),
            })
        }
    }

    fn session(
        input: &str,
        probe: Box<dyn MemoryProbe>,
        limits: SearchLimits,
    ) -> (Summary, Vec<String>) {
        let mut runner = Runner::new(Vec::new(), probe, limits);
        let summary = runner.run(input.as_bytes()).unwrap();
        let text = String::from_utf8(runner.into_inner()).unwrap();
        // Elapsed times vary; keep only the label.
        let lines = text
            .lines()
            .map(|l| match l.strip_prefix("Elapsed time: ") {
                Some(_) => "Elapsed time".to_string(),
                None => l.to_string(),
            })
            .collect();
        (summary, lines)
    }

    #[test]
    fn bfs_prints_path_target_first() {
        let (summary, lines) = session("BFS 9 0 9\n", Box::new(NoProbe), Default::default());
        assert_eq!(lines, ["Type BFS", "[  9,   0]", "[  0,   0]", "Elapsed time"]);
        assert_eq!(summary.found, 1);
    }

    #[test]
    fn bfs_not_found_prints_no_path() {
        let (summary, lines) = session("BFS 100 100 1\n", Box::new(NoProbe), Default::default());
        assert_eq!(lines, ["Type BFS", "Elapsed time"]);
        assert_eq!(summary.queries, 1);
        assert_eq!(summary.found, 0);
    }

    #[test]
    fn ids_prints_progress_then_path() {
        let (_, lines) = session("IDS 2 0 1 1\n", Box::new(NoProbe), Default::default());
        assert_eq!(
            lines,
            ["Type IDS", "[0] [1] ", "[  2,   0]", "[  1,   0]", "[  0,   0]", "Elapsed time"]
        );
    }

    #[test]
    fn greedy_reports_memory_before_path() {
        let (_, lines) = session("A* 0 9 9\n", Box::new(FixedProbe), Default::default());
        assert_eq!(
            lines,
            [
                "Type A*",
                "Memory: rss=64 kB peak=128 kB",
                "[  0,   9]",
                "[  0,   0]",
                "Elapsed time"
            ]
        );
    }

    #[test]
    fn root_target_prints_root_only() {
        for kind in ["BFS", "IDS", "A*"] {
            let input = format!("{kind} 0 0 5 5\n");
            let (_, lines) = session(&input, Box::new(NoProbe), Default::default());
            let coords: Vec<&str> = lines
                .iter()
                .map(String::as_str)
                .filter(|l| l.contains(','))
                .collect();
            assert_eq!(coords, ["[  0,   0]"], "{kind}: {lines:?}");
        }
    }

    #[test]
    fn unknown_type_is_skipped() {
        let input = "\nDFS 1 1 1\nBFS 1 0 1\n";
        let (summary, lines) = session(input, Box::new(NoProbe), Default::default());
        assert_eq!(lines, ["Type BFS", "[  1,   0]", "[  0,   0]", "Elapsed time"]);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.queries, 1);
    }

    #[test]
    fn malformed_target_still_runs() {
        // "x" stops the read: target (0, 0), no steps, so the root matches.
        let (summary, lines) = session("BFS x 0 9\n", Box::new(NoProbe), Default::default());
        assert_eq!(lines, ["Type BFS", "[  0,   0]", "Elapsed time"]);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.found, 1);

        let (summary, lines) = session("BFS 5\n", Box::new(NoProbe), Default::default());
        assert_eq!(lines, ["Type BFS", "Elapsed time"]);
        assert_eq!(summary.queries, 1);
        assert_eq!(summary.found, 0);
    }

    #[test]
    fn extreme_coordinates_and_steps() {
        let input = "A* 2147483647 0 1\nBFS 5 5 3000000000 3000000000\nIDS -2147483648 0 4000000000\n";
        let limits = SearchLimits {
            max_iterations: Some(4),
            ..Default::default()
        };
        let (summary, lines) = session(input, Box::new(NoProbe), limits);
        assert_eq!(
            lines,
            [
                "Type A*",
                "Elapsed time",
                "Type BFS",
                "Elapsed time",
                "Type IDS",
                "[0] [1] [2] [3] ",
                "Elapsed time"
            ]
        );
        assert_eq!(summary.queries, 3);
        assert_eq!(summary.found, 0);
        assert_eq!(summary.aborted, 1);
    }

    #[test]
    fn capped_ids_moves_on() {
        let limits = SearchLimits {
            max_iterations: Some(3),
            ..Default::default()
        };
        let (summary, lines) = session("IDS 1 1 0 0\nBFS 0 0\n", Box::new(NoProbe), limits);
        assert_eq!(
            lines,
            ["Type IDS", "[0] [1] [2] ", "Elapsed time", "Type BFS", "[  0,   0]", "Elapsed time"]
        );
        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.found, 1);
    }

    #[test]
    fn node_budget_aborts_query() {
        let limits = SearchLimits {
            max_nodes: Some(10),
            ..Default::default()
        };
        let mut runner = Runner::new(Vec::new(), Box::new(NoProbe), limits);
        let query = Query::parse("A* 50 50 1 1 1").unwrap().unwrap();
        let err = runner.run_query(&query).unwrap_err();
        assert!(err.is_recoverable());
    }
}
