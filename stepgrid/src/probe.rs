//! Process memory introspection, reported alongside a found path.

use std::fs;
use std::path::PathBuf;

/// Resident memory of the current process, in kilobytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemoryUsage {
    pub resident_kb: u64,
    pub peak_kb: Option<u64>,
}

/// Source of memory figures. Returns `None` when nothing can be measured.
pub trait MemoryProbe {
    fn sample(&self) -> Option<MemoryUsage>;
}

/// Probe that never reports anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoProbe;

impl MemoryProbe for NoProbe {
    fn sample(&self) -> Option<MemoryUsage> {
        None
    }
}

/// Reads `VmRSS` / `VmHWM` from a Linux `/proc/<pid>/status` file.
#[derive(Clone, Debug)]
pub struct ProcStatusProbe {
    path: PathBuf,
}

impl Default for ProcStatusProbe {
    fn default() -> Self {
        Self::new("/proc/self/status")
    }
}

impl ProcStatusProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MemoryProbe for ProcStatusProbe {
    fn sample(&self) -> Option<MemoryUsage> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_status(&text),
            Err(e) => {
                log::debug!("cannot read {}: {e}", self.path.display());
                None
            }
        }
    }
}

/// Extract memory figures from the text of a `/proc/<pid>/status` file.
pub fn parse_status(text: &str) -> Option<MemoryUsage> {
    let field = |name: &str| {
        text.lines()
            .find_map(|line| line.strip_prefix(name)?.strip_prefix(':'))
            .and_then(|rest| rest.split_whitespace().next()?.parse::<u64>().ok())
    };
    Some(MemoryUsage {
        resident_kb: field("VmRSS")?,
        peak_kb: field("VmHWM"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "\
Name:\tstepgrid
VmPeak:\t   12000 kB
VmHWM:\t    4096 kB
VmRSS:\t    3500 kB
Threads:\t1
";

    #[test]
    fn parses_rss_and_peak() {
        assert_eq!(
            parse_status(STATUS),
            Some(MemoryUsage {
                resident_kb: 3500,
                peak_kb: Some(4096),
            })
        );
    }

    #[test]
    fn missing_rss_is_none() {
        assert_eq!(parse_status("Name:\tx\nVmHWM:\t10 kB\n"), None);
    }

    #[test]
    fn unreadable_file_is_none() {
        let probe = ProcStatusProbe::new("/nonexistent/stepgrid/status");
        assert_eq!(probe.sample(), None);
        assert_eq!(NoProbe.sample(), None);
    }
}
