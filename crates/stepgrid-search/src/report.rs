use crate::tree::NodeId;

/// Counters collected while a driver runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Calls to `expand`.
    pub expansions: usize,
    /// Nodes created, root excluded.
    pub generated: usize,
    /// Outer iterations: depth limits tried by IDS, 1 for the other drivers.
    pub iterations: usize,
    /// Deepest node created.
    pub max_depth: usize,
}

/// Result of a search that ran to completion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// The first node found to satisfy the target, if any.
    pub found: Option<NodeId>,
    pub stats: SearchStats,
}

impl SearchReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Hooks invoked while a driver runs. All methods default to no-ops.
pub trait SearchObserver {
    /// IDS is about to run a depth-bounded pass with this `limit`.
    fn on_iteration(&mut self, _limit: usize) {}

    /// `node` at `depth` was just expanded with `step`.
    fn on_expand(&mut self, _node: NodeId, _depth: usize, _step: u32) {}
}

impl SearchObserver for () {}
