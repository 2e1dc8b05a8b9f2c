use crate::error::SearchError;
use crate::report::{SearchObserver, SearchReport, SearchStats};
use crate::steps::StepSequence;
use crate::target::Target;
use crate::tree::{Frame, NodeId, SearchTree};

impl SearchTree {
    /// Iterative-deepening depth-first search.
    ///
    /// Runs a depth-bounded pass with `limit = 0, 1, 2, ...` until one finds
    /// the target. Each pass expands every node it visits again, so nodes
    /// revisited from earlier passes collect one extra batch of five
    /// children per pass; only the fresh batch is walked.
    ///
    /// The outer loop has no bound of its own. An unreachable target keeps
    /// it running until [`SearchLimits::max_iterations`](crate::SearchLimits)
    /// or the node budget stops it.
    pub fn ids<O: SearchObserver + ?Sized>(
        &mut self,
        target: &Target,
        steps: &StepSequence,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        log::debug!("ids: target {} over {} levels", target.point(), steps.len());
        let mut stats = SearchStats::default();

        if self.is_target(self.root(), target) {
            return Ok(SearchReport {
                found: Some(self.root()),
                stats,
            });
        }

        let mut limit = 0;
        loop {
            if let Some(cap) = self.limits.max_iterations {
                if limit >= cap {
                    log::warn!("ids: iteration cap {cap} reached, {} not found", target.point());
                    return Err(SearchError::IterationCapReached { cap });
                }
            }

            stats.iterations += 1;
            observer.on_iteration(limit);
            log::debug!("ids: pass with limit {limit}, tree holds {} nodes", self.len());

            if let Some(found) = self.depth_limited(target, steps, limit, &mut stats, observer)? {
                log::debug!("ids: found at limit {limit}");
                return Ok(SearchReport {
                    found: Some(found),
                    stats,
                });
            }
            limit += 1;
        }
    }

    /// One pass of IDS: DFS from the root that does not expand below
    /// `limit` or past the end of `steps`.
    fn depth_limited<O: SearchObserver + ?Sized>(
        &mut self,
        target: &Target,
        steps: &StepSequence,
        limit: usize,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> Result<Option<NodeId>, SearchError> {
        let mut stack = Vec::new();
        if let Some(frame) = self.open(self.root(), 0, limit, steps, stats, observer)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some((child, depth)) = frame.next_child() else {
                stack.pop();
                continue;
            };
            if self.is_target(child, target) {
                return Ok(Some(child));
            }
            if let Some(frame) = self.open(child, depth, limit, steps, stats, observer)? {
                stack.push(frame);
            }
        }
        Ok(None)
    }

    fn open<O: SearchObserver + ?Sized>(
        &mut self,
        id: NodeId,
        depth: usize,
        limit: usize,
        steps: &StepSequence,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> Result<Option<Frame>, SearchError> {
        if depth > limit {
            return Ok(None);
        }
        let Some(step) = steps.get(depth) else {
            return Ok(None);
        };
        let children = self.expand_tracked(id, step, stats, observer)?;
        Ok(Some(Frame::new(depth, children)))
    }
}
