use std::collections::VecDeque;

use crate::error::SearchError;
use crate::report::{SearchObserver, SearchReport, SearchStats};
use crate::steps::StepSequence;
use crate::target::Target;
use crate::tree::SearchTree;

impl SearchTree {
    /// Level-order search from the root.
    ///
    /// Level `d` is expanded with `steps[d]`. Once the sequence runs out the
    /// last frontier is still checked against the target, but nothing more
    /// is expanded. Since every node of a level shares one step size, the
    /// first match is at the smallest depth that can reach the target.
    pub fn bfs<O: SearchObserver + ?Sized>(
        &mut self,
        target: &Target,
        steps: &StepSequence,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        log::debug!("bfs: target {} over {} levels", target.point(), steps.len());
        let mut stats = SearchStats {
            iterations: 1,
            ..Default::default()
        };

        let mut frontier = VecDeque::from([self.root()]);
        let mut depth = 0;

        let found = 'search: loop {
            let step = steps.get(depth);
            let mut next = VecDeque::with_capacity(frontier.len() * 5);

            while let Some(id) = frontier.pop_front() {
                if self.is_target(id, target) {
                    break 'search Some(id);
                }
                if let Some(step) = step {
                    let children = self.expand_tracked(id, step, &mut stats, observer)?;
                    next.extend(children);
                }
            }

            if step.is_none() || next.is_empty() {
                break 'search None;
            }
            frontier = next;
            depth += 1;
        };

        log::debug!(
            "bfs: found={} after {} expansions",
            found.is_some(),
            stats.expansions
        );
        Ok(SearchReport { found, stats })
    }
}
