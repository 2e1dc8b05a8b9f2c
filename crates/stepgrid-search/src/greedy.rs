use crate::error::SearchError;
use crate::heuristic::heuristic;
use crate::report::{SearchObserver, SearchReport, SearchStats};
use crate::steps::StepSequence;
use crate::target::Target;
use crate::tree::{Frame, NodeId, SearchTree};

impl SearchTree {
    /// Depth-first search that tries siblings closest to the target first.
    ///
    /// Each node at depth `d < steps.len()` is expanded once with `steps[d]`
    /// and its five children are visited in ascending [`heuristic`] order,
    /// ties kept in generation order. There is no global open list: a failed
    /// branch is backtracked and the next sibling tried, so the worst case
    /// walks the same tree as plain DFS.
    pub fn greedy<O: SearchObserver + ?Sized>(
        &mut self,
        target: &Target,
        steps: &StepSequence,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        log::debug!("greedy: target {} over {} levels", target.point(), steps.len());
        let mut stats = SearchStats {
            iterations: 1,
            ..Default::default()
        };

        let root = self.root();
        let found = if self.is_target(root, target) {
            Some(root)
        } else {
            self.greedy_from(root, target, steps, &mut stats, observer)?
        };

        log::debug!(
            "greedy: found={} after {} expansions",
            found.is_some(),
            stats.expansions
        );
        Ok(SearchReport { found, stats })
    }

    /// Reorder `children` by ascending heuristic towards `target`. The sort
    /// is stable, so equal estimates keep their relative order.
    pub fn order_by_heuristic(&self, children: &mut [NodeId], target: &Target) {
        children.sort_by_key(|&id| heuristic(self.pos(id), target.point()));
    }

    fn greedy_from<O: SearchObserver + ?Sized>(
        &mut self,
        root: NodeId,
        target: &Target,
        steps: &StepSequence,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> Result<Option<NodeId>, SearchError> {
        let mut stack = Vec::new();
        if let Some(frame) = self.open_sorted(root, 0, target, steps, stats, observer)? {
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
            if let Some(frame) = self.open_sorted(child, depth, target, steps, stats, observer)? {
                stack.push(frame);
            }
        }
        Ok(None)
    }

    fn open_sorted<O: SearchObserver + ?Sized>(
        &mut self,
        id: NodeId,
        depth: usize,
        target: &Target,
        steps: &StepSequence,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> Result<Option<Frame>, SearchError> {
        let Some(step) = steps.get(depth) else {
            return Ok(None);
        };
        let mut children = self.expand_tracked(id, step, stats, observer)?;
        self.order_by_heuristic(&mut children, target);
        Ok(Some(Frame::new(depth, children)))
    }
}

#[cfg(test)]
mod tests {
    use stepgrid_core::Point;

    use super::*;
    use crate::SearchLimits;

    fn run(target: Point, steps: &[u32]) -> (SearchTree, SearchReport) {
        let mut tree = SearchTree::new(Point::ZERO);
        let report = tree
            .greedy(&Target::new(target), &StepSequence::from(steps.to_vec()), &mut ())
            .unwrap();
        (tree, report)
    }

    #[test]
    fn root_is_target() {
        let (tree, report) = run(Point::ZERO, &[1, 2]);
        assert_eq!(report.found, Some(tree.root()));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn ordering_is_non_decreasing_and_stable() {
        let mut tree = SearchTree::new(Point::ZERO);
        let target = Target::new(Point::new(0, 27));
        let mut kids = tree.expand(tree.root(), 9).unwrap();
        let generated = kids;
        tree.order_by_heuristic(&mut kids, &target);

        let hs: Vec<u64> = kids
            .iter()
            .map(|&k| heuristic(tree.pos(k), target.point()))
            .collect();
        assert!(hs.windows(2).all(|w| w[0] <= w[1]), "{hs:?}");
        // (0,+9) scores 2, stay scores 3, and (+9,0) (-9,0) (0,-9) tie at 4
        // in generation order.
        assert_eq!(
            kids,
            [generated[2], generated[4], generated[0], generated[1], generated[3]]
        );
        // Sorting the handles leaves the owned child list untouched.
        assert_eq!(tree.children(tree.root()), &generated);
    }

    #[test]
    fn heads_straight_for_target() {
        let (tree, report) = run(Point::new(0, 27), &[9, 9, 9]);
        let found = report.found.unwrap();
        assert_eq!(
            tree.backtrace(found),
            vec![Point::new(0, 27), Point::new(0, 18), Point::new(0, 9), Point::ZERO]
        );
        // One expansion per level on the way down, nothing else.
        assert_eq!(report.stats.expansions, 3);
    }

    #[test]
    fn backtracks_when_best_branch_fails() {
        // h truncates, so with step 1 every child looks equally good and the
        // search falls back on generation order, backtracking through the
        // (+1,0) and (-1,0) subtrees before trying (0,+1).
        let (tree, report) = run(Point::new(0, 2), &[1, 1]);
        let found = report.found.unwrap();
        assert_eq!(
            tree.backtrace(found),
            vec![Point::new(0, 2), Point::new(0, 1), Point::ZERO]
        );
        assert_eq!(report.stats.expansions, 1 + 3);
    }

    #[test]
    fn exhausted_sequence_is_not_found() {
        let (tree, report) = run(Point::new(100, 100), &[1]);
        assert_eq!(report.found, None);
        assert_eq!(report.stats.expansions, 1);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn empty_sequence_checks_root_only() {
        let (tree, report) = run(Point::new(3, 3), &[]);
        assert!(!report.is_found());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn each_node_expanded_at_most_once() {
        let (tree, report) = run(Point::new(50, 50), &[1, 1, 1]);
        assert!(!report.is_found());
        // Full five-way tree of depth 3.
        assert_eq!(tree.len(), 1 + 5 + 25 + 125);
        assert_eq!(report.stats.expansions, 1 + 5 + 25);
        assert_eq!(tree.children(tree.root()).len(), 5);
    }

    #[test]
    fn budget_stops_search() {
        let mut tree = SearchTree::with_limits(
            Point::ZERO,
            SearchLimits {
                max_nodes: Some(12),
                ..Default::default()
            },
        );
        let err = tree
            .greedy(
                &Target::new(Point::new(50, 50)),
                &StepSequence::from([1, 1, 1]),
                &mut (),
            )
            .unwrap_err();
        assert_eq!(err, SearchError::NodeBudgetExceeded { limit: 12 });
    }
}
