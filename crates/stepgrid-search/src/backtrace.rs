use stepgrid_core::Point;

use crate::tree::{NodeId, SearchTree};

impl SearchTree {
    /// Coordinates from `node` up to the root, following parent links.
    ///
    /// The node itself comes first and the root last; callers wanting
    /// root-to-goal order reverse it themselves.
    pub fn backtrace(&self, node: NodeId) -> Vec<Point> {
        let mut path = Vec::with_capacity(self.depth(node) + 1);
        let mut cur = Some(node);
        while let Some(id) = cur {
            path.push(self.pos(id));
            cur = self.parent(id);
        }
        path
    }
}
