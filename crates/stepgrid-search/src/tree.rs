use stepgrid_core::Point;

use crate::error::SearchError;
use crate::report::{SearchObserver, SearchStats};
use crate::target::Target;

/// Number of children produced by one call to [`SearchTree::expand`].
pub const CHILDREN_PER_EXPANSION: usize = 5;

/// Stable handle to a node inside a [`SearchTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena. The root is always 0.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Resource bounds for a single query. `None` means unbounded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum number of nodes the tree may hold, root included.
    pub max_nodes: Option<usize>,
    /// Maximum number of IDS outer iterations.
    pub max_iterations: Option<usize>,
}

#[derive(Clone, Debug)]
struct Node {
    pos: Point,
    parent: Option<NodeId>,
    depth: usize,
    children: Vec<NodeId>,
}

/// Arena-backed search tree rooted at a single point.
///
/// Nodes are never removed; the whole tree is dropped at the end of a query.
/// Parent links are plain indices, so walking back to the root cannot dangle.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    pub(crate) limits: SearchLimits,
}

impl SearchTree {
    /// Create a tree holding only `root`.
    pub fn new(root: Point) -> Self {
        Self::with_limits(root, SearchLimits::default())
    }

    /// Create a tree holding only `root`, bounded by `limits`.
    pub fn with_limits(root: Point, limits: SearchLimits) -> Self {
        Self {
            nodes: vec![Node {
                pos: root,
                parent: None,
                depth: 0,
                children: Vec::new(),
            }],
            limits,
        }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The limits this tree was created with.
    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Total number of nodes created so far, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree owns at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn pos(&self, id: NodeId) -> Point {
        self.nodes[id.0].pos
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of parent links between `id` and the root.
    #[inline]
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    #[inline]
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.nodes[id.0].children.is_empty()
    }

    /// Every child `id` owns, in creation order, across all expansions.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[inline]
    pub fn is_target(&self, id: NodeId, target: &Target) -> bool {
        target.is_reached(self.nodes[id.0].pos)
    }

    /// Append five children to `id`, offset by `step`, and return them in
    /// generation order `(+s,0) (-s,0) (0,+s) (0,-s) (0,0)`.
    ///
    /// Expansion is not idempotent: expanding the same node twice appends a
    /// second batch of five rather than returning the first. IDS relies on
    /// this, so every outer iteration adds one more batch per revisited node.
    ///
    /// Fails without touching the tree when the node budget would be
    /// exceeded.
    pub fn expand(&mut self, id: NodeId, step: u32) -> Result<[NodeId; 5], SearchError> {
        if let Some(limit) = self.limits.max_nodes {
            if self.nodes.len() + CHILDREN_PER_EXPANSION > limit {
                log::warn!("node budget of {limit} exhausted while expanding {id:?}");
                return Err(SearchError::NodeBudgetExceeded { limit });
            }
        }

        let s = i64::from(step);
        let parent = &self.nodes[id.0];
        let (pos, depth) = (parent.pos, parent.depth + 1);
        let offsets = [(s, 0), (-s, 0), (0, s), (0, -s), (0, 0)];

        let first = self.nodes.len();
        let ids = std::array::from_fn(|i| NodeId(first + i));
        for (dx, dy) in offsets {
            self.nodes.push(Node {
                pos: pos.shift(dx, dy),
                parent: Some(id),
                depth,
                children: Vec::new(),
            });
        }
        self.nodes[id.0].children.extend_from_slice(&ids);
        log::trace!("expanded {pos} at depth {} with step {step}", depth - 1);
        Ok(ids)
    }

    /// [`expand`](Self::expand) plus bookkeeping shared by all drivers.
    pub(crate) fn expand_tracked<O: SearchObserver + ?Sized>(
        &mut self,
        id: NodeId,
        step: u32,
        stats: &mut SearchStats,
        observer: &mut O,
    ) -> Result<[NodeId; 5], SearchError> {
        let children = self.expand(id, step)?;
        let depth = self.depth(id);
        stats.expansions += 1;
        stats.generated += CHILDREN_PER_EXPANSION;
        stats.max_depth = stats.max_depth.max(depth + 1);
        observer.on_expand(id, depth, step);
        Ok(children)
    }
}

/// Resumable DFS position: the siblings produced by one expansion and the
/// cursor of the next one to try.
pub(crate) struct Frame {
    pub(crate) depth: usize,
    pub(crate) children: [NodeId; 5],
    pub(crate) next: usize,
}

impl Frame {
    pub(crate) fn new(depth: usize, children: [NodeId; 5]) -> Self {
        Self {
            depth,
            children,
            next: 0,
        }
    }

    /// Advance the cursor, yielding the next sibling and its depth.
    pub(crate) fn next_child(&mut self) -> Option<(NodeId, usize)> {
        let child = *self.children.get(self.next)?;
        self.next += 1;
        Some((child, self.depth + 1))
    }
}
