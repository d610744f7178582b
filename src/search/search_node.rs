use crate::search::HeuristicValue;

/// Index of a node in the [`crate::search::SearchSpace`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the frontier
    Open,
    /// Node has been expanded
    Closed,
    /// Node was dropped from the frontier in favour of a cheaper node for the
    /// same board
    Dropped,
}

/// A [`SearchNode`] is a node in the search tree. The board it represents is
/// kept by the search space under the same [`NodeId`].
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// F-value of the node, the value the frontier is ordered by. Fixed when
    /// the node is opened since neither `g` nor `h` can change afterwards.
    f: HeuristicValue,
    /// G-value, the number of moves from the initial board
    g: HeuristicValue,
    /// H-value, the heuristic estimate of the moves left to the goal. Zero in
    /// uninformed search.
    h: HeuristicValue,
    parent_id: NodeId,
}

impl SearchNode {
    /// Create the root node, opened with cost 0.
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            f: h,
            g: 0,
            h,
            parent_id: NO_NODE,
        }
    }

    /// Create an open node one move below `parent`.
    pub fn new_child(node_id: NodeId, parent: &SearchNode, h: HeuristicValue) -> Self {
        let g = parent.g + 1;
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            f: g + h,
            g,
            h,
            parent_id: parent.node_id,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn drop_from_frontier(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Only open nodes can be dropped"
        );
        self.status = SearchNodeStatus::Dropped;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
