use crate::search::{
    Board, BoardKey, HeuristicValue, NodeId, SearchNode, SearchNodeStatus, NO_NODE,
};
use priority_queue::PriorityQueue;
use segvec::{Linear, SegVec};
use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet, VecDeque},
};

/// Frontier entries are ordered by lowest f-value first and, among equal
/// f-values, by insertion order. A frontier whose nodes all share one f-value
/// is therefore a FIFO queue.
type FrontierPriority = Reverse<(HeuristicValue, u64)>;

/// Nodes waiting to be expanded.
///
/// The frontier may hold several nodes for the same board, so the index from
/// board to nodes keeps every such node in insertion order.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, FrontierPriority>,
    index: HashMap<BoardKey, VecDeque<NodeId>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, node_id: NodeId, key: BoardKey, f: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(node_id, Reverse((f, sequence)));
        self.index.entry(key).or_default().push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    /// Remove `node_id` from the board index. Returns false if it was not
    /// indexed under `key`.
    fn unindex(&mut self, node_id: NodeId, key: BoardKey) -> bool {
        let Some(nodes) = self.index.get_mut(&key) else {
            return false;
        };
        let Some(position) = nodes.iter().position(|&id| id == node_id) else {
            return false;
        };
        nodes.remove(position);
        if nodes.is_empty() {
            self.index.remove(&key);
        }
        true
    }

    fn remove(&mut self, node_id: NodeId) -> bool {
        self.queue.remove(&node_id).is_some()
    }

    fn first_with_key(&self, key: BoardKey) -> Option<NodeId> {
        self.index.get(&key).and_then(|nodes| nodes.front().copied())
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Nodes already expanded, in expansion order.
#[derive(Debug, Default)]
pub struct Visited {
    nodes: Vec<NodeId>,
    keys: HashSet<BoardKey>,
}

impl Visited {
    fn insert(&mut self, node_id: NodeId, key: BoardKey) {
        self.nodes.push(node_id);
        self.keys.insert(key);
    }

    fn contains(&self, key: BoardKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of expansions. Counts a board twice if two nodes for it were
    /// expanded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A [`SearchSpace`] owns every node created during one search run together
/// with the frontier and visited collections. Nodes refer to their parents by
/// [`NodeId`], so the tree needs no shared ownership.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    boards: SegVec<Board, Linear>,
    frontier: Frontier,
    visited: Visited,
}

impl SearchSpace {
    /// Create a search space whose frontier holds only the root node.
    pub fn new(initial_board: Board, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut boards = SegVec::new();
        let mut frontier = Frontier::default();

        let root_node_id = NodeId::new(0);
        let root_node = SearchNode::new_root(root_node_id, h);
        frontier.push(root_node_id, initial_board.key(), root_node.get_f());
        nodes.push(root_node);
        boards.push(initial_board);

        Self {
            root_node_id,
            nodes,
            boards,
            frontier,
            visited: Visited::default(),
        }
    }

    /// Create a node for `board` below `parent_id` and append it to the
    /// frontier.
    pub fn open_child(&mut self, board: Board, parent_id: NodeId, h: HeuristicValue) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_child(node_id, self.get_node(parent_id), h);
        self.frontier.push(node_id, board.key(), node.get_f());
        self.nodes.push(node);
        self.boards.push(board);
        node_id
    }

    /// Take the frontier node with the lowest f-value, earliest inserted
    /// first.
    pub fn pop_frontier(&mut self) -> Option<NodeId> {
        let node_id = self.frontier.pop()?;
        let key = self.get_board(node_id).key();
        let indexed = self.frontier.unindex(node_id, key);
        debug_assert!(indexed, "frontier node {:?} missing from index", node_id);
        Some(node_id)
    }

    /// Take a specific node out of the frontier. Returns false if the node was
    /// not in the frontier.
    pub fn take_from_frontier(&mut self, node_id: NodeId) -> bool {
        if !self.frontier.remove(node_id) {
            return false;
        }
        let key = self.get_board(node_id).key();
        let indexed = self.frontier.unindex(node_id, key);
        debug_assert!(indexed, "frontier node {:?} missing from index", node_id);
        true
    }

    /// Drop a frontier node that has been superseded by a cheaper node for the
    /// same board. Returns false if the node was not in the frontier.
    pub fn drop_from_frontier(&mut self, node_id: NodeId) -> bool {
        if !self.take_from_frontier(node_id) {
            return false;
        }
        self.get_node_mut(node_id).drop_from_frontier();
        true
    }

    /// Move a node taken from the frontier into the visited collection.
    pub fn close(&mut self, node_id: NodeId) {
        let key = self.get_board(node_id).key();
        self.get_node_mut(node_id).close();
        self.visited.insert(node_id, key);
    }

    pub fn is_in_frontier(&self, board: &Board) -> bool {
        self.frontier.first_with_key(board.key()).is_some()
    }

    /// The earliest inserted frontier node for `board`, if any.
    pub fn first_in_frontier(&self, board: &Board) -> Option<NodeId> {
        self.frontier.first_with_key(board.key())
    }

    pub fn is_visited(&self, board: &Board) -> bool {
        self.visited.contains(board.key())
    }

    /// Boards from the initial board down to `goal_id`, following parent
    /// links.
    pub fn extract_path(&self, goal_id: NodeId) -> Vec<Board> {
        let mut path = vec![];
        let mut current_id = goal_id;
        while current_id != NO_NODE {
            path.push(*self.get_board(current_id));
            current_id = self.get_node(current_id).get_parent_id();
        }
        path.reverse();
        path
    }

    #[inline(always)]
    pub fn root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_board(&self) -> &Board {
        self.get_board(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_board(&self, node_id: NodeId) -> &Board {
        self.boards.get(node_id.id()).expect("Invalid node id")
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    pub fn count_with_status(&self, status: SearchNodeStatus) -> usize {
        (0..self.nodes.len())
            .filter(|&id| self.get_node(NodeId::new(id)).get_status() == status)
            .count()
    }
}
