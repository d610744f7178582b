//! A* search with the Manhattan distance heuristic.
//!
//! The frontier is ordered by `f = g + h`, ties going to the node inserted
//! first. A successor is skipped only if its board has already been expanded;
//! otherwise a new node is always added, even when the frontier already holds
//! a node for the same board. The older node is then dropped if it is strictly
//! more expensive, and kept alongside the new one if not.

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Board, Heuristic, ManhattanDistance, NodeId, SearchSpace, SearchStatistics, Solution,
};
use tracing::{debug, info};

#[derive(Debug)]
pub struct AStar {
    heuristic: ManhattanDistance,
    /// Take a frontier node for the initial board before anything else
    root_reselection: bool,
}

impl AStar {
    pub fn new(root_reselection: bool) -> Self {
        Self {
            heuristic: ManhattanDistance::new(),
            root_reselection,
        }
    }

    fn select(&self, search_space: &mut SearchSpace) -> Option<NodeId> {
        if self.root_reselection {
            let root_board = *search_space.get_root_board();
            if let Some(node_id) = search_space.first_in_frontier(&root_board) {
                let taken = search_space.take_from_frontier(node_id);
                debug_assert!(taken, "indexed node {:?} not in frontier", node_id);
                return Some(node_id);
            }
        }
        search_space.pop_frontier()
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SearchEngine for AStar {
    fn search(&mut self, initial_board: Board) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        info!(
            strategy = "astar",
            initial_board = %initial_board,
            root_reselection = self.root_reselection
        );

        let initial_h = self.heuristic.evaluate(&initial_board);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(initial_h);
        let mut search_space = SearchSpace::new(initial_board, initial_h);
        statistics.increment_generated_nodes(1);

        while let Some(node_id) = self.select(&mut search_space) {
            search_space.close(node_id);
            statistics.increment_expanded_nodes();

            let board = *search_space.get_board(node_id);
            let g_value = search_space.get_node(node_id).get_g();
            if board.is_goal() {
                let solution = Solution::new(
                    search_space.extract_path(node_id),
                    search_space.visited().len(),
                    search_space.frontier().len(),
                );
                info!(moves = solution.moves(), "goal reached");
                statistics.finalise_search();
                return (SearchResult::Solved(solution), statistics);
            }

            let successors: Vec<Board> = board
                .possible_moves()
                .into_iter()
                .filter(|successor| {
                    let visited = search_space.is_visited(successor);
                    if visited {
                        statistics.increment_duplicate_successors();
                    }
                    !visited
                })
                .collect();
            let h_values = self.heuristic.evaluate_batch(&successors);

            for (successor, h_value) in successors.into_iter().zip(h_values) {
                let existing = search_space.first_in_frontier(&successor);
                let child_id = search_space.open_child(successor, node_id, h_value);
                statistics.increment_generated_nodes(1);
                statistics.increment_evaluated_nodes();
                statistics.register_heuristic_value(search_space.get_node(child_id).get_h());

                let Some(existing_id) = existing else {
                    continue;
                };
                if search_space.get_node(existing_id).get_g() > g_value + 1 {
                    let dropped = search_space.drop_from_frontier(existing_id);
                    debug_assert!(
                        dropped,
                        "node {:?} for {} vanished from the frontier",
                        existing_id, successor
                    );
                    statistics.increment_dropped_nodes();
                    debug!(board = %successor, "dropped costlier frontier node");
                }
            }
        }

        info!("frontier exhausted");
        statistics.finalise_search();
        (SearchResult::Exhausted, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::UniformCost, validate};
    use crate::test_utils::*;

    #[test]
    fn goal_board_needs_no_moves() {
        let (result, _) = AStar::default().search(Board::goal());
        let solution = result.solution().unwrap();
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.unexpanded_nodes(), 0);
    }

    #[test]
    fn solves_two_move_board_like_uniform_cost() {
        let board = Board::new(TWO_MOVE_TILES).unwrap();
        let (astar, astar_statistics) = AStar::default().search(board);
        let (uniform, uniform_statistics) = UniformCost::new().search(board);
        let astar = astar.solution().unwrap();
        let uniform = uniform.solution().unwrap();

        assert_eq!(astar.moves(), 2);
        assert_eq!(astar.path(), uniform.path());
        // The heuristic leads straight down, expanding only the root, the
        // middle board and the goal.
        assert_eq!(astar.expanded_nodes(), 3);
        assert!(astar_statistics.expanded_nodes() < uniform_statistics.expanded_nodes());
    }

    #[test]
    fn root_reselection_does_not_change_results() {
        for sample in sample_boards() {
            let (with, _) = AStar::new(true).search(sample);
            let (without, _) = AStar::new(false).search(sample);
            assert_eq!(with, without);
        }
    }

    #[test]
    fn matches_uniform_cost_path_length() {
        for sample in sample_boards() {
            let (astar, _) = AStar::default().search(sample);
            let (uniform, _) = UniformCost::new().search(sample);
            assert_eq!(
                astar.solution().unwrap().moves(),
                uniform.solution().unwrap().moves(),
                "different path lengths for {}",
                sample
            );
        }
    }

    #[test]
    fn matches_uniform_cost_on_default_board() {
        let board = Board::default_initial();
        let (astar, astar_statistics) = AStar::default().search(board);
        let (uniform, _) = UniformCost::new().search(board);
        let astar = astar.solution().unwrap();
        assert_eq!(astar.moves(), 30);
        assert_eq!(astar.moves(), uniform.solution().unwrap().moves());
        assert!(validate(&board, astar.path()).is_ok());
        // Costlier frontier nodes are dropped along the way, and the path is
        // still a shortest one.
        assert!(astar_statistics.dropped_nodes() > 0);
    }

    #[test]
    fn dropping_costlier_nodes_keeps_paths_optimal() {
        let board = Board::default_initial();
        for root_reselection in [true, false] {
            let (result, statistics) = AStar::new(root_reselection).search(board);
            let solution = result.solution().unwrap();
            assert!(statistics.dropped_nodes() > 0);
            assert_eq!(solution.moves(), 30);
            // Nothing is dropped that was already expanded or never opened.
            assert!(statistics.dropped_nodes() < statistics.generated_nodes());
            assert_eq!(
                solution.expanded_nodes() + solution.unexpanded_nodes(),
                (statistics.generated_nodes() - statistics.dropped_nodes()) as usize
            );
        }
    }

    #[test]
    fn paths_are_chains_of_legal_moves() {
        for sample in sample_boards() {
            let (result, _) = AStar::default().search(sample);
            let path = result.solution().unwrap().path().to_vec();
            assert_eq!(path[0], sample);
            assert!(path.last().unwrap().is_goal());
            for step in path.windows(2) {
                assert!(step[0].possible_moves().contains(&step[1]));
            }
        }
    }

    #[test]
    fn terminates_on_unsolvable_board() {
        let (result, statistics) = AStar::default().search(Board::new(UNSOLVABLE_TILES).unwrap());
        assert_eq!(result, SearchResult::Exhausted);
        assert!(statistics.expanded_nodes() >= 181_440);
    }
}
