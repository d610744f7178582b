//! Uniform-cost search. Every move costs 1, so taking frontier nodes in the
//! order they were inserted already takes them in order of path cost.

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Board, SearchSpace, SearchStatistics, Solution,
};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct UniformCost {}

impl UniformCost {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UniformCost {
    fn search(&mut self, initial_board: Board) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        info!(strategy = "uniform-cost", initial_board = %initial_board);

        // Every node gets h = 0, which leaves the frontier in FIFO order.
        let mut search_space = SearchSpace::new(initial_board, 0);
        statistics.increment_generated_nodes(1);

        while let Some(node_id) = search_space.pop_frontier() {
            search_space.close(node_id);
            statistics.increment_expanded_nodes();

            let board = *search_space.get_board(node_id);
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

            let mut new_nodes = 0;
            for successor in board.possible_moves() {
                if search_space.is_in_frontier(&successor) || search_space.is_visited(&successor)
                {
                    statistics.increment_duplicate_successors();
                    continue;
                }
                search_space.open_child(successor, node_id, 0);
                new_nodes += 1;
            }
            statistics.increment_generated_nodes(new_nodes);
            debug!(board = %board, new_nodes, frontier = search_space.frontier().len());
        }

        info!("frontier exhausted");
        statistics.finalise_search();
        (SearchResult::Exhausted, statistics)
    }
}
