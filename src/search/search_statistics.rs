use crate::search::HeuristicValue;
use memory_stats::memory_stats;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: u64,
    /// Number of heuristic evaluations
    evaluated_nodes: u64,
    /// Number of nodes created, the root included
    generated_nodes: u64,
    /// Number of successor boards discarded because a node for them already
    /// existed
    duplicate_successors: u64,
    /// Number of frontier nodes dropped for a cheaper node on the same board
    dropped_nodes: u64,
    /// Best heuristic value found so far
    best_heuristic_value: Option<HeuristicValue>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            duplicate_successors: 0,
            dropped_nodes: 0,
            best_heuristic_value: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if self
            .best_heuristic_value
            .map_or(true, |best| heuristic_value < best)
        {
            self.best_heuristic_value = Some(heuristic_value);
            info!(best_heuristic_value = heuristic_value);
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_duplicate_successors(&mut self) {
        self.duplicate_successors += 1;
        self.log_if_needed();
    }

    pub fn increment_dropped_nodes(&mut self) {
        self.dropped_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> u64 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn duplicate_successors(&self) -> u64 {
        self.duplicate_successors
    }

    pub fn dropped_nodes(&self) -> u64 {
        self.dropped_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_successors = self.duplicate_successors,
            dropped_nodes = self.dropped_nodes,
            best_heuristic_value = self.best_heuristic_value,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        let memory_usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        info!(
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            memory_usage_mb = memory_usage_mb,
        );
    }
}
