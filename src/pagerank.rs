//! PageRank centrality.

use crate::graph::{GraphRef, WordGraph};
use crate::tokenize::preprocess;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    pub damping: f64,
    /// Number of synchronous sweeps. Exactly this many run unless `tolerance` is set.
    pub max_iterations: usize,
    /// Optional L1 convergence threshold for an early exit.
    pub tolerance: Option<f64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 100, tolerance: None }
    }
}

/// Unweighted PageRank; a node's mass is split evenly over its distinct out-edges.
///
/// Mass held by dangling nodes (no out-edges) is redistributed uniformly every sweep, so
/// the scores keep summing to 1.
pub fn pagerank<G: GraphRef>(graph: &G, config: PageRankConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 { return Vec::new(); }
    let n_f64 = n as f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let out_degrees: Vec<usize> = (0..n).map(|i| graph.out_degree(i)).collect();

    for _ in 0..config.max_iterations {
        let dangling_sum: f64 = out_degrees.iter().enumerate().filter(|(_, &deg)| deg == 0).map(|(i, _)| scores[i]).sum();
        let dangling_contrib = config.damping * dangling_sum / n_f64;
        let teleport = (1.0 - config.damping) / n_f64;
        new_scores.fill(teleport + dangling_contrib);

        for u in 0..n {
            let deg = out_degrees[u];
            if deg > 0 {
                let share = config.damping * scores[u] / deg as f64;
                for &v in graph.neighbors_ref(u) {
                    new_scores[v] += share;
                }
            }
        }

        let diff: f64 = scores.iter().zip(new_scores.iter()).map(|(old, new)| (old - new).abs()).sum();
        std::mem::swap(&mut scores, &mut new_scores);
        if config.tolerance.is_some_and(|tol| diff < tol) { break; }
    }
    scores
}

impl WordGraph {
    /// PageRank of every word, indexed by vertex id.
    pub fn page_ranks(&self, config: PageRankConfig) -> Vec<f64> {
        pagerank(self, config)
    }

    /// PageRank of one word (normalized internally); `None` if the word is not in the graph.
    pub fn page_rank(&self, word: &str, config: PageRankConfig) -> Option<f64> {
        let id = self.id(&preprocess(word))?;
        pagerank(self, config).get(id).copied()
    }
}
