//! Ranking utilities.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::WordGraph;
use crate::pagerank::PageRankConfig;

/// The `k` largest finite, positive scores as `(index, score)`, best first.
///
/// Ties are broken toward the lower index.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() { return Vec::new(); }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 { continue; }
        let Ok(s) = NotNan::new(score) else { continue };
        if heap.len() < k {
            heap.push(Reverse((s, Reverse(i))));
        } else if let Some(&Reverse((min_score, _))) = heap.peek() {
            if s > min_score {
                heap.pop();
                heap.push(Reverse((s, Reverse(i))));
            }
        }
    }
    let mut results: Vec<(usize, f64)> = heap.into_iter().map(|Reverse((s, Reverse(i)))| (i, s.into_inner())).collect();
    results.sort_unstable_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    results
}

impl WordGraph {
    /// The `k` highest-ranked words with their PageRank scores.
    pub fn top_ranked(&self, k: usize, config: PageRankConfig) -> Vec<(&str, f64)> {
        top_k(&self.page_ranks(config), k)
            .into_iter()
            .map(|(id, score)| (self.word(id), score))
            .collect()
    }
}
