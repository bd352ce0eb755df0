//! Weighted shortest paths (Dijkstra).
//!
//! Edge weight is used directly as traversal cost. In a word graph the weight is a
//! co-occurrence count, so frequent transitions are *longer*, not shorter.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::graph::{GraphRef, WeightedGraphRef, WordGraph};
use crate::tokenize::preprocess;

/// Single-source shortest-path tree.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    dist: Vec<Option<u64>>,
    pred: Vec<Option<usize>>,
}

/// One reconstructed path: node ids from source to target, plus total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub nodes: Vec<usize>,
    pub length: u64,
}

impl ShortestPathTree {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Total weight of the best path to `target`, or `None` if unreachable.
    pub fn distance(&self, target: usize) -> Option<u64> {
        self.dist.get(target).copied().flatten()
    }

    /// Reconstruct the path to `target` by walking predecessor links back to the source.
    pub fn path_to(&self, target: usize) -> Option<ShortestPath> {
        let length = self.distance(target)?;
        let mut nodes = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.pred[cur]?;
            nodes.push(cur);
        }
        nodes.reverse();
        Some(ShortestPath { nodes, length })
    }
}

/// Dijkstra from `source` over non-negative integer weights.
///
/// Stale heap entries (popped distance worse than the recorded best) are skipped.
pub fn dijkstra<G: WeightedGraphRef>(graph: &G, source: usize) -> ShortestPathTree {
    let n = graph.node_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    if source < n {
        dist[source] = Some(0);
        heap.push(Reverse((0u64, source)));
    }

    while let Some(Reverse((d, u))) = heap.pop() {
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        let (nbrs, wts) = graph.neighbors_and_weights_ref(u);
        for (&v, &w) in nbrs.iter().zip(wts) {
            let nd = d + u64::from(w);
            if dist[v].map_or(true, |best| nd < best) {
                trace!("relax {u} -> {v}: {nd}");
                dist[v] = Some(nd);
                pred[v] = Some(u);
                heap.push(Reverse((nd, v)));
            }
        }
    }

    ShortestPathTree { source, dist, pred }
}

impl WordGraph {
    /// Shortest path between two words (normalized internally), as words.
    ///
    /// `None` when either word is unknown or `word2` is unreachable.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Option<(Vec<String>, u64)> {
        let a = self.id(&preprocess(word1))?;
        let c = self.id(&preprocess(word2))?;
        let path = dijkstra(self, a).path_to(c)?;
        Some((self.path_words(&path), path.length))
    }

    fn path_words(&self, path: &ShortestPath) -> Vec<String> {
        path.nodes.iter().map(|&id| self.word(id).to_string()).collect()
    }

    fn path_message(
        &self,
        tree: &ShortestPathTree,
        target: usize,
        word1: &str,
        word2: &str,
    ) -> String {
        match tree.path_to(target) {
            Some(path) => format!(
                "The shortest path from \"{word1}\" to \"{word2}\" is: {} (length: {})",
                self.path_words(&path).join(" -> "),
                path.length
            ),
            None => format!("No path from \"{word1}\" to \"{word2}\"!"),
        }
    }

    /// Shortest-path query rendered as a message, echoing `word1`/`word2` as given.
    pub fn calc_shortest_path(&self, word1: &str, word2: &str) -> String {
        let from = self.id(&preprocess(word1));
        let to = self.id(&preprocess(word2));
        let (Some(a), Some(c)) = (from, to) else {
            return "One or both words not found in the graph!".to_string();
        };
        self.path_message(&dijkstra(self, a), c, word1, word2)
    }

    /// One message per other word in the graph (vertex order), all from `word1`.
    pub fn calc_shortest_paths_from(&self, word1: &str) -> Vec<String> {
        let Some(a) = self.id(&preprocess(word1)) else {
            return vec!["One or both words not found in the graph!".to_string()];
        };
        let tree = dijkstra(self, a);
        (0..self.node_count())
            .filter(|&c| c != a)
            .map(|c| self.path_message(&tree, c, word1, self.word(c)))
            .collect()
    }
}
