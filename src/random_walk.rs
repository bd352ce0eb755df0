//! Random walk generation.
//!
//! A walk starts at a uniformly random node and keeps following uniformly random out-edges.
//! It stops at a dead end, or when the edge it just drew was already traversed in this walk
//! (that edge is not taken). Every edge is used at most once, so a walk has at most
//! `edge_count + 1` nodes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{trace, warn};
use rand::prelude::*;

use crate::error::Result;
use crate::graph::{GraphRef, WordGraph};
use crate::persist::write_walk;

/// Walk from `start` until a dead end or the first repeated edge.
pub fn edge_unique_walk<G: GraphRef, R: Rng + ?Sized>(
    graph: &G,
    start: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut walk = vec![start];
    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut curr = start;
    loop {
        let Some(&next) = graph.neighbors_ref(curr).choose(rng) else {
            break;
        };
        if !visited.insert((curr, next)) {
            trace!("edge {curr} -> {next} repeated, stopping");
            break;
        }
        walk.push(next);
        curr = next;
    }
    walk
}

impl WordGraph {
    /// Random walk from a uniformly chosen word. Empty for an empty graph.
    pub fn random_walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        let start = rng.random_range(0..self.node_count());
        edge_unique_walk(self, start, rng)
            .into_iter()
            .map(|id| self.word(id).to_string())
            .collect()
    }

    /// Random walk, also written space-joined to `dir/name`.
    ///
    /// The walk is returned even when writing fails; the write outcome is reported alongside.
    pub fn random_walk_to_file<R: Rng + ?Sized>(
        &self,
        dir: impl AsRef<Path>,
        name: &str,
        rng: &mut R,
    ) -> (Vec<String>, Result<PathBuf>) {
        let walk = self.random_walk(rng);
        let written = write_walk(dir, name, &walk);
        if let Err(e) = &written {
            warn!("failed to write walk result: {e}");
        }
        (walk, written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_graph_walk_is_empty() {
        let g = WordGraph::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(g.random_walk(&mut rng).is_empty());
    }

    #[test]
    fn dead_end_stops_the_walk() {
        let g = WordGraph::from_text("a b c");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let walk = edge_unique_walk(&g, g.id("a").unwrap(), &mut rng);
        assert_eq!(walk, vec![0, 1, 2]);
    }

    #[test]
    fn self_loop_is_taken_once() {
        // a -> a only
        let g = WordGraph::from_text("a a");
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(g.random_walk(&mut rng), vec!["a", "a"]);
    }

    #[test]
    fn cycle_terminates_on_repeated_edge() {
        // a -> b -> c -> a, each node has a single out-edge
        let g = WordGraph::from_text("a b c a");
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10 {
            let walk = g.random_walk(&mut rng);
            assert_eq!(walk.len(), 4, "{walk:?}");
            assert_eq!(walk.first(), walk.last());
        }
    }

    #[test]
    fn walk_survives_failed_write() {
        let g = WordGraph::from_text("a b");
        let dir = tempfile::tempdir().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (walk, written) = g.random_walk_to_file(dir.path(), "bad|name", &mut rng);
        assert!(!walk.is_empty());
        assert!(written.is_err());

        let missing = dir.path().join("missing");
        let (walk, written) = g.random_walk_to_file(&missing, "walk.txt", &mut rng);
        assert!(!walk.is_empty());
        assert!(matches!(written, Err(crate::error::Error::Io { .. })));

        let (walk, written) = g.random_walk_to_file(dir.path(), "walk.txt", &mut rng);
        let saved = std::fs::read_to_string(written.unwrap()).unwrap();
        assert_eq!(saved, walk.join(" "));
    }

    #[test]
    fn same_seed_same_walk() {
        let g = WordGraph::from_text("the cat saw the dog and the cat ran to the dog");
        let w1 = g.random_walk(&mut ChaCha8Rng::seed_from_u64(5));
        let w2 = g.random_walk(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(w1, w2);
    }
}
