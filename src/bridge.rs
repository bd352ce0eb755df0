//! Bridge words and bridge-based text generation.
//!
//! `b` is a bridge from `a` to `c` when both `a -> b` and `b -> c` exist.

use rand::prelude::*;

use crate::graph::{GraphRef, WordGraph};
use crate::tokenize::{preprocess, tokenize};

/// All bridge nodes from `from` to `to`, in `from`'s neighbor order.
///
/// Each bridge appears once, even if the graph view lists parallel edges.
pub fn bridge_nodes<G: GraphRef>(graph: &G, from: usize, to: usize) -> Vec<usize> {
    let mut out = Vec::new();
    for &mid in graph.neighbors_ref(from) {
        if graph.neighbors_ref(mid).contains(&to) && !out.contains(&mid) {
            out.push(mid);
        }
    }
    out
}

/// Outcome of a bridge-word query, before it is rendered as a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeWords {
    /// Neither word is in the graph.
    BothMissing,
    /// Exactly one word is missing; holds the caller's spelling of it.
    Missing(String),
    /// Both words are present, in first-discovered order. May be empty.
    Found(Vec<String>),
}

impl BridgeWords {
    /// Render the outcome as the user-facing message, echoing `word1`/`word2` as given.
    pub fn message(&self, word1: &str, word2: &str) -> String {
        match self {
            BridgeWords::BothMissing => format!("No \"{word1}\" and \"{word2}\" in the graph!"),
            BridgeWords::Missing(word) => format!("No \"{word}\" in the graph!"),
            BridgeWords::Found(bridges) => match bridges.as_slice() {
                [] => format!("No bridge words from \"{word1}\" to \"{word2}\"!"),
                [only] => format!("The bridge word from \"{word1}\" to \"{word2}\" is: {only}"),
                [init @ .., last] => format!(
                    "The bridge words from \"{word1}\" to \"{word2}\" are: {}, and {last}",
                    init.join(", ")
                ),
            },
        }
    }
}

impl WordGraph {
    /// Bridge words from `word1` to `word2` (both normalized internally).
    ///
    /// Empty when either word is unknown or no bridge exists.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Vec<String> {
        match (self.id(&preprocess(word1)), self.id(&preprocess(word2))) {
            (Some(a), Some(c)) => self.bridge_ids(a, c),
            _ => Vec::new(),
        }
    }

    fn bridge_ids(&self, a: usize, c: usize) -> Vec<String> {
        bridge_nodes(self, a, c)
            .into_iter()
            .map(|b| self.word(b).to_string())
            .collect()
    }

    /// Classify a bridge-word query. Missing words are reported with the caller's spelling.
    pub fn lookup_bridge_words(&self, word1: &str, word2: &str) -> BridgeWords {
        match (self.id(&preprocess(word1)), self.id(&preprocess(word2))) {
            (None, None) => BridgeWords::BothMissing,
            (None, Some(_)) => BridgeWords::Missing(word1.to_string()),
            (Some(_), None) => BridgeWords::Missing(word2.to_string()),
            (Some(a), Some(c)) => BridgeWords::Found(self.bridge_ids(a, c)),
        }
    }

    /// Bridge-word query rendered as a message.
    pub fn query_bridge_words(&self, word1: &str, word2: &str) -> String {
        self.lookup_bridge_words(word1, word2).message(word1, word2)
    }

    /// Tokenize `input` and insert one randomly chosen bridge word between every adjacent
    /// pair that has one. Input with fewer than two words is returned unchanged.
    pub fn generate_new_text<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        let tokens = tokenize(input);
        if tokens.len() < 2 {
            return input.to_string();
        }

        let mut out: Vec<&str> = Vec::with_capacity(tokens.len() * 2);
        for pair in tokens.windows(2) {
            out.push(&pair[0]);
            let from = self.id(&preprocess(&pair[0]));
            let to = self.id(&preprocess(&pair[1]));
            let (Some(a), Some(c)) = (from, to) else {
                continue;
            };
            if let Some(&b) = bridge_nodes(self, a, c).choose(rng) {
                out.push(self.word(b));
            }
        }
        if let Some(last) = tokens.last() {
            out.push(last);
        }
        out.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn bridge_nodes_follow_neighbor_order() {
        // a -> x -> c, a -> y -> c, a -> z (dead end)
        let g = WordGraph::from_text("a x c. a z. a y c");
        let a = g.id("a").unwrap();
        let c = g.id("c").unwrap();
        let got: Vec<&str> = bridge_nodes(&g, a, c).into_iter().map(|b| g.word(b)).collect();
        assert_eq!(got, vec!["x", "y"]);
    }

    #[test]
    fn messages_match_templates() {
        let none = BridgeWords::Found(vec![]);
        assert_eq!(none.message("a", "b"), "No bridge words from \"a\" to \"b\"!");

        let one = BridgeWords::Found(vec!["x".into()]);
        assert_eq!(one.message("A", "b"), "The bridge word from \"A\" to \"b\" is: x");

        let two = BridgeWords::Found(vec!["x".into(), "y".into()]);
        assert_eq!(
            two.message("a", "b"),
            "The bridge words from \"a\" to \"b\" are: x, and y"
        );

        let three = BridgeWords::Found(vec!["x".into(), "y".into(), "z".into()]);
        assert_eq!(
            three.message("a", "b"),
            "The bridge words from \"a\" to \"b\" are: x, y, and z"
        );

        assert_eq!(
            BridgeWords::BothMissing.message("", ""),
            "No \"\" and \"\" in the graph!"
        );
        assert_eq!(
            BridgeWords::Missing("Foo".into()).message("Foo", "b"),
            "No \"Foo\" in the graph!"
        );
    }

    #[test]
    fn generate_without_bridges_passes_tokens_through() {
        let g = WordGraph::from_text("a b c");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(g.generate_new_text("C, A!", &mut rng), "c a");
        assert_eq!(g.generate_new_text("Hello", &mut rng), "Hello");
        assert_eq!(g.generate_new_text("", &mut rng), "");
    }

    #[test]
    fn generate_inserts_a_valid_bridge() {
        let g = WordGraph::from_text("a x c. a y c");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let out = g.generate_new_text("A C", &mut rng);
            assert!(out == "a x c" || out == "a y c", "got {out}");
        }
    }
}
