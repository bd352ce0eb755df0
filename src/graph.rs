//! Graph adapter traits and the word graph store.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::persist::load_text;
use crate::tokenize::{preprocess, tokenize};

/// A graph view that can return **borrowed** neighbor slices.
///
/// Nodes are dense ids `0..node_count()`. Neighbor order is significant: algorithms that
/// enumerate candidates (bridge words, walks) report them in this order.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// A weighted graph view in “CSR-style”: a node has a contiguous neighbor list and a
/// contiguous weight list, with matching indices.
pub trait WeightedGraphRef: GraphRef {
    /// Weights aligned with [`GraphRef::neighbors_ref`].
    fn weights_ref(&self, node: usize) -> &[u32];

    fn neighbors_and_weights_ref(&self, node: usize) -> (&[usize], &[u32]) {
        (self.neighbors_ref(node), self.weights_ref(node))
    }
}

/// Directed word-adjacency graph.
///
/// Vertices are interned in first-appearance order. The edge `a -> b` carries the number of
/// times `b` directly followed `a` in the source text; parallel edges are coalesced.
///
/// The graph is built once and is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<String>,
    ids: HashMap<String, usize>,
    targets: Vec<Vec<usize>>,
    weights: Vec<Vec<u32>>,
}

impl WordGraph {
    /// Build a graph from a token sequence.
    ///
    /// Tokens are normalized with [`preprocess`]; tokens that normalize to nothing are skipped
    /// as vertices and break the adjacency pairs they take part in.
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::default();
        let normalized: Vec<String> = tokens.iter().map(|t| preprocess(t.as_ref())).collect();

        for word in normalized.iter().filter(|w| !w.is_empty()) {
            graph.intern(word);
        }
        for pair in normalized.windows(2) {
            if pair[0].is_empty() || pair[1].is_empty() {
                continue;
            }
            let src = graph.intern(&pair[0]);
            let dest = graph.intern(&pair[1]);
            graph.add_edge(src, dest);
        }

        debug!(
            "built word graph: {} words, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        debug!("words: {:?}", graph.words);
        graph
    }

    /// Tokenize `text` and build a graph from it.
    pub fn from_text(text: &str) -> Self {
        Self::build(&tokenize(text))
    }

    /// Read a text file (lines joined with a single space) and build a graph from it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = load_text(path)?;
        Ok(Self::from_text(&text))
    }

    fn intern(&mut self, word: &str) -> usize {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len();
        self.words.push(word.to_string());
        self.ids.insert(word.to_string(), id);
        self.targets.push(Vec::new());
        self.weights.push(Vec::new());
        id
    }

    /// Increment `src -> dest`, creating it with weight 1 on first occurrence.
    fn add_edge(&mut self, src: usize, dest: usize) {
        match self.targets[src].iter().position(|&t| t == dest) {
            Some(i) => self.weights[src][i] += 1,
            None => {
                self.targets[src].push(dest);
                self.weights[src].push(1);
            }
        }
    }

    /// Id of an already-normalized word.
    pub fn id(&self, word: &str) -> Option<usize> {
        self.ids.get(word).copied()
    }

    /// Membership test for an already-normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// The word behind a vertex id.
    ///
    /// Panics if `id` is out of range.
    pub fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    /// All words, in vertex-id order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Outgoing `(target, weight)` pairs of `word`, in insertion order. Empty for unknown words.
    pub fn edges<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        let (targets, weights): (&[usize], &[u32]) = match self.id(word) {
            Some(id) => (self.targets[id].as_slice(), self.weights[id].as_slice()),
            None => (&[], &[]),
        };
        targets
            .iter()
            .zip(weights)
            .map(move |(&t, &w)| (self.words[t].as_str(), w))
    }

    /// Weight of `src -> dest`, if that edge exists.
    pub fn edge_weight(&self, src: &str, dest: &str) -> Option<u32> {
        self.edges(src).find(|&(t, _)| t == dest).map(|(_, w)| w)
    }

    pub fn edge_count(&self) -> usize {
        self.targets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl GraphRef for WordGraph {
    fn node_count(&self) -> usize {
        self.words.len()
    }

    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.targets.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl WeightedGraphRef for WordGraph {
    fn weights_ref(&self, node: usize) -> &[u32] {
        self.weights.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Adjacency-list rendering; words without outgoing edges are omitted.
impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directed Graph:")?;
        writeln!(f, "----------------")?;
        for (id, word) in self.words.iter().enumerate() {
            let (targets, weights) = self.neighbors_and_weights_ref(id);
            if targets.is_empty() {
                continue;
            }
            write!(f, "{word} ->")?;
            for (&t, &w) in targets.iter().zip(weights) {
                write!(f, " {}({w})", self.words[t])?;
            }
            writeln!(f)?;
        }
        write!(f, "----------------")
    }
}
