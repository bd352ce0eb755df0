//! # wordgraph
//!
//! Build a directed, weighted word-adjacency graph from free text and query it.
//!
//! Every pair of consecutive words `a b` in the input contributes one unit of weight to the
//! edge `a -> b`. On top of that graph the crate answers:
//! - bridge words (`b` such that `a -> b -> c`), and text generation that inserts them
//! - weighted shortest paths (Dijkstra, weight used directly as cost)
//! - PageRank with dangling-mass redistribution
//! - randomized walks that stop at a dead end or on the first repeated edge
//!
//! The algorithms are generic over the adapter traits in [`graph`]; [`WordGraph`] is the
//! concrete store that ties them to words.

pub mod bridge;
pub mod cli;
pub mod error;
pub mod graph;
pub mod pagerank;
pub mod persist;
pub mod random_walk;
pub mod shortest_path;
pub mod tokenize;
pub mod topk;

pub use bridge::{bridge_nodes, BridgeWords};
pub use error::{Error, Result};
pub use graph::{GraphRef, WeightedGraphRef, WordGraph};
pub use pagerank::{pagerank, PageRankConfig};
pub use persist::{load_text, validate_file_name, write_walk};
pub use random_walk::edge_unique_walk;
pub use shortest_path::{dijkstra, ShortestPath, ShortestPathTree};
pub use tokenize::{preprocess, tokenize};
pub use topk::top_k;
