use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordgraph::{bridge_nodes, edge_unique_walk, tokenize, GraphRef, WordGraph};

fn small_text() -> impl Strategy<Value = String> {
    // A tiny vocabulary keeps collisions (and therefore cycles and repeated pairs) common.
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]), 0..40)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn walk_never_repeats_an_edge(text in small_text(), seed in any::<u64>()) {
        let g = WordGraph::from_text(&text);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let walk = g.random_walk(&mut rng);

        prop_assert!(walk.len() <= g.edge_count() + 1);
        if g.is_empty() {
            prop_assert!(walk.is_empty());
        }
        let mut seen = HashSet::new();
        for pair in walk.windows(2) {
            prop_assert!(g.edge_weight(&pair[0], &pair[1]).is_some());
            prop_assert!(seen.insert((pair[0].clone(), pair[1].clone())), "repeated {pair:?}");
        }
    }

    #[test]
    fn walk_stops_only_at_dead_end_or_repeat(text in small_text(), seed in any::<u64>()) {
        let g = WordGraph::from_text(&text);
        prop_assume!(!g.is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let walk = edge_unique_walk(&g, 0, &mut rng);
        let last = *walk.last().unwrap();
        let used: HashSet<(usize, usize)> = walk.windows(2).map(|p| (p[0], p[1])).collect();
        let dead_end = g.out_degree(last) == 0;
        let some_used = g.neighbors_ref(last).iter().any(|&v| used.contains(&(last, v)));
        prop_assert!(dead_end || some_used);
    }

    #[test]
    fn weights_count_adjacent_pairs(text in small_text()) {
        let g = WordGraph::from_text(&text);
        let tokens = tokenize(&text);
        let total: u32 = g.words().flat_map(|w| g.edges(w).map(|(_, wt)| wt)).sum();
        prop_assert_eq!(total as usize, tokens.len().saturating_sub(1));
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        prop_assert_eq!(g.node_count(), distinct.len());
    }

    #[test]
    fn bridges_are_two_hop_connectors(text in small_text()) {
        let g = WordGraph::from_text(&text);
        for a in 0..g.node_count() {
            for c in 0..g.node_count() {
                for b in bridge_nodes(&g, a, c) {
                    prop_assert!(g.neighbors_ref(a).contains(&b));
                    prop_assert!(g.neighbors_ref(b).contains(&c));
                }
            }
        }
    }
}
