//! Reference implementations used to cross-check the bridge search in tests.

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::{algo::Connectivity, prelude::*};

/// Returns all bridges in sorted order by removing every edge in turn and counting components.
/// Runs in `O(m * (n + m))`.
pub(crate) fn brute_force_bridges<G>(graph: &G) -> Vec<Edge>
where
    G: AdjacencyList,
{
    let components = graph.number_of_connected_components();

    graph
        .ordered_edges(true)
        .filter(|&e| graph.number_of_connected_components_without(e) > components)
        .collect_vec()
}

/// Returns the connections in random order with each connection randomly reversed
pub(crate) fn permuted_connections<R: Rng>(rng: &mut R, edges: &[Edge]) -> Vec<Edge> {
    let mut edges = edges
        .iter()
        .map(|e| if rng.random_bool(0.5) { e.reverse() } else { *e })
        .collect_vec();
    edges.shuffle(rng);
    edges
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn oracle_on_known_graphs() {
        let graph =
            ConnectionGraph::try_from_connections(5, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)])
                .unwrap();
        assert_eq!(brute_force_bridges(&graph), vec![Edge(1, 3), Edge(3, 4)]);

        let graph = ConnectionGraph::try_from_connections(6, cycle(6)).unwrap();
        assert!(brute_force_bridges(&graph).is_empty());
    }

    #[test]
    fn permutation_keeps_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let edges = cycle(20);

        let permuted = permuted_connections(rng, &edges);
        assert_eq!(
            permuted.iter().map(|e| e.normalized()).sorted().collect_vec(),
            edges.iter().copied().sorted().collect_vec()
        );
    }
}
