/*!
# Bridges

A bridge (or *critical connection*) is an edge whose removal increases the number of connected
components. [`BridgeSearch`] finds all of them with a single depth-first search in `O(n + m)`.

Each visited node `u` receives a rank `r`, its depth in the DFS tree. Visiting `u` returns the
smallest rank reachable from the subtree of `u` without walking back over the edge to its
parent. Whenever a neighbor `v` reports a rank `<= r`, the edge `{u, v}` lies on a cycle and is
dropped from the candidates. The candidates left at the end are exactly the bridges.
*/

use tracing::{debug, trace};

use super::*;

/// Which nodes a [`BridgeSearch`] starts traversals from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    /// Start a new traversal (at rank `0`) from every node that is still unvisited,
    /// in increasing order of node index. Correct for disconnected graphs.
    #[default]
    AllComponents,
    /// Run a single traversal from node `0`.
    ///
    /// Nodes outside of the component of `0` keep no rank and their edges are never examined,
    /// so all of them are reported as bridges. Only use this on connected graphs.
    FromNodeZero,
}

/// How a [`BridgeSearch`] walks the graph. Both strategies assign identical ranks and
/// report identical bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Simulates the call stack with explicit frames; depth is only bounded by the heap
    #[default]
    Iterative,
    /// Plain recursion; the call stack grows with the depth of the DFS tree, which approaches
    /// `n` on path-like graphs
    Recursive,
}

/// Computes the bridges of an undirected graph
pub trait Bridges: IndexedEdges {
    /// Returns all bridges as normalized edges ordered by their edge id
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: IndexedEdges,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

/// Configurable bridge search over a graph.
///
/// Holds the complete traversal state (rank table and candidate flags), so every search owns its
/// own context and independent searches never share mutable state.
///
/// ```rust
/// use ubridges::{prelude::*, algo::*};
///
/// // two triangles joined by edge (2, 3), plus the isolated edge (6, 7)
/// let graph = ConnectionGraph::try_from_connections(
///     8,
///     [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (6, 7)],
/// )
/// .unwrap();
///
/// let report = BridgeSearch::new(&graph)
///     .strategy(SearchStrategy::Recursive)
///     .compute_report();
///
/// assert_eq!(report.bridges(), &[Edge(2, 3), Edge(6, 7)]);
/// assert_eq!(report.number_of_roots(), 2);
/// assert_eq!(report.rank_of(6), Some(0));
/// ```
pub struct BridgeSearch<'a, G>
where
    G: IndexedEdges,
{
    graph: &'a G,
    coverage: Coverage,
    strategy: SearchStrategy,
    ranks: Vec<Option<OptionalRank>>,
    candidates: EdgeBitSet,
    roots: NumNodes,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: IndexedEdges,
{
    /// Creates a search with default settings: [`Coverage::AllComponents`] and
    /// [`SearchStrategy::Iterative`]
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            coverage: Coverage::default(),
            strategy: SearchStrategy::default(),
            ranks: vec![None; graph.len()],
            candidates: graph.edge_bitset_set(),
            roots: 0,
        }
    }

    /// Updates which nodes traversals are started from
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Updates the traversal strategy
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Runs the search and returns all bridges
    pub fn compute(self) -> Vec<Edge> {
        self.compute_report().into_bridges()
    }

    /// Runs the search and returns the bridges together with the rank table
    pub fn compute_report(mut self) -> BridgeReport {
        let n = self.graph.number_of_nodes();
        let starts = match self.coverage {
            Coverage::AllComponents => 0..n,
            Coverage::FromNodeZero => 0..n.min(1),
        };

        for root in starts {
            if self.ranks[root as usize].is_some() {
                continue;
            }

            trace!(root, "starting traversal");
            self.roots += 1;

            match self.strategy {
                SearchStrategy::Iterative => self.visit_iterative(root),
                SearchStrategy::Recursive => {
                    self.visit(root, 0);
                }
            }
        }

        let bridges: Vec<Edge> = self
            .candidates
            .ones()
            .map(|id| self.graph.edge_of_id(id as EdgeId))
            .collect();

        debug!(
            strategy = ?self.strategy,
            coverage = ?self.coverage,
            roots = self.roots,
            bridges = bridges.len(),
            "bridge search finished"
        );

        BridgeReport {
            bridges,
            ranks: self.ranks,
            roots: self.roots,
        }
    }

    /// Returns *true* if `v` is ranked exactly `parent_rank`, i.e. `v` is the DFS parent of the
    /// current node. Roots have no parent rank, so this is always *false* for them.
    fn is_parent(&self, v: Node, parent_rank: Option<Rank>) -> bool {
        match (self.ranks[v as usize], parent_rank) {
            (Some(rv), Some(p)) => rv.get() == p,
            _ => false,
        }
    }

    /// Ranks `u` with `rank` unless it is ranked already and returns the smallest rank reachable
    /// from its subtree without using the edge to its parent.
    fn visit(&mut self, u: Node, rank: Rank) -> Rank {
        if let Some(r) = self.ranks[u as usize] {
            return r.get();
        }
        self.ranks[u as usize] = OptionalRank::new(rank);

        let parent_rank = rank.checked_sub(1);
        let mut min_reachable = rank + 1;

        for &(v, id) in self.graph.incident_edges(u) {
            if self.is_parent(v, parent_rank) {
                continue;
            }

            let v_rank = self.visit(v, rank + 1);
            if v_rank <= rank {
                self.candidates.set(id as usize, false);
            }
            min_reachable = min_reachable.min(v_rank);
        }

        min_reachable
    }

    /// Same as [`Self::visit`] started at rank `0`, but with frames on the heap instead of the
    /// call stack. Neighbors are processed one per iteration of the outer loop.
    fn visit_iterative(&mut self, root: Node) {
        let mut call_stack = vec![self.enter(root, 0, None)];

        while let Some(frame) = call_stack.last_mut() {
            let incident = self.graph.incident_edges(frame.node);

            if let Some(&(v, id)) = incident.get(frame.cursor) {
                frame.cursor += 1;

                if self.is_parent(v, frame.rank.checked_sub(1)) {
                    continue;
                }

                match self.ranks[v as usize] {
                    Some(v_rank) => frame.absorb(v_rank.get(), id, &mut self.candidates),
                    None => {
                        let child = self.enter(v, frame.rank + 1, Some(id));
                        call_stack.push(child);
                    }
                }
                continue;
            }

            let Frame {
                min_reachable,
                entered_by,
                ..
            } = *frame;
            call_stack.pop();

            if let (Some(parent), Some(id)) = (call_stack.last_mut(), entered_by) {
                parent.absorb(min_reachable, id, &mut self.candidates);
            }
        }
    }

    fn enter(&mut self, u: Node, rank: Rank, entered_by: Option<EdgeId>) -> Frame {
        debug_assert!(self.ranks[u as usize].is_none());
        self.ranks[u as usize] = OptionalRank::new(rank);

        Frame {
            node: u,
            rank,
            cursor: 0,
            min_reachable: rank + 1,
            entered_by,
        }
    }
}

/// State of one simulated call of [`BridgeSearch::visit`]
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    rank: Rank,
    /// Position of the next incident edge to process
    cursor: usize,
    min_reachable: Rank,
    /// Tree edge from the parent; `None` for roots
    entered_by: Option<EdgeId>,
}

impl Frame {
    /// Folds the result `v_rank` of neighbor `v`, reached via edge `id`, into this frame
    fn absorb(&mut self, v_rank: Rank, id: EdgeId, candidates: &mut EdgeBitSet) {
        if v_rank <= self.rank {
            candidates.set(id as usize, false);
        }
        self.min_reachable = self.min_reachable.min(v_rank);
    }
}

/// Outcome of a [`BridgeSearch`]
#[derive(Debug, Clone)]
pub struct BridgeReport {
    bridges: Vec<Edge>,
    ranks: Vec<Option<OptionalRank>>,
    roots: NumNodes,
}

impl BridgeReport {
    /// Bridges as normalized edges ordered by their edge id
    pub fn bridges(&self) -> &[Edge] {
        &self.bridges
    }

    /// Consumes the report and returns the bridges
    pub fn into_bridges(self) -> Vec<Edge> {
        self.bridges
    }

    /// Returns the rank (DFS depth) of `u`, or `None` if `u` was never visited
    /// ** Panics if `u >= n` **
    pub fn rank_of(&self, u: Node) -> Option<Rank> {
        self.ranks[u as usize].map(|r| r.get())
    }

    /// Returns an iterator over all nodes that were never visited
    pub fn unvisited_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .filter_map(|(u, r)| r.is_none().then_some(u as Node))
    }

    /// Number of traversals that were started, i.e. the number of components searched
    pub fn number_of_roots(&self) -> NumNodes {
        self.roots
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const STRATEGIES: [SearchStrategy; 2] = [SearchStrategy::Iterative, SearchStrategy::Recursive];

    fn bridges_with(
        n: NumNodes,
        connections: &[(Node, Node)],
        strategy: SearchStrategy,
    ) -> Vec<Edge> {
        let graph = ConnectionGraph::try_from_connections(n, connections).unwrap();
        BridgeSearch::new(&graph)
            .strategy(strategy)
            .compute()
            .into_iter()
            .sorted()
            .collect_vec()
    }

    #[test]
    fn triangle_with_pendant() {
        for strategy in STRATEGIES {
            assert_eq!(
                bridges_with(4, &[(0, 1), (1, 2), (2, 0), (1, 3)], strategy),
                vec![Edge(1, 3)]
            );
        }
    }

    #[test]
    fn triangle_with_pendant_path() {
        for strategy in STRATEGIES {
            assert_eq!(
                bridges_with(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)], strategy),
                vec![Edge(1, 3), Edge(3, 4)]
            );
        }
    }

    #[test]
    fn triangle() {
        for strategy in STRATEGIES {
            assert!(bridges_with(3, &[(0, 1), (1, 2), (2, 0)], strategy).is_empty());
        }
    }

    #[test]
    fn single_edge() {
        for strategy in STRATEGIES {
            assert_eq!(bridges_with(2, &[(0, 1)], strategy), vec![Edge(0, 1)]);
        }
    }

    #[test]
    fn single_node() {
        let graph = ConnectionGraph::new(1).unwrap();
        let report = BridgeSearch::new(&graph).compute_report();

        assert!(report.bridges().is_empty());
        assert_eq!(report.rank_of(0), Some(0));
        assert_eq!(report.number_of_roots(), 1);
    }

    #[test]
    fn graph_without_edges() {
        let graph = ConnectionGraph::new(4).unwrap();

        for strategy in STRATEGIES {
            let report = BridgeSearch::new(&graph).strategy(strategy).compute_report();

            assert!(report.bridges().is_empty());
            assert_eq!(report.number_of_roots(), 4);
            assert!(graph.vertices().all(|u| report.rank_of(u) == Some(0)));
        }
    }

    #[test]
    fn bridges_in_path() {
        for n in [2, 5, 10, 15] {
            let graph = ConnectionGraph::try_from_connections(n, path(n)).unwrap();

            for strategy in STRATEGIES {
                let bridges = BridgeSearch::new(&graph).strategy(strategy).compute();
                assert_eq!(bridges, graph.ordered_edges(true).collect_vec());
            }
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph = ConnectionGraph::try_from_connections(
            6,
            [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
    }

    #[test]
    fn duplicate_connections_do_not_form_cycles() {
        let graph =
            ConnectionGraph::try_from_connections(3, [(0, 1), (1, 0), (1, 2), (0, 1)]).unwrap();

        assert_eq!(graph.compute_bridges(), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn result_in_order_of_first_occurrence() {
        let bridges = crate::critical_connections(5, [(4, 3), (0, 1), (1, 2), (2, 0), (3, 1)])
            .unwrap();

        assert_eq!(bridges, vec![Edge(3, 4), Edge(1, 3)]);
    }

    #[test]
    fn ranks_are_dfs_depths() {
        // neighbors are visited in insertion order: 0 -> 1 -> 2 -> 3, then 4 below 1
        let graph =
            ConnectionGraph::try_from_connections(5, [(0, 1), (1, 2), (2, 3), (3, 0), (1, 4)])
                .unwrap();

        for strategy in STRATEGIES {
            let report = BridgeSearch::new(&graph).strategy(strategy).compute_report();

            assert_eq!(
                graph.vertices().map(|u| report.rank_of(u)).collect_vec(),
                vec![Some(0), Some(1), Some(2), Some(3), Some(2)]
            );
            assert_eq!(report.bridges(), &[Edge(1, 4)]);
        }
    }

    #[test]
    fn disconnected_graph_all_components() {
        // triangle 0-1-2, isolated node 3, triangle 4-5-6 with pendant 7
        let connections = [
            (0, 1),
            (1, 2),
            (2, 0),
            (4, 5),
            (5, 6),
            (6, 4),
            (6, 7),
        ];
        let graph = ConnectionGraph::try_from_connections(8, connections).unwrap();

        for strategy in STRATEGIES {
            let report = BridgeSearch::new(&graph).strategy(strategy).compute_report();

            assert_eq!(report.bridges(), &[Edge(6, 7)]);
            assert_eq!(report.number_of_roots(), 3);
            assert_eq!(report.unvisited_nodes().count(), 0);
            assert_eq!(report.rank_of(3), Some(0));
            assert_eq!(report.rank_of(4), Some(0));
        }
    }

    #[test]
    fn disconnected_graph_from_node_zero() {
        let connections = [
            (0, 1),
            (1, 2),
            (2, 0),
            (4, 5),
            (5, 6),
            (6, 4),
            (6, 7),
        ];
        let graph = ConnectionGraph::try_from_connections(8, connections).unwrap();

        for strategy in STRATEGIES {
            let report = BridgeSearch::new(&graph)
                .coverage(Coverage::FromNodeZero)
                .strategy(strategy)
                .compute_report();

            // edges outside of the component of node 0 are never examined
            assert_eq!(
                report.bridges(),
                &[Edge(4, 5), Edge(5, 6), Edge(4, 6), Edge(6, 7)]
            );
            assert_eq!(report.number_of_roots(), 1);
            assert_eq!(report.unvisited_nodes().collect_vec(), vec![3, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn coverages_agree_on_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5, 20, 60] {
            for _ in 0..10 {
                let graph = ConnectionGraph::try_from_connections(n, random_tree(rng, n)).unwrap();

                assert_eq!(
                    BridgeSearch::new(&graph)
                        .coverage(Coverage::FromNodeZero)
                        .compute(),
                    graph.compute_bridges()
                );
            }
        }
    }

    #[test]
    fn strategies_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10, 50, 200] {
            for avg_deg in [1.0, 2.0, 4.0] {
                for _ in 0..10 {
                    let edges = Gnp::new().nodes(n).avg_deg(avg_deg).generate(rng);
                    let graph = ConnectionGraph::try_from_connections(n, edges).unwrap();

                    for coverage in [Coverage::AllComponents, Coverage::FromNodeZero] {
                        let iterative = BridgeSearch::new(&graph)
                            .coverage(coverage)
                            .strategy(SearchStrategy::Iterative)
                            .compute_report();
                        let recursive = BridgeSearch::new(&graph)
                            .coverage(coverage)
                            .strategy(SearchStrategy::Recursive)
                            .compute_report();

                        assert_eq!(iterative.bridges(), recursive.bridges());
                        assert_eq!(iterative.number_of_roots(), recursive.number_of_roots());
                        for u in graph.vertices() {
                            assert_eq!(iterative.rank_of(u), recursive.rank_of(u));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 12, 30] {
            for avg_deg in [1.5, 2.5, 4.0] {
                for _ in 0..20 {
                    let edges = Gnp::new().nodes(n).avg_deg(avg_deg).generate(rng);
                    let graph = ConnectionGraph::try_from_connections(n, edges).unwrap();

                    let bridges = graph.compute_bridges().into_iter().sorted().collect_vec();
                    assert_eq!(bridges, brute_force_bridges(&graph));
                }
            }
        }
    }

    #[test]
    fn independent_of_connection_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [8, 25, 70] {
            let edges = Gnp::new().nodes(n).avg_deg(2.5).generate(rng);
            let expected = crate::critical_connections(n, &edges)
                .unwrap()
                .into_iter()
                .sorted()
                .collect_vec();

            for _ in 0..10 {
                let permuted = permuted_connections(rng, &edges);
                let bridges = crate::critical_connections(n, permuted)
                    .unwrap()
                    .into_iter()
                    .sorted()
                    .collect_vec();

                assert_eq!(bridges, expected);
            }
        }
    }

    #[test]
    fn every_tree_edge_is_a_bridge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [2, 3, 10, 100] {
            for _ in 0..5 {
                let edges = random_tree(rng, n);
                let graph = ConnectionGraph::try_from_connections(n, &edges).unwrap();

                assert_eq!(graph.number_of_edges(), n - 1);
                assert_eq!(graph.compute_bridges().len(), edges.len());
            }
        }

        let graph = ConnectionGraph::try_from_connections(6, star(6)).unwrap();
        assert_eq!(graph.compute_bridges().len(), 5);
    }

    #[test]
    fn no_cycle_edge_is_a_bridge() {
        for n in [3, 4, 10, 57] {
            let graph = ConnectionGraph::try_from_connections(n, cycle(n)).unwrap();

            for strategy in STRATEGIES {
                assert!(
                    BridgeSearch::new(&graph)
                        .strategy(strategy)
                        .compute()
                        .is_empty()
                );
            }
        }
    }

    #[test]
    fn deep_path_iterative() {
        let n = 200_000;
        let graph = ConnectionGraph::try_from_connections(n, path(n)).unwrap();

        let report = BridgeSearch::new(&graph).compute_report();

        assert_eq!(report.bridges().len(), (n - 1) as usize);
        assert_eq!(report.rank_of(n - 1), Some(n - 1));
    }
}
