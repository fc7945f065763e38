/*!
# Graph Operations

Traits that algorithms in [`crate::algo`] are generic over. Every graph in this crate is
undirected, unweighted and has nodes `0..n`.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow `self` and may be used while mutating per-node state.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::with_capacity(self.len())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (deduplicated) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns empty bitset with one entry per edge id
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        EdgeBitSet::with_capacity(self.number_of_edges() as usize)
    }

    /// Returns full bitset with one entry per edge id
    fn edge_bitset_set(&self) -> EdgeBitSet {
        let mut bits = self.edge_bitset_unset();
        bits.insert_range(..);
        bits
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then every undirected edge is reported exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then every undirected edge is reported exactly once.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted()
    }
}

/// Graphs whose edges carry a dense [`EdgeId`] in `0..m`.
///
/// Algorithms use ids to keep per-edge state in an [`EdgeBitSet`] instead of hashing node pairs.
pub trait IndexedEdges: AdjacencyList + GraphEdgeOrder {
    /// Returns the normalized edge with the given id.
    /// ** Panics if `id >= m` **
    fn edge_of_id(&self, id: EdgeId) -> Edge;

    /// Returns a slice of `(neighbor, id of the connecting edge)` in insertion order.
    /// ** Panics if `u >= n` **
    fn incident_edges(&self, u: Node) -> &[(Node, EdgeId)];

    /// Returns an iterator over `(neighbor, id of the connecting edge)` in insertion order.
    /// ** Panics if `u >= n` **
    fn edge_ids_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.incident_edges(u).iter().copied()
    }

    /// Returns the id of edge `{u, v}` if it exists
    fn edge_id(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.edge_ids_of(u).find(|&(w, _)| w == v).map(|(_, id)| id)
    }

    /// Returns *true* if edge `{u, v}` exists
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_id(u, v).is_some()
    }

    /// Returns an iterator over all edges ordered by their id
    fn edges_by_id(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.number_of_edges()).map(|id| self.edge_of_id(id))
    }
}
