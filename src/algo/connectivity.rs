use std::{collections::VecDeque, iter::FusedIterator};

use super::*;

/// Connected components of undirected graphs
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph in order of their
    /// smallest node. Each component lists its nodes in BFS order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (isolated nodes count as components)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns the number of connected components if `edge` were removed from the graph.
    /// The graph itself is not modified.
    fn number_of_connected_components_without(&self, edge: Edge) -> NumNodes {
        self.connected_components().without_edge(edge).count() as NumNodes
    }

    /// Returns *true* if every node can reach every other node
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() <= 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// BFS-based iterator over connected components
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    next_start: Node,
    hidden: Option<Edge>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates an iterator that has not visited any node yet
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
            next_start: 0,
            hidden: None,
        }
    }

    /// Treats `edge` (in either orientation) as if it were not part of the graph
    pub fn without_edge(mut self, edge: Edge) -> Self {
        self.hidden = Some(edge.normalized());
        self
    }

    fn is_hidden(&self, u: Node, v: Node) -> bool {
        self.hidden == Some(Edge(u, v).normalized())
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.number_of_nodes();
        while self.next_start < n && self.visited.contains(self.next_start as usize) {
            self.next_start += 1;
        }
        if self.next_start == n {
            return None;
        }

        let start = self.next_start;
        self.visited.insert(start as usize);
        self.queue.push_back(start);

        let mut component = Vec::new();
        while let Some(u) = self.queue.pop_front() {
            component.push(u);

            for v in self.graph.neighbors_of(u) {
                if self.visited.contains(v as usize) || self.is_hidden(u, v) {
                    continue;
                }
                self.visited.insert(v as usize);
                self.queue.push_back(v);
            }
        }

        Some(component)
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where G: AdjacencyList {}
