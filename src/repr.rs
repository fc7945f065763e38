/*!
# Graph Representation

[`ConnectionGraph`] stores an undirected simple graph as adjacency arrays whose entries carry
the id of the connecting edge, next to the list of deduplicated edges indexed by that id.

Neighbors are kept in insertion order, so a traversal visits them in the order the connections
were supplied. Duplicate connections (in either orientation) collapse into a single edge.

```rust
use ubridges::prelude::*;

let graph = ConnectionGraph::try_from_connections(3, [(0, 1), (1, 2), (2, 1)]).unwrap();

assert_eq!(graph.number_of_edges(), 2);
assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
```
*/

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    error::{Error, Result},
    prelude::*,
};

/// An undirected graph built from a list of connections
#[derive(Debug, Clone)]
pub struct ConnectionGraph {
    nbs: Vec<Vec<(Node, EdgeId)>>,
    edges: Vec<Edge>,
    edge_ids: FxHashMap<Edge, EdgeId>,
}

impl ConnectionGraph {
    /// Creates a graph with `n` nodes and no edges.
    /// Fails with [`Error::NoNodes`] if `n == 0`.
    pub fn new(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(Error::NoNodes);
        }

        Ok(Self {
            nbs: vec![Vec::new(); n as usize],
            edges: Vec::new(),
            edge_ids: FxHashMap::default(),
        })
    }

    /// Builds a graph with `n` nodes from a list of connections.
    ///
    /// Every endpoint must lie in `0..n` and self-loops are rejected.
    /// Duplicate connections are merged into one edge.
    pub fn try_from_connections<I, E>(n: NumNodes, connections: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n)?;

        let mut num_connections = 0usize;
        for e in connections {
            let Edge(u, v) = e.into();
            graph.try_add_connection(u, v)?;
            num_connections += 1;
        }

        debug!(
            nodes = n,
            connections = num_connections,
            edges = graph.edges.len(),
            "built connection graph"
        );

        Ok(graph)
    }

    /// Adds the connection `{u, v}` unless it already exists.
    /// Returns *true* if the edge was present before.
    pub fn try_add_connection(&mut self, u: Node, v: Node) -> Result<bool> {
        let n = self.number_of_nodes();
        if u >= n || v >= n {
            return Err(Error::NodeOutOfRange {
                edge: Edge(u, v),
                n,
            });
        }
        if u == v {
            return Err(Error::SelfLoop(u));
        }

        let edge = Edge(u, v).normalized();
        if self.edge_ids.contains_key(&edge) {
            return Ok(true);
        }

        let id = self.edges.len() as EdgeId;
        self.edge_ids.insert(edge, id);
        self.edges.push(edge);
        self.nbs[u as usize].push((v, id));
        self.nbs[v as usize].push((u, id));

        Ok(false)
    }
}

impl GraphNodeOrder for ConnectionGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for ConnectionGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for ConnectionGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl IndexedEdges for ConnectionGraph {
    fn edge_of_id(&self, id: EdgeId) -> Edge {
        self.edges[id as usize]
    }

    fn incident_edges(&self, u: Node) -> &[(Node, EdgeId)] {
        &self.nbs[u as usize]
    }

    fn edge_id(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.edge_ids.get(&Edge(u, v).normalized()).copied()
    }
}
