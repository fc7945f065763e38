/*!
`ubridges` finds the **bridges** ("critical connections") of graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected : `Edge(u, v)` and `Edge(v, u)` are the same connection

A bridge is an edge whose removal increases the number of connected components.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` that we normalize to
`Edge(min, max)` whenever edges are compared.

Graphs are stored as a [`ConnectionGraph`](crate::repr::ConnectionGraph), which deduplicates
connections and assigns every edge a dense id so that algorithms can keep per-edge state in flat arrays.

# Design

The bridge search is a single depth-first search that assigns each node its depth (*rank*) in the
DFS tree and returns the minimum rank reachable from its subtree without using the edge to its
parent. Every edge that closes a cycle is removed from the set of candidates; the remaining
candidates are the bridges. The search runs in `O(n + m)`.

Like all algorithms in this crate, it is a configurable struct ([`BridgeSearch`](crate::algo::BridgeSearch))
that one can alter using setters before running it on a graph. For the common case, use
[`critical_connections`] or the [`Bridges`](crate::algo::Bridges) trait:

```rust
use ubridges::{prelude::*, algo::*};

let bridges = critical_connections(5, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
assert_eq!(bridges, vec![Edge(1, 3), Edge(3, 4)]);

let graph = ConnectionGraph::try_from_connections(4, [(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
```

# Usage

- [`prelude`] includes nodes, edges, errors, basic graph operations and the graph representation,
- [`algo`] includes the bridge search and connectivity helpers used to cross-check it,
- [`gens`] includes deterministic and random edge-list generators.

The crate logs through [`tracing`]; install a subscriber in your binary to see its events.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::Error;
pub use node::*;

use crate::{algo::Bridges, repr::ConnectionGraph};

/// `ubridges::prelude` includes definitions for nodes and edges, errors, all basic graph operation
/// traits as well as the graph representation.
pub mod prelude {
    pub use super::{critical_connections, edge::*, error::Error, node::*, ops::*, repr::*};
}

/// Returns all critical connections of the undirected graph with `n` nodes and the given
/// connections, i.e. every edge whose removal disconnects some pair of nodes.
///
/// Bridges are returned normalized (`Edge(min, max)`) in order of their first occurrence in
/// `connections`. Every connected component is searched; see [`algo::BridgeSearch`] for the
/// single-traversal behavior starting at node `0`.
///
/// Fails if `n == 0`, if an endpoint is outside of `0..n`, or if a connection is a self-loop.
pub fn critical_connections<I, E>(n: NumNodes, connections: I) -> error::Result<Vec<Edge>>
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    let graph = ConnectionGraph::try_from_connections(n, connections)?;
    Ok(graph.compute_bridges())
}
