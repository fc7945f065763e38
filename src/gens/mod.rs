/*!
# Graph Generators

Edge-list generators for building test and benchmark instances.

Deterministic substructures ([`path`], [`cycle`], [`star`]) return their edges directly.
Random models follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()`.

All generators produce normalized, loop-free edges that can be fed into
[`ConnectionGraph::try_from_connections`](crate::repr::ConnectionGraph::try_from_connections).

```rust
use ubridges::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let edges = Gnp::new().nodes(20).avg_deg(3.0).generate(rng);
let graph = ConnectionGraph::try_from_connections(20, edges).unwrap();

assert_eq!(graph.number_of_nodes(), 20);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod tree;

pub use gnp::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng;
}

/// Returns the edges of the path `0 - 1 - ... - (n - 1)`
pub fn path(n: NumNodes) -> Vec<Edge> {
    (1..n).map(|v| Edge(v - 1, v)).collect()
}

/// Returns the edges of the cycle `0 - 1 - ... - (n - 1) - 0`.
/// ** Panics if `n < 3` **
pub fn cycle(n: NumNodes) -> Vec<Edge> {
    assert!(n >= 3, "A simple cycle needs at least 3 nodes!");
    let mut edges = path(n);
    edges.push(Edge(0, n - 1));
    edges
}

/// Returns the edges of the star with center `0` and leaves `1..n`
pub fn star(n: NumNodes) -> Vec<Edge> {
    (1..n).map(|v| Edge(0, v)).collect()
}
