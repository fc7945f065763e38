/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Ranks assigned during a depth-first search share that width: a rank is the depth of a node in
the DFS tree and can therefore never exceed the number of nodes.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = FixedBitSet;

/// Depth of a node in the DFS tree it was discovered in; roots have rank `0`
pub type Rank = u32;

/// Rank-Value reserved for nodes that were never visited
pub const UNRANKED: Rank = Rank::MAX;

/// As `Option<Rank>` uses additional bytes for padding, a rank table of `Vec<Option<Rank>>`
/// doubles in size. This instead uses the `NonZero`-Wrapper with `UNRANKED` XOR-ed in, so that
/// `Option<OptionalRank>` has the same layout as a plain `Rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalRank(NonZero<Rank>);

impl OptionalRank {
    /// Returns `Some(OptionalRank)` if `r != UNRANKED` and `None` otherwise
    pub const fn new(r: Rank) -> Option<Self> {
        match NonZero::new(r ^ UNRANKED) {
            Some(inner) => Some(OptionalRank(inner)),
            None => None,
        }
    }

    /// Gets the underlying Rank-Value
    pub const fn get(&self) -> Rank {
        self.0.get() ^ UNRANKED
    }
}
