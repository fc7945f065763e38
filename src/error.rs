//! Errors raised while building a graph from a list of connections.

use thiserror::Error;

use crate::{Edge, Node, NumNodes};

/// The error type for graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph needs at least one node.
    #[error("a graph needs at least one node")]
    NoNodes,

    /// An endpoint of a connection is not in `0..n`.
    #[error("connection {edge} references a node outside of 0..{n}")]
    NodeOutOfRange {
        /// The offending connection as it was supplied
        edge: Edge,
        /// Number of nodes of the graph
        n: NumNodes,
    },

    /// A connection joins a node with itself.
    #[error("self-loop at node {0} is not a valid connection")]
    SelfLoop(Node),
}

/// A specialized Result type for graph construction.
pub type Result<T> = std::result::Result<T, Error>;
