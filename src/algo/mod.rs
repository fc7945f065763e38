/*!
# Graph Algorithms

This module provides the **bridge search** and the connectivity routines used to cross-check it.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ubridges::algo::*;
```
and gain access to them either as configurable structs (e.g. [`BridgeSearch`]) or as traits
implemented on the graphs themselves (e.g. `graph.compute_bridges()`).
*/

mod bridges;
mod connectivity;

use crate::prelude::*;

pub use bridges::*;
pub use connectivity::*;
