//! # hgdb-traversal
//!
//! Depth-first traversal over the adjacency relation of a hypergraph.
//!
//! The engine is an explicit-stack state machine, so arbitrarily deep or
//! cyclic adjacency never recurses and never loops. Two ways to consume it:
//!
//! - [`DepthFirst`]: a synchronous pull cursor (`Iterator<Item = NodeId>`)
//!   over any [`AdjacencySource`], typically `&Hypergraph`.
//! - [`TraversalStream`]: the same traversal computed lazily on a Tokio task
//!   over a [`SharedHypergraph`], consumed as a `futures::Stream` and
//!   cancellable at any point.
//!
//! ```rust
//! use hgdb_core::Hypergraph;
//! use hgdb_traversal::DepthFirst;
//!
//! let mut hg = Hypergraph::new();
//! let g = hg.create_root("g");
//! let a = hg.create_child(g, "a").unwrap();
//! let b = hg.create_mutual_adjacent_child(a, "b").unwrap();
//!
//! assert_eq!(DepthFirst::new(&hg, a).unwrap().collect::<Vec<_>>(), vec![b, a]);
//! ```

mod context;
pub mod cursor;
pub mod source;
pub mod stream;

pub use common_config::{TraversalConfig, TraversalOrder};
pub use cursor::DepthFirst;
pub use source::{AdjacencySource, SharedHypergraph};
pub use stream::{CancellationHandle, TraversalStream};
