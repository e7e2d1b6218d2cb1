//! hypergraphdb - embeddable hypergraph store
//!
//! Nodes nest inside one another through a containment forest, connect
//! through directed adjacency, and group into labelled hyperedges. Adjacency
//! may be cyclic; the traversal engine walks it depth-first, exactly once per
//! reachable node, either as a pull cursor or as a cancellable stream.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use common_config as config;
pub use common_display as display;
pub use common_error as error;
pub use common_runtime as runtime;
pub use hgdb_core as core;
pub use hgdb_traversal as traversal;

pub use common_error::{HgError, HgResult};
pub use hgdb_core::{Hypergraph, NodeId, NodeSet};
pub use hgdb_traversal::{DepthFirst, SharedHypergraph, TraversalStream};

/// hypergraphdb version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
