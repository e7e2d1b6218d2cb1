//! Error types and result aliases for hypergraphdb.
//!
//! Every fallible operation in the workspace reports an [`HgError`]; redundant
//! operations (connecting an edge twice, detaching a root) are not errors and
//! surface as `Ok(false)` or a no-op instead.

mod error;

pub use error::{HgError, HgResult};
