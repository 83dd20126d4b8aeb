//! Process-level setup shared by binaries and examples.
//!
//! Currently this is only the logging subscriber, see [`setup_tracing`].

pub mod tracing;

pub use tracing::*;
