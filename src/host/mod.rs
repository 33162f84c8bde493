//! Host introspection
//!
//! Every host query is a chain of probes: each probe returns `Option<u64>`,
//! the first `Some` wins, and callers fall back to a documented constant when
//! the whole chain comes up empty. Nothing here returns an error.

pub mod estimator;
pub mod probes;

pub use estimator::{SizeEstimator, size_from_memory_fraction, size_from_proc_process_count};
pub use probes::{HostInfo, Probe, first_available, resident_memory_bytes};
