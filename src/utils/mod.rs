//! Utility functions

pub mod bytes;
pub mod time;

pub use bytes::format_bytes;
pub use time::{format_seconds, now_local};
