//! The stateful layer over the block codec: configuration, the streaming
//! buffer, and cumulative statistics.

mod core;
pub mod stats;

pub use self::core::Session;
pub use stats::CompressionStats;

#[cfg(test)]
mod proptests;
