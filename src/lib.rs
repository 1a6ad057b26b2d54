//! This file is the root of the `artc_lite` Rust crate.
//!
//! ARTC-LITE compresses scalar sensor time series block by block. Each block of
//! readings is replaced by the two parameters of its least-squares line when
//! that line reproduces every reading within a caller-chosen tolerance, and is
//! stored verbatim otherwise.
//!
//! # Example
//! ```
//! use artc_lite::Session;
//!
//! let mut session = Session::new(8, 0.2).unwrap();
//! let readings: Vec<f32> = (0..100).map(|i| 20.0 + i as f32 * 0.05).collect();
//!
//! let records = session.compress(&readings).unwrap();
//! let restored = session.decompress(&records);
//!
//! assert_eq!(restored.len(), readings.len());
//! assert!(session.get_ratio() > 1.0);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod artifact;
pub mod block;
pub mod config;
pub mod format;
pub mod kernels;
pub mod observability;
pub mod session;
pub mod utils;
pub mod validation;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use artifact::{CompressedSeries, SeriesHeaderInfo};
pub use block::{decode, encode, BlockRecord};
pub use config::ArtcConfig;
pub use error::ArtcError;
pub use observability::enable_verbose_logging;
pub use session::{CompressionStats, Session};
pub use utils::format_bytes;
