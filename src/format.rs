// In: src/format.rs

//! Defines the size accounting and on-disk constants for the artc-lite format.
//! This is the single source of truth for how many bytes each block variant
//! costs and for the tags and header used by the serialized block sequence.

//==================================================================================
// I. Size Accounting
//==================================================================================

/// Every reading is an `f32`.
pub const BYTES_PER_READING: u64 = 4;

/// A formula block stores two `f32`s: slope and intercept.
pub const FORMULA_BLOCK_BYTES: u64 = 8;

//==================================================================================
// II. Serialized Block Sequence
//==================================================================================

/// The magic number to identify a serialized artc-lite block sequence.
pub const SERIES_MAGIC: &[u8; 4] = b"ARTL";
/// The current version of the block sequence format.
pub const SERIES_FORMAT_VERSION: u16 = 1;

/// Fixed header: magic(4) + version(2) + block_size(4) + tolerance(4)
/// + total_readings(8) + block_count(4).
pub const SERIES_HEADER_SIZE: usize = 26;

/// Record tag for a formula block (same code the firmware uses).
pub const FORMULA_TAG: u8 = 0;
/// Record tag for a raw block.
pub const RAW_TAG: u8 = 1;

/// Upper bound on the block size a serialized sequence may declare. Decoding
/// a formula record allocates `block_size` readings.
pub const MAX_SERIES_BLOCK_SIZE: u32 = 1 << 20;
