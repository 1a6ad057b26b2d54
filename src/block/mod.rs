// In: src/block/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Block Codec
// ====================================================================================
//
// The block codec is the stateless heart of the library. It knows nothing about
// sessions, buffering, or statistics.
//
//   encode(&[f32], tolerance) -> BlockRecord
//         |
//         `-> kernels::linear_fit::fit           (least-squares slope/intercept)
//         `-> kernels::linear_fit::max_abs_error  (replay and measure)
//         `-> Formula if error <= tolerance, else Raw
//
//   decode(&BlockRecord, length) -> Vec<f32>
//         |
//         `-> Formula: replay kernels::linear_fit::predict for 0..length
//         `-> Raw:     copy values (length must match)
//
// The encoder and decoder share `predict`, so the error measured at encode
// time is exactly the error a caller observes after decoding.
// ====================================================================================
pub mod decoder;
pub mod encoder;
pub mod record;

pub use decoder::{decode, decode_sequence};
pub use encoder::encode;
pub use record::BlockRecord;
