//! This module declares the pure, stateless numeric kernels used by the block
//! codec. Kernels know nothing about sessions, statistics, or serialization;
//! they operate on plain slices of readings.

/// Affine (order-1) least-squares fitting and error measurement.
pub mod linear_fit;
