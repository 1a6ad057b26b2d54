// In: src/session/core.rs

use crate::artifact::CompressedSeries;
use crate::block::encoder::{encode_raw, encode_with_error};
use crate::block::{decode_sequence, BlockRecord};
use crate::config::ArtcConfig;
use crate::error::ArtcError;
use crate::session::stats::CompressionStats;
use crate::validation;
use crate::format::MAX_SERIES_BLOCK_SIZE;
use num_traits::ToPrimitive;

/// The buffer grows past this on demand; any positive block size is valid.
const MAX_PREALLOCATED_READINGS: usize = 1024;

/// A stateful compressor that owns its configuration, a streaming buffer, and
/// cumulative statistics.
///
/// Batch mode (`compress`) and streaming mode (`add_reading` / `get_block`)
/// share the same per-block logic and the same statistics, and produce
/// identical records for the same input.
///
/// A `Session` is single-writer: wrap it in a lock to share it across threads.
#[derive(Debug, Clone)]
pub struct Session {
    config: ArtcConfig,
    /// Pending readings, oldest first.
    buffer: Vec<f32>,
    stats: CompressionStats,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: ArtcConfig::default(),
            buffer: Vec::new(),
            stats: CompressionStats::default(),
        }
    }
}

impl Session {
    //==============================================================================
    // Construction & Accessors
    //==============================================================================

    pub fn new(block_size: usize, tolerance: f32) -> Result<Self, ArtcError> {
        Self::with_config(ArtcConfig::new(block_size, tolerance)?)
    }

    pub fn with_config(config: ArtcConfig) -> Result<Self, ArtcError> {
        config.validate()?;
        Ok(Self {
            config,
            buffer: Vec::with_capacity(config.block_size.min(MAX_PREALLOCATED_READINGS)),
            stats: CompressionStats::default(),
        })
    }

    pub fn config(&self) -> &ArtcConfig {
        &self.config
    }

    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    pub fn tolerance(&self) -> f32 {
        self.config.tolerance
    }

    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }

    /// Number of readings waiting in the streaming buffer.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    //==============================================================================
    // Batch Mode
    //==============================================================================

    /// Compresses a whole series into an ordered record sequence.
    ///
    /// Every full chunk of `block_size` readings goes through the fit/verify
    /// encoder. A shorter trailing chunk is always stored `Raw`, so every
    /// `Formula` in the output spans exactly `block_size` readings and
    /// [`Session::decompress`] needs nothing but the records.
    ///
    /// All readings are validated first; on error nothing is emitted and the
    /// statistics are untouched.
    pub fn compress(&mut self, readings: &[f32]) -> Result<Vec<BlockRecord>, ArtcError> {
        validation::ensure_finite(readings)?;

        let block_size = self.config.block_size;
        let mut records = Vec::with_capacity(readings.len().div_ceil(block_size));
        for chunk in readings.chunks(block_size) {
            records.push(self.emit(chunk));
        }

        log::info!(
            "compressed {} readings into {} blocks ({} formula, ratio so far {:.2}x)",
            readings.len(),
            records.len(),
            records.iter().filter(|r| r.is_formula()).count(),
            self.stats.ratio()
        );
        Ok(records)
    }

    /// Validates and converts arbitrary numeric input, then compresses it.
    pub fn compress_values<T: ToPrimitive>(
        &mut self,
        data: &[T],
    ) -> Result<Vec<BlockRecord>, ArtcError> {
        let readings = validation::validate_readings(data)?;
        self.compress(&readings)
    }

    /// Compresses a series into a self-describing, serializable container.
    ///
    /// Fails without compressing anything if the block size cannot be stored
    /// in the series header.
    pub fn compress_series(&mut self, readings: &[f32]) -> Result<CompressedSeries, ArtcError> {
        let block_size = u32::try_from(self.config.block_size)
            .ok()
            .filter(|&size| size <= MAX_SERIES_BLOCK_SIZE)
            .ok_or_else(|| {
                ArtcError::FrameFormatError(format!(
                    "Block size {} exceeds the serializable maximum of {}",
                    self.config.block_size, MAX_SERIES_BLOCK_SIZE
                ))
            })?;
        let records = self.compress(readings)?;
        Ok(CompressedSeries {
            block_size,
            tolerance: self.config.tolerance,
            total_readings: readings.len() as u64,
            records,
        })
    }

    /// Reconstructs readings from records produced by a session with the same
    /// block size. Does not touch the statistics.
    pub fn decompress(&self, records: &[BlockRecord]) -> Vec<f32> {
        decode_sequence(records, self.config.block_size)
    }

    //==============================================================================
    // Streaming Mode
    //==============================================================================

    /// Appends one reading to the streaming buffer.
    pub fn add_reading(&mut self, value: f32) -> Result<(), ArtcError> {
        validation::ensure_finite_reading(value)?;
        self.buffer.push(value);
        log::trace!("buffered reading {} ({} pending)", value, self.buffer.len());
        Ok(())
    }

    /// Appends several readings; if any is invalid, none are appended.
    pub fn add_readings(&mut self, values: &[f32]) -> Result<(), ArtcError> {
        validation::ensure_finite(values)?;
        self.buffer.extend_from_slice(values);
        log::trace!("buffered {} readings ({} pending)", values.len(), self.buffer.len());
        Ok(())
    }

    pub fn block_ready(&self) -> bool {
        self.buffer.len() >= self.config.block_size
    }

    /// Encodes and removes the oldest `block_size` buffered readings.
    pub fn get_block(&mut self) -> Result<BlockRecord, ArtcError> {
        if !self.block_ready() {
            return Err(ArtcError::PreconditionError(format!(
                "get_block called with {} of {} readings buffered",
                self.buffer.len(),
                self.config.block_size
            )));
        }
        let block: Vec<f32> = self.buffer.drain(..self.config.block_size).collect();
        Ok(self.emit(&block))
    }

    /// Emits whatever is left in the buffer as a final `Raw` block.
    ///
    /// Full blocks must be drained with `get_block` first; flushing while
    /// `block_ready()` is a `PreconditionError`. Returns `None` when nothing
    /// is pending.
    pub fn flush(&mut self) -> Result<Option<BlockRecord>, ArtcError> {
        if self.block_ready() {
            return Err(ArtcError::PreconditionError(format!(
                "flush called with a full block pending ({} readings buffered)",
                self.buffer.len()
            )));
        }
        if self.buffer.is_empty() {
            return Ok(None);
        }
        let block = std::mem::take(&mut self.buffer);
        Ok(Some(self.emit(&block)))
    }

    /// Discards pending readings without touching statistics.
    pub fn clear_buffer(&mut self) {
        log::trace!("clearing {} pending readings", self.buffer.len());
        self.buffer.clear();
    }

    //==============================================================================
    // Statistics
    //==============================================================================

    /// Zeroes all statistics; the buffer is left as is.
    pub fn reset_stats(&mut self) {
        log::trace!("resetting statistics");
        self.stats.reset();
    }

    /// Original size divided by compressed size; `1.0` on a fresh session.
    pub fn get_ratio(&self) -> f32 {
        self.stats.ratio()
    }

    pub fn report(&self) -> String {
        self.stats.report()
    }

    /// Prints the statistics report to stdout.
    pub fn print_stats(&self) {
        println!("{}", self.stats.report());
    }

    //==============================================================================
    // Private Helpers
    //==============================================================================

    /// Encodes one chunk, updates statistics, and logs the decision. Chunks
    /// shorter than `block_size` bypass the fit and are stored raw.
    fn emit(&mut self, chunk: &[f32]) -> BlockRecord {
        let record = if chunk.len() == self.config.block_size {
            let (record, max_error) = encode_with_error(chunk, self.config.tolerance);
            log::debug!(
                "block of {} readings -> {} (max error {:.6}, tolerance {})",
                chunk.len(),
                if record.is_formula() { "formula" } else { "raw" },
                max_error,
                self.config.tolerance
            );
            record
        } else {
            log::debug!(
                "short block of {} readings stored raw",
                chunk.len()
            );
            encode_raw(chunk)
        };
        self.stats.record(&record, chunk.len());
        record
    }
}
