//! Defines the self-describing on-disk format for a compressed block sequence.
//! This module is the single source of truth for serialization, deserialization,
//! and efficient metadata peeking of the artifact.

use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};

use crate::block::{decode_sequence, BlockRecord};
use crate::error::ArtcError;
use crate::format::{
    FORMULA_TAG, MAX_SERIES_BLOCK_SIZE, RAW_TAG, SERIES_FORMAT_VERSION, SERIES_HEADER_SIZE,
    SERIES_MAGIC,
};
use crate::session::CompressionStats;

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from an artifact's fixed header without touching the
/// block payloads.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SeriesHeaderInfo {
    /// The version of the series format that was parsed.
    pub format_version: u16,
    pub block_size: u32,
    pub tolerance: f32,
    pub total_readings: u64,
    pub block_count: u32,
    /// Size of the fixed header in bytes.
    pub header_size: usize,
}

/// An ordered record sequence together with everything needed to decode it.
///
/// Every `Formula` record spans exactly `block_size` readings; only the last
/// record may be shorter, and then it is `Raw`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompressedSeries {
    pub block_size: u32,
    pub tolerance: f32,
    pub total_readings: u64,
    pub records: Vec<BlockRecord>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl CompressedSeries {
    /// Reconstructs the full series.
    pub fn decompress(&self) -> Vec<f32> {
        decode_sequence(&self.records, self.block_size as usize)
    }

    /// Statistics for this series alone, as a session would have counted them.
    pub fn stats(&self) -> CompressionStats {
        let mut stats = CompressionStats::default();
        for record in &self.records {
            let len = record.len_hint().unwrap_or(self.block_size as usize);
            stats.record(record, len);
        }
        stats
    }

    /// Serializes the series into its canonical little-endian byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtcError> {
        let block_count = u32::try_from(self.records.len()).map_err(|_| {
            ArtcError::FrameFormatError(format!(
                "Too many blocks to serialize: {}",
                self.records.len()
            ))
        })?;

        let payload_size: usize = self
            .records
            .iter()
            .map(|r| 1 + r.len_hint().map_or(8, |len| 4 + 4 * len))
            .sum();
        let mut buf = Vec::with_capacity(SERIES_HEADER_SIZE + payload_size);

        // Fixed-size header.
        buf.extend_from_slice(SERIES_MAGIC);
        buf.extend_from_slice(&SERIES_FORMAT_VERSION.to_le_bytes());
        buf.extend_from_slice(&self.block_size.to_le_bytes());
        buf.extend_from_slice(&self.tolerance.to_le_bytes());
        buf.extend_from_slice(&self.total_readings.to_le_bytes());
        buf.extend_from_slice(&block_count.to_le_bytes());

        for record in &self.records {
            match record {
                BlockRecord::Formula { slope, intercept } => {
                    buf.push(FORMULA_TAG);
                    buf.extend_from_slice(&slope.to_le_bytes());
                    buf.extend_from_slice(&intercept.to_le_bytes());
                }
                BlockRecord::Raw { values } => {
                    let len = u32::try_from(values.len()).map_err(|_| {
                        ArtcError::FrameFormatError(format!(
                            "Raw block too long to serialize: {}",
                            values.len()
                        ))
                    })?;
                    buf.push(RAW_TAG);
                    buf.extend_from_slice(&len.to_le_bytes());
                    for value in values {
                        buf.extend_from_slice(&value.to_le_bytes());
                    }
                }
            }
        }

        Ok(buf)
    }

    /// Deserializes and fully validates a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtcError> {
        let info = Self::peek_info(bytes)?;
        let block_size = info.block_size as usize;

        let mut cursor = Cursor::new(bytes);
        cursor.set_position(info.header_size as u64);

        // Each record needs at least 5 bytes, which bounds the preallocation.
        let remaining = bytes.len() - info.header_size;
        let mut records = Vec::with_capacity((info.block_count as usize).min(remaining / 5));

        for index in 0..info.block_count {
            let tag = read_u8(&mut cursor)?;
            let record = match tag {
                FORMULA_TAG => {
                    let slope = read_f32(&mut cursor)?;
                    let intercept = read_f32(&mut cursor)?;
                    BlockRecord::Formula { slope, intercept }
                }
                RAW_TAG => {
                    let len = read_u32(&mut cursor)? as usize;
                    // SECURITY: Validate length before allocating.
                    if len == 0 || len > block_size {
                        return Err(raw_length_error(index as usize, len, block_size));
                    }
                    let available = bytes.len() - cursor.position() as usize;
                    if len * 4 > available {
                        return Err(ArtcError::FrameFormatError(format!(
                            "Block {} is truncated: needs {} bytes, {} left",
                            index,
                            len * 4,
                            available
                        )));
                    }
                    let mut values = Vec::with_capacity(len);
                    for _ in 0..len {
                        values.push(read_f32(&mut cursor)?);
                    }
                    BlockRecord::Raw { values }
                }
                other => {
                    return Err(ArtcError::FrameFormatError(format!(
                        "Unknown block tag {} at block {}",
                        other, index
                    )))
                }
            };
            records.push(record);
        }

        if cursor.position() as usize != bytes.len() {
            return Err(ArtcError::FrameFormatError(format!(
                "{} trailing bytes after the last block",
                bytes.len() - cursor.position() as usize
            )));
        }

        let series = Self {
            block_size: info.block_size,
            tolerance: info.tolerance,
            total_readings: info.total_readings,
            records,
        };
        series.validate()?;
        Ok(series)
    }

    /// Parses only the fixed-size header.
    pub fn peek_info(bytes: &[u8]) -> Result<SeriesHeaderInfo, ArtcError> {
        if bytes.len() < SERIES_HEADER_SIZE {
            return Err(ArtcError::FrameFormatError(format!(
                "Series is too small to be valid. Minimum size: {}, got: {}",
                SERIES_HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);

        let mut magic_buf = [0u8; 4];
        cursor.read_exact(&mut magic_buf).map_err(map_io_err)?;
        if magic_buf != *SERIES_MAGIC {
            return Err(ArtcError::FrameFormatError(
                "Invalid series magic number".into(),
            ));
        }

        let version = read_u16(&mut cursor)?;
        if version != SERIES_FORMAT_VERSION {
            return Err(ArtcError::FrameFormatError(format!(
                "Unsupported series version: expected {}, got {}",
                SERIES_FORMAT_VERSION, version
            )));
        }

        let block_size = read_u32(&mut cursor)?;
        check_block_size(block_size)?;
        let tolerance = read_f32(&mut cursor)?;
        let total_readings = read_u64(&mut cursor)?;
        let block_count = read_u32(&mut cursor)?;

        Ok(SeriesHeaderInfo {
            format_version: version,
            block_size,
            tolerance,
            total_readings,
            block_count,
            header_size: cursor.position() as usize,
        })
    }

    /// Exports the series as JSON (records tagged `formula` / `raw`).
    pub fn to_json(&self) -> Result<String, ArtcError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Imports a series from JSON, applying the same checks as `from_bytes`.
    pub fn from_json(json: &str) -> Result<Self, ArtcError> {
        let series: Self = serde_json::from_str(json)?;
        series.validate()?;
        Ok(series)
    }

    /// Checks the record invariants shared by every import path.
    fn validate(&self) -> Result<(), ArtcError> {
        check_block_size(self.block_size)?;
        let block_size = self.block_size as usize;
        let last = self.records.len().saturating_sub(1);
        let mut decoded_len: u64 = 0;

        for (index, record) in self.records.iter().enumerate() {
            match record {
                BlockRecord::Formula { slope, intercept } => {
                    if !slope.is_finite() || !intercept.is_finite() {
                        return Err(ArtcError::FrameFormatError(format!(
                            "Block {} has non-finite formula parameters",
                            index
                        )));
                    }
                    decoded_len += block_size as u64;
                }
                BlockRecord::Raw { values } => {
                    let len = values.len();
                    if len == 0 || len > block_size {
                        return Err(raw_length_error(index, len, block_size));
                    }
                    if len < block_size && index != last {
                        return Err(ArtcError::FrameFormatError(format!(
                            "Block {} is short ({} of {} readings) but is not the last block",
                            index, len, block_size
                        )));
                    }
                    if values.iter().any(|v| !v.is_finite()) {
                        return Err(ArtcError::FrameFormatError(format!(
                            "Block {} contains a non-finite reading",
                            index
                        )));
                    }
                    decoded_len += len as u64;
                }
            }
        }

        if decoded_len != self.total_readings {
            return Err(ArtcError::FrameFormatError(format!(
                "Blocks decode to {} readings but the header declares {}",
                decoded_len, self.total_readings
            )));
        }
        Ok(())
    }
}

//==================================================================================
// Private Helpers
//==================================================================================

fn check_block_size(block_size: u32) -> Result<(), ArtcError> {
    if block_size == 0 || block_size > MAX_SERIES_BLOCK_SIZE {
        return Err(ArtcError::FrameFormatError(format!(
            "Block size must be between 1 and {}, got {}",
            MAX_SERIES_BLOCK_SIZE, block_size
        )));
    }
    Ok(())
}

fn raw_length_error(index: usize, len: usize, block_size: usize) -> ArtcError {
    ArtcError::FrameFormatError(format!(
        "Block {} declares {} raw readings with block size {}",
        index, len, block_size
    ))
}

fn map_io_err(e: std::io::Error) -> ArtcError {
    ArtcError::FrameFormatError(e.to_string())
}

fn read_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8, ArtcError> {
    let mut buf = [0u8; 1];
    cursor.read_exact(&mut buf).map_err(map_io_err)?;
    Ok(buf[0])
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, ArtcError> {
    let mut buf = [0u8; 2];
    cursor.read_exact(&mut buf).map_err(map_io_err)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, ArtcError> {
    let mut buf = [0u8; 4];
    cursor.read_exact(&mut buf).map_err(map_io_err)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(cursor: &mut Cursor<&[u8]>) -> Result<u64, ArtcError> {
    let mut buf = [0u8; 8];
    cursor.read_exact(&mut buf).map_err(map_io_err)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_f32(cursor: &mut Cursor<&[u8]>) -> Result<f32, ArtcError> {
    let mut buf = [0u8; 4];
    cursor.read_exact(&mut buf).map_err(map_io_err)?;
    Ok(f32::from_le_bytes(buf))
}

//==================================================================================
// Unit Tests
//==================================================================================
