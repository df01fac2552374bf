use std::iter::StepBy;
use std::slice::ChunksExact;

use bytemuck::{Pod, Zeroable};

use crate::error::{DecodeError, Result};
use crate::header::PlyHeader;

pub const RECORD_FIELDS: usize = 14;
pub const RECORD_SIZE: usize = RECORD_FIELDS * size_of::<f32>();

/// One vertex as stored on disk: 14 little-endian f32s.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RawRecord {
    pub position: [f32; 3],
    pub sh_dc: [f32; 3],
    pub opacity_logit: f32,
    pub log_scales: [f32; 3],
    /// Opaque trailing fields, only read to keep the record stride.
    pub reserved: [f32; 4],
}

impl RawRecord {
    /// Panics if `bytes` is not exactly [`RECORD_SIZE`] long.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let words: [u32; RECORD_FIELDS] = bytemuck::pod_read_unaligned(bytes);
        bytemuck::cast(words.map(u32::from_le))
    }
}

/// Step between kept source indices so at most `max_points` records are emitted.
pub fn subsample_stride(vertex_count: usize, max_points: usize) -> usize {
    let max_points = max_points.max(1);
    if vertex_count > max_points {
        vertex_count.div_ceil(max_points)
    } else {
        1
    }
}

pub fn kept_count(vertex_count: usize, stride: usize) -> usize {
    vertex_count.div_ceil(stride.max(1))
}

/// Iterates the kept records of a splat body in ascending source order.
pub struct RecordReader<'a> {
    chunks: StepBy<ChunksExact<'a, u8>>,
    stride: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8], header: &PlyHeader, max_points: usize) -> Result<Self> {
        let available = data.len();
        let required = header
            .vertex_count
            .checked_mul(RECORD_SIZE)
            .and_then(|body| body.checked_add(header.header_len))
            .ok_or(DecodeError::TruncatedBuffer {
                required: usize::MAX,
                available,
            })?;

        if available < required {
            return Err(DecodeError::TruncatedBuffer {
                required,
                available,
            });
        }

        let stride = subsample_stride(header.vertex_count, max_points);
        let body = &data[header.header_len..required];

        Ok(Self {
            chunks: body.chunks_exact(RECORD_SIZE).step_by(stride),
            stride,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl Iterator for RecordReader<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        self.chunks.next().map(RawRecord::from_le_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for RecordReader<'_> {}
