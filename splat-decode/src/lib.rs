use tracing::{debug, debug_span, warn};

mod bounding_box;
mod config;
mod error;
mod header;
mod normalize;
mod point_cloud;
mod record;
mod transform;

#[cfg(test)]
mod test_utils;

pub use bounding_box::BoundingBox;
pub use config::{DEFAULT_MAX_POINTS, DecodeConfig};
pub use error::{DecodeError, Result};
pub use header::{PlyHeader, PlyProperty, scan_header};
pub use normalize::{centroid, recenter};
pub use point_cloud::{PointCloud, PointCloudSummary, SplatVertex};
pub use record::{
    RECORD_FIELDS, RECORD_SIZE, RawRecord, RecordReader, kept_count, subsample_stride,
};
pub use transform::{
    SH_C0, SIZE_SCALE, SplatPoint, log_scales_to_size, logit_to_opacity, sh_to_rgb,
    to_render_axes, transform_record,
};

/// Decodes a binary little endian splat ply into a recentered point cloud.
///
/// Files with more than `config.max_points` vertices are subsampled with a
/// uniform stride.
pub fn decode_splats(data: &[u8], config: &DecodeConfig) -> Result<PointCloud> {
    let _span = debug_span!("Decode splats", bytes = data.len()).entered();

    config.validate()?;

    let header = scan_header(data)?;
    debug!(
        vertex_count = header.vertex_count,
        header_len = header.header_len,
        format = header.format.as_deref().unwrap_or("unknown"),
        "Parsed ply header"
    );
    if !header.has_splat_layout() {
        warn!(
            "Vertex element declares {} properties, expected {} floats. Decoding as splats anyway.",
            header.vertex_properties.len(),
            RECORD_FIELDS
        );
    }

    let records = RecordReader::new(data, &header, config.max_points)?;
    debug!(stride = records.stride(), kept = records.len(), "Reading splat records");

    PointCloud::from_points(records.map(|rec| transform_record(&rec)))
}
