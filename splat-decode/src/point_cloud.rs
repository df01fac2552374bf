use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::Serialize;

use crate::bounding_box::BoundingBox;
use crate::error::Result;
use crate::normalize::recenter;
use crate::transform::SplatPoint;

/// Interleaved per-splat vertex, ready for `bytemuck::cast_slice` into a GPU buffer.
/// Layout: vec4 (position.xyz, size), vec4 (color.rgb, opacity)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SplatVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointCloudSummary {
    pub count: usize,
    pub center: [f32; 3],
    pub radius: f32,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Decoded, recentered splats.
///
/// All per point arrays share the same length. `center` and `radius` are derived
/// from the positions when the cloud is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    opacities: Vec<f32>,
    sizes: Vec<f32>,
    center: Vec3,
    radius: f32,
}

impl PointCloud {
    /// Collects `points` and recenters them about their centroid.
    pub fn from_points(points: impl IntoIterator<Item = SplatPoint>) -> Result<Self> {
        let points = points.into_iter();
        let capacity = points.size_hint().0;
        let mut positions = Vec::with_capacity(capacity);
        let mut colors = Vec::with_capacity(capacity);
        let mut opacities = Vec::with_capacity(capacity);
        let mut sizes = Vec::with_capacity(capacity);

        for point in points {
            positions.push(point.position);
            colors.push(point.color);
            opacities.push(point.opacity);
            sizes.push(point.size);
        }

        let (center, radius) = recenter(&mut positions)?;

        Ok(Self {
            positions,
            colors,
            opacities,
            sizes,
            center,
            radius,
        })
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Centroid of the positions before recentering.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Largest distance of a recentered position from the origin.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> BoundingBox {
        // A cloud always holds at least one point.
        BoundingBox::from_points(&self.positions)
            .unwrap_or_else(|| BoundingBox::new(Vec3::ZERO, Vec3::ZERO))
    }

    pub fn to_vertices(&self) -> Vec<SplatVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .zip(self.opacities.iter().zip(&self.sizes))
            .map(|((position, color), (&opacity, &size))| SplatVertex {
                position: position.to_array(),
                size,
                color: color.to_array(),
                opacity,
            })
            .collect()
    }

    pub fn summary(&self) -> PointCloudSummary {
        let bounds = self.bounds();
        PointCloudSummary {
            count: self.count(),
            center: self.center.to_array(),
            radius: self.radius,
            min: bounds.min().to_array(),
            max: bounds.max().to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    fn point(position: Vec3, opacity: f32) -> SplatPoint {
        SplatPoint {
            position,
            color: Vec3::new(0.1, 0.2, 0.3),
            opacity,
            size: 2.0,
        }
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(
            PointCloud::from_points(std::iter::empty()),
            Err(DecodeError::EmptyPointCloud)
        );
    }

    #[test]
    fn arrays_stay_aligned() {
        let cloud = PointCloud::from_points([
            point(Vec3::new(2.0, 0.0, 0.0), 0.25),
            point(Vec3::new(4.0, 2.0, 0.0), 0.75),
        ])
        .expect("non empty");

        assert_eq!(cloud.count(), 2);
        assert_eq!(cloud.colors().len(), 2);
        assert_eq!(cloud.opacities(), [0.25, 0.75]);
        assert_eq!(cloud.sizes(), [2.0, 2.0]);
        assert_eq!(cloud.center(), Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(cloud.positions(), [Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)]);
        assert!((cloud.radius() - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn interleaved_vertices() {
        assert_eq!(size_of::<SplatVertex>(), 32);

        let cloud = PointCloud::from_points([point(Vec3::new(1.0, 1.0, 1.0), 0.5)])
            .expect("non empty");
        let vertices = cloud.to_vertices();
        assert_eq!(
            vertices,
            [SplatVertex {
                position: [0.0, 0.0, 0.0],
                size: 2.0,
                color: [0.1, 0.2, 0.3],
                opacity: 0.5,
            }]
        );

        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, [0.0, 0.0, 0.0, 2.0, 0.1, 0.2, 0.3, 0.5]);
    }

    #[test]
    fn summary_and_bounds() {
        let cloud = PointCloud::from_points([
            point(Vec3::new(0.0, 0.0, 0.0), 0.5),
            point(Vec3::new(2.0, 4.0, -6.0), 0.5),
        ])
        .expect("non empty");

        let bounds = cloud.bounds();
        assert_eq!(bounds.center, Vec3::ZERO);
        assert_eq!(bounds.extent, Vec3::new(1.0, 2.0, 3.0));

        let summary = cloud.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.center, [1.0, 2.0, -3.0]);
        assert_eq!(summary.min, [-1.0, -2.0, -3.0]);
        assert_eq!(summary.max, [1.0, 2.0, 3.0]);

        let json = serde_json::to_value(&summary).expect("serializable");
        assert_eq!(json["count"], 2);
    }
}
