use glam::{DVec3, Vec3};

use crate::error::{DecodeError, Result};

/// Mean of `positions`.
///
/// Summed sequentially in slice order with f64 accumulation, then narrowed.
pub fn centroid(positions: &[Vec3]) -> Result<Vec3> {
    if positions.is_empty() {
        return Err(DecodeError::EmptyPointCloud);
    }
    let sum = positions
        .iter()
        .fold(DVec3::ZERO, |acc, p| acc + p.as_dvec3());
    Ok((sum / positions.len() as f64).as_vec3())
}

/// Moves `positions` so their centroid sits at the origin.
///
/// Returns the centroid before the move and the largest distance from the
/// origin afterwards.
pub fn recenter(positions: &mut [Vec3]) -> Result<(Vec3, f32)> {
    let center = centroid(positions)?;
    let radius = positions
        .iter_mut()
        .map(|p| {
            *p -= center;
            p.length()
        })
        .fold(0.0, f32::max);
    Ok((center, radius))
}
