use glam::Vec3;

use crate::record::RawRecord;

/// Band 0 spherical harmonic normalization.
pub const SH_C0: f32 = 0.282_094_8;

/// World extent to on-screen point radius.
pub const SIZE_SCALE: f32 = 150.0;

// Largest f32 below one.
const OPACITY_MAX: f32 = 1.0 - f32::EPSILON / 2.0;

/// A single splat in renderer convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplatPoint {
    pub position: Vec3,
    pub color: Vec3,
    pub opacity: f32,
    pub size: f32,
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[inline]
fn channel_from_sh(dc: f32) -> f32 {
    (dc * SH_C0 + 0.5).clamp(0.0, 1.0)
}

pub fn sh_to_rgb(sh_dc: Vec3) -> Vec3 {
    Vec3::new(
        channel_from_sh(sh_dc.x),
        channel_from_sh(sh_dc.y),
        channel_from_sh(sh_dc.z),
    )
}

/// Logistic opacity, kept off 0 and 1 where f32 would saturate. NaN stays NaN.
pub fn logit_to_opacity(logit: f32) -> f32 {
    sigmoid(logit).clamp(f32::MIN_POSITIVE, OPACITY_MAX)
}

pub fn log_scales_to_size(log_scales: Vec3) -> f32 {
    let sum = log_scales.x.exp() + log_scales.y.exp() + log_scales.z.exp();
    sum / 3.0 * SIZE_SCALE
}

/// Flips Y and Z to go from the file's axis convention to the renderer's.
pub fn to_render_axes(position: Vec3) -> Vec3 {
    position * Vec3::new(1.0, -1.0, -1.0)
}

pub fn transform_record(record: &RawRecord) -> SplatPoint {
    SplatPoint {
        position: to_render_axes(Vec3::from_array(record.position)),
        color: sh_to_rgb(Vec3::from_array(record.sh_dc)),
        opacity: logit_to_opacity(record.opacity_logit),
        size: log_scales_to_size(Vec3::from_array(record.log_scales)),
    }
}
