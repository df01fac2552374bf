use crate::record::RawRecord;

const PROPERTIES: [&str; 14] = [
    "x", "y", "z", "f_dc_0", "f_dc_1", "f_dc_2", "opacity", "scale_0", "scale_1", "scale_2",
    "rot_0", "rot_1", "rot_2", "rot_3",
];

pub(crate) fn record(
    position: [f32; 3],
    sh_dc: [f32; 3],
    opacity_logit: f32,
    log_scales: [f32; 3],
) -> RawRecord {
    RawRecord {
        position,
        sh_dc,
        opacity_logit,
        log_scales,
        reserved: [1.0, 0.0, 0.0, 0.0],
    }
}

/// Binary little endian splat ply declaring `vertex_count` vertices, followed by `records`.
pub(crate) fn ply_bytes(vertex_count: usize, records: &[RawRecord]) -> Vec<u8> {
    let mut header = format!(
        "ply\nformat binary_little_endian 1.0\nelement vertex {vertex_count}\n"
    );
    for name in PROPERTIES {
        header.push_str(&format!("property float {name}\n"));
    }
    header.push_str("end_header\n");

    let mut data = header.into_bytes();
    for rec in records {
        let words: [f32; 14] = bytemuck::cast(*rec);
        for word in words {
            data.extend_from_slice(&word.to_le_bytes());
        }
    }
    data
}
