//! Torus generation for the product rings.
//!
//! The viewer renders two gold tori; the renderer uploads the vertex and
//! index buffers once and never touches them again.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Build a torus of main radius `radius` and tube radius `tube`, as a
/// triangle list. `radial_segments` divides the tube cross-section,
/// `tubular_segments` divides the ring itself.
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> (Vec<MeshVertex>, Vec<u32>) {
    let mut vertices =
        Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;

            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let normal = (position - center).normalize();
            vertices.push(MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    (vertices, indices)
}
