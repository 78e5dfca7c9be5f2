//! Box geometry and per-instance data uploaded to the GPU.

use crate::particle::{Particle, ParticleField};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

// (normal, u, v) with u x v == normal so each face winds counter-clockwise
// when seen from outside.
const BOX_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

/// Unit box spanning \[-1, 1\] on every axis: 24 vertices with flat face
/// normals and 36 triangle-list indices.
pub fn unit_box() -> (Vec<MeshVertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in BOX_FACES {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = n + u * su + v * sv;
            vertices.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// Rotation matrix of the whole group (XYZ Euler order).
#[inline]
pub fn group_matrix(group_rotation: Vec3) -> Mat4 {
    Mat4::from_quat(euler_xyz(group_rotation))
}

#[inline]
fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

impl ParticleInstance {
    /// World transform `group * translate * rotate * scale` plus linear colors.
    pub fn from_particle(particle: &Particle, group: Mat4, half_extent: f32) -> Self {
        let local = Mat4::from_scale_rotation_translation(
            Vec3::splat(half_extent),
            euler_xyz(particle.rotation),
            particle.position,
        );
        let color = particle.color.to_linear();
        let emissive = particle.emissive.to_linear();
        Self {
            model: (group * local).to_cols_array_2d(),
            color: [color.r, color.g, color.b, 1.0],
            emissive: [emissive.r, emissive.g, emissive.b, 1.0],
        }
    }
}

/// Rebuild the instance list for the current particle state, reusing `out`.
pub fn pack_instances(field: &ParticleField, box_size: f32, out: &mut Vec<ParticleInstance>) {
    let group = group_matrix(field.group_rotation);
    let half = box_size * 0.5;
    out.clear();
    out.extend(
        field
            .particles()
            .iter()
            .map(|p| ParticleInstance::from_particle(p, group, half)),
    );
}
