// Host-side tests for box geometry and GPU instance packing.

use audiosphere_core::*;
use glam::{Mat4, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn unit_box_has_24_vertices_and_36_indices() {
    let (v, i) = unit_box();
    assert_eq!(v.len(), 24);
    assert_eq!(i.len(), 36);
    assert!(i.iter().all(|&idx| (idx as usize) < v.len()));
    for vert in &v {
        for c in vert.position {
            assert_eq!(c.abs(), 1.0);
        }
        assert!((Vec3::from(vert.normal).length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn box_triangles_wind_outward() {
    let (v, i) = unit_box();
    for tri in i.chunks(3) {
        let a = Vec3::from(v[tri[0] as usize].position);
        let b = Vec3::from(v[tri[1] as usize].position);
        let c = Vec3::from(v[tri[2] as usize].position);
        let face = (b - a).cross(c - a).normalize();
        let n = Vec3::from(v[tri[0] as usize].normal);
        assert!(face.dot(n) > 0.99, "triangle {tri:?} winds inward");
    }
}

#[test]
fn instance_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 96);
}

#[test]
fn pack_emits_one_instance_per_particle() {
    let field = ParticleField::scatter(&mut StdRng::seed_from_u64(9), 64, SPHERE_RADIUS);
    let mut out = Vec::new();
    pack_instances(&field, BOX_SIZE, &mut out);
    assert_eq!(out.len(), 64);
    pack_instances(&field, BOX_SIZE, &mut out);
    assert_eq!(out.len(), 64);
}

#[test]
fn instance_translation_is_particle_position_without_group_spin() {
    let field = ParticleField::scatter(&mut StdRng::seed_from_u64(9), 8, SPHERE_RADIUS);
    let mut out = Vec::new();
    pack_instances(&field, BOX_SIZE, &mut out);
    for (inst, p) in out.iter().zip(field.particles()) {
        let m = Mat4::from_cols_array_2d(&inst.model);
        let t = m.w_axis.truncate();
        assert!((t - p.position).length() < 1e-3);
        let center = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((center.truncate() - p.position).length() < 1e-3);
    }
}

#[test]
fn instance_scale_is_half_the_box_size() {
    let p = Particle::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.3, 1.2, 2.0));
    let inst = ParticleInstance::from_particle(&p, Mat4::IDENTITY, BOX_SIZE * 0.5);
    let m = Mat4::from_cols_array_2d(&inst.model);
    assert!((m.x_axis.truncate().length() - 1.0).abs() < 1e-5);
    assert!((m.y_axis.truncate().length() - 1.0).abs() < 1e-5);
}

#[test]
fn group_spin_rotates_instances_about_origin() {
    let mut field = ParticleField::from_particles(vec![Particle::new(
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::ZERO,
    )]);
    field.group_rotation = Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    let mut out = Vec::new();
    pack_instances(&field, BOX_SIZE, &mut out);
    let m = Mat4::from_cols_array_2d(&out[0].model);
    let world = m.w_axis.truncate();
    assert!((world.length() - 100.0).abs() < 1e-3);
    assert!((world - Vec3::new(0.0, 0.0, -100.0)).length() < 1e-3, "{world:?}");
}

#[test]
fn instance_colors_are_linear() {
    let p = Particle::new(Vec3::X * 100.0, Vec3::ZERO);
    let inst = ParticleInstance::from_particle(&p, Mat4::IDENTITY, 1.0);
    let lin = p.color.to_linear();
    assert_eq!(inst.color, [lin.r, lin.g, lin.b, 1.0]);
    assert_eq!(inst.color[3], 1.0);
    assert!(inst.emissive[0] <= inst.color[0]);
}
