// Host-side tests for scene construction, camera and viewport handling.

use audiosphere_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_config(count: usize) -> SceneConfig {
    SceneConfig {
        particle_count: count,
        ..SceneConfig::default()
    }
}

#[test]
fn default_config_matches_tuning_constants() {
    let c = SceneConfig::default();
    assert_eq!(c.particle_count, 2000);
    assert_eq!(c.sphere_radius, 100.0);
    assert_eq!(c.camera_distance, 300.0);
    assert_eq!(c.fov_degrees, 75.0);
    assert_eq!(c.material.shininess, 100.0);
    assert_eq!(c.material.box_size, 2.0);
    assert_eq!(c.lighting.ambient, Rgb::from_hex(0x222222));
    assert_eq!(c.lighting.directional.intensity, 1.0);
}

#[test]
fn build_creates_full_particle_group() {
    let mut rng = StdRng::seed_from_u64(7);
    let scene = Scene::build(&SceneConfig::default(), &mut rng);
    let field = scene.particles.as_ref().expect("particles");
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert_eq!(field.group_rotation, Vec3::ZERO);
}

#[test]
fn camera_looks_at_cluster_from_plus_z() {
    let mut rng = StdRng::seed_from_u64(7);
    let scene = Scene::build(&small_config(4), &mut rng);
    assert_eq!(scene.camera.eye, Vec3::new(0.0, 0.0, 300.0));
    assert_eq!(scene.camera.target, Vec3::ZERO);
    assert!((scene.camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!(scene.camera.znear, 0.1);
    assert_eq!(scene.camera.zfar, 1000.0);
}

#[test]
fn whole_sphere_fits_inside_far_plane() {
    // the farthest a particle can be pushed is 2.5 radii behind the origin
    let cam = Camera::looking_at_origin(CAMERA_Z, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR);
    let far_point = Vec3::new(0.0, 0.0, -SPHERE_RADIUS * 2.5);
    assert!(cam.eye.distance(far_point) < cam.zfar);
}

#[test]
fn directional_light_points_toward_light_position() {
    let c = SceneConfig::default();
    let d = c.lighting.directional.direction();
    assert!((d.length() - 1.0).abs() < 1e-6);
    assert!(d.x > 0.0 && d.y > 0.0 && d.z > 0.0);
}

#[test]
fn same_seed_builds_same_scene() {
    let a = Scene::build(&small_config(50), &mut StdRng::seed_from_u64(3));
    let b = Scene::build(&small_config(50), &mut StdRng::seed_from_u64(3));
    let pa = a.particles.as_ref().unwrap().particles();
    let pb = b.particles.as_ref().unwrap().particles();
    for (x, y) in pa.iter().zip(pb) {
        assert_eq!(x.rest_position(), y.rest_position());
        assert_eq!(x.rotation, y.rotation);
    }
}

#[test]
fn step_without_particle_group_is_a_no_op() {
    let mut scene = Scene::empty(&SceneConfig::default());
    let spectrum = Spectrum::with_bin_count(128);
    assert!(!scene.step(&spectrum));
    assert!(scene.particles.is_none());
}

#[test]
fn step_updates_populated_scene() {
    let config = small_config(10);
    let mut scene = Scene::empty(&config);
    scene.populate(&config, &mut StdRng::seed_from_u64(1));
    let mut spectrum = Spectrum::with_bin_count(2);
    spectrum.fill_from(&[255, 0]);
    assert!(scene.step(&spectrum));
    let field = scene.particles.as_ref().unwrap();
    let p0 = &field.particles()[0];
    assert!((p0.position - p0.rest_position() * 2.5).length() < 1e-3);
    assert_eq!(field.particles()[1].position, field.particles()[1].rest_position());
}

#[test]
fn viewport_rejects_empty_sizes() {
    assert_eq!(
        Viewport::new(0, 10),
        Err(ConfigError::EmptyViewport { width: 0, height: 10 })
    );
    assert!(Viewport::new(1, 1).is_ok());
}

#[test]
fn viewport_from_css_applies_pixel_ratio() {
    let vp = Viewport::from_css(800.0, 600.0, 2.0);
    assert_eq!((vp.width, vp.height), (1600, 1200));
    let tiny = Viewport::from_css(0.0, 0.0, 1.0);
    assert_eq!((tiny.width, tiny.height), (1, 1));
}

#[test]
fn resize_is_idempotent() {
    let mut once = Camera::looking_at_origin(CAMERA_Z, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR);
    let mut twice = once.clone();
    let vp = Viewport::new(1920, 1080).unwrap();
    once.set_viewport(vp);
    twice.set_viewport(vp);
    twice.set_viewport(vp);
    assert_eq!(once.aspect, twice.aspect);
    assert_eq!(once.projection_matrix(), twice.projection_matrix());
    assert!((once.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn origin_projects_to_screen_center() {
    let mut cam = Camera::looking_at_origin(CAMERA_Z, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR);
    cam.set_viewport(Viewport::new(1280, 720).unwrap());
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}
