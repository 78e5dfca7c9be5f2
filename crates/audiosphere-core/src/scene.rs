//! One-shot construction of the camera, lights and particle field.

use crate::color::Rgb;
use crate::constants::*;
use crate::particle::ParticleField;
use crate::spectrum::Spectrum;
use crate::state::Camera;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from, toward the origin.
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub directional: DirectionalLight,
    pub ambient: Rgb,
}

/// Phong material shared by every particle box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub specular: Rgb,
    pub shininess: f32,
    pub box_size: f32,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub sphere_radius: f32,
    pub camera_distance: f32,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub lighting: Lighting,
    pub material: Material,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            sphere_radius: SPHERE_RADIUS,
            camera_distance: CAMERA_Z,
            fov_degrees: CAMERA_FOV_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            lighting: Lighting {
                directional: DirectionalLight {
                    position: Vec3::from(LIGHT_POSITION),
                    color: Rgb::WHITE,
                    intensity: LIGHT_INTENSITY,
                },
                ambient: Rgb::from_hex(AMBIENT_COLOR_HEX),
            },
            material: Material {
                specular: Rgb::from_hex(SPECULAR_COLOR_HEX),
                shininess: SHININESS,
                box_size: BOX_SIZE,
            },
        }
    }
}

pub struct Scene {
    pub camera: Camera,
    pub lighting: Lighting,
    pub material: Material,
    pub particles: Option<ParticleField>,
}

impl Scene {
    /// Camera and lights only; the particle group is added by [`Scene::populate`].
    pub fn empty(config: &SceneConfig) -> Self {
        Self {
            camera: Camera::looking_at_origin(
                config.camera_distance,
                config.fov_degrees,
                config.znear,
                config.zfar,
            ),
            lighting: config.lighting,
            material: config.material,
            particles: None,
        }
    }

    /// Full scene: camera, lights and the scattered particle group.
    pub fn build<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let mut scene = Self::empty(config);
        scene.populate(config, rng);
        log::info!(
            "[scene] particles={} radius={:.1} camera_z={:.1}",
            config.particle_count,
            config.sphere_radius,
            config.camera_distance
        );
        scene
    }

    pub fn populate<R: Rng + ?Sized>(&mut self, config: &SceneConfig, rng: &mut R) {
        self.particles = Some(ParticleField::scatter(
            rng,
            config.particle_count,
            config.sphere_radius,
        ));
    }

    /// Per-frame update. Returns `false` when there is no particle group yet,
    /// in which case nothing is touched.
    pub fn step(&mut self, spectrum: &Spectrum) -> bool {
        match self.particles.as_mut() {
            Some(field) => {
                field.update(spectrum);
                true
            }
            None => false,
        }
    }
}
