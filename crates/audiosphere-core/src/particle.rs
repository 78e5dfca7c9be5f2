//! Audio-reactive particles and the group that owns them.

use crate::color::Rgb;
use crate::constants::{
    BASE_LIGHTNESS, COLOR_SATURATION, EMISSIVE_LIGHTNESS, GROUP_SPIN, ROTATION_GAIN, SCALE_GAIN,
};
use crate::spectrum::Spectrum;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Result of applying one amplitude to one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Rgb,
    pub emissive: Rgb,
}

/// Map an amplitude in \[0, 1\] onto a particle.
///
/// Position scales outward from rest, x/y rotation accumulate without
/// wrapping and the hue follows the amplitude.
pub fn transform_particle(rest: Vec3, amplitude: f32, rotation: Vec3) -> ParticleTransform {
    let amplitude = amplitude.clamp(0.0, 1.0);
    let step = amplitude * ROTATION_GAIN;
    ParticleTransform {
        position: rest * (1.0 + amplitude * SCALE_GAIN),
        rotation: Vec3::new(rotation.x + step, rotation.y + step, rotation.z),
        color: Rgb::from_hsl(amplitude, COLOR_SATURATION, BASE_LIGHTNESS),
        emissive: Rgb::from_hsl(amplitude, COLOR_SATURATION, EMISSIVE_LIGHTNESS),
    }
}

/// Uniformly sampled spherical coordinates (θ in \[0, 2π), φ in \[0, π)) on a
/// sphere of the given radius, converted to Cartesian.
pub fn sample_sphere_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..PI);
    spherical_to_cartesian(radius, theta, phi)
}

#[inline]
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

#[derive(Clone, Debug)]
pub struct Particle {
    rest_position: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Rgb,
    pub emissive: Rgb,
}

impl Particle {
    /// New particle sitting at its rest position with the zero-amplitude palette.
    pub fn new(rest_position: Vec3, rotation: Vec3) -> Self {
        let idle = transform_particle(rest_position, 0.0, rotation);
        Self {
            rest_position,
            position: rest_position,
            rotation,
            color: idle.color,
            emissive: idle.emissive,
        }
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    pub fn apply(&mut self, amplitude: f32) {
        let t = transform_particle(self.rest_position, amplitude, self.rotation);
        self.position = t.position;
        self.rotation = t.rotation;
        self.color = t.color;
        self.emissive = t.emissive;
    }
}

/// Fixed-size set of particles plus the rotation of the group as a whole.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    pub group_rotation: Vec3,
}

impl ParticleField {
    /// Scatter `count` particles over a sphere with random initial rotations.
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Self {
        let particles = (0..count)
            .map(|_| {
                let rest = sample_sphere_point(rng, radius);
                let rotation = Vec3::new(
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                );
                Particle::new(rest, rotation)
            })
            .collect();
        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            group_rotation: Vec3::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Apply the current spectrum to every particle, then spin the group.
    pub fn update(&mut self, spectrum: &Spectrum) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.apply(spectrum.amplitude(i));
        }
        self.spin();
    }

    /// Constant audio-independent spin of the whole group.
    pub fn spin(&mut self) {
        self.group_rotation.x += GROUP_SPIN[0];
        self.group_rotation.y += GROUP_SPIN[1];
    }
}
