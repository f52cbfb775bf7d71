use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_particles {requested} exceeds the hard cap of {cap}")]
    TooManyParticles { requested: usize, cap: usize },
    #[error("area_per_particle must be greater than zero")]
    ZeroArea,
    #[error("{name} must be a positive finite distance, got {value}")]
    InvalidDistance { name: &'static str, value: f32 },
    #[error("{name} must be within [0, 1], got {value}")]
    OpacityOutOfRange { name: &'static str, value: f32 },
}

/// Tuning for a [`crate::ParticleField`].
///
/// `Default` reproduces the stock page look: at most 80 particles, one per
/// 15 000 px², a 150 px mesh at 0.06 peak opacity and 200 px pointer links at
/// 0.12 peak opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub area_per_particle: u64,
    pub link_distance: f32,
    pub link_max_opacity: f32,
    pub link_line_width: f32,
    pub pointer_link_distance: f32,
    pub pointer_link_max_opacity: f32,
    pub pointer_line_width: f32,
    pub particle_rgb: [u8; 3],
    pub pointer_rgb: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
            link_line_width: LINK_LINE_WIDTH,
            pointer_link_distance: POINTER_LINK_DISTANCE,
            pointer_link_max_opacity: POINTER_LINK_MAX_OPACITY,
            pointer_line_width: POINTER_LINE_WIDTH,
            particle_rgb: ACCENT_RGB,
            pointer_rgb: POINTER_RGB,
        }
    }
}

impl FieldConfig {
    /// Reject configurations that would make the pairwise pass unbounded or
    /// produce meaningless falloff curves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles > PARTICLE_HARD_CAP {
            return Err(ConfigError::TooManyParticles {
                requested: self.max_particles,
                cap: PARTICLE_HARD_CAP,
            });
        }
        if self.area_per_particle == 0 {
            return Err(ConfigError::ZeroArea);
        }
        check_distance("link_distance", self.link_distance)?;
        check_distance("pointer_link_distance", self.pointer_link_distance)?;
        check_opacity("link_max_opacity", self.link_max_opacity)?;
        check_opacity("pointer_link_max_opacity", self.pointer_link_max_opacity)?;
        Ok(())
    }

    /// Builder-style override of the population cap.
    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }
}

fn check_distance(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistance { name, value })
    }
}

fn check_opacity(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OpacityOutOfRange { name, value })
    }
}
