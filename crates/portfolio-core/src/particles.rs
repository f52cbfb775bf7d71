use crate::canvas::{Canvas2d, Rgba};
use crate::config::{ConfigError, FieldConfig};
use crate::constants::*;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// One point-mass of the background animation.
///
/// Plain data; the owning [`ParticleField`] mutates it by index for the
/// lifetime of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    /// Draw a fresh particle inside `surface`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, surface: Surface) -> Self {
        let mut p = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: PARTICLE_MIN_SIZE,
            opacity: PARTICLE_MIN_OPACITY,
        };
        p.reset(rng, surface);
        p
    }

    /// Re-randomize every attribute in place.
    ///
    /// Position is uniform over `[0, width) x [0, height)`, size over
    /// `[0.5, 2.5)`, each velocity axis over `[-0.2, 0.2)` and opacity over
    /// `[0.1, 0.6)`.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: Surface) {
        self.position = Vec2::new(
            rng.gen::<f32>() * surface.width_f32(),
            rng.gen::<f32>() * surface.height_f32(),
        );
        self.size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_MIN_SIZE;
        self.velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
        );
        self.opacity = rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_MIN_OPACITY;
    }

    /// Advance one step and reflect off the edges of `surface`.
    ///
    /// The velocity on an axis inverts when the new coordinate lies outside
    /// `[0, dimension]`. The position itself is never clamped, so a particle may
    /// sit up to one step outside the surface before it heads back in.
    pub fn update(&mut self, surface: Surface) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > surface.width_f32() {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > surface.height_f32() {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw<C: Canvas2d + ?Sized>(&self, canvas: &mut C, rgb: [u8; 3]) {
        canvas.fill_circle(self.position, self.size, Rgba::from_rgb(rgb, self.opacity));
    }
}

/// Linear falloff used by both the particle mesh and the pointer links:
/// `max_opacity` at distance 0, exactly 0 at `threshold`.
#[inline]
pub fn link_opacity(dist: f32, threshold: f32, max_opacity: f32) -> f32 {
    max_opacity * (1.0 - dist / threshold)
}

/// Population for a surface: `min(cap, floor(area / area_per_particle))`.
#[inline]
pub fn particle_count_for(surface: Surface, config: &FieldConfig) -> usize {
    let by_area = surface.area() / config.area_per_particle.max(1);
    (by_area.min(config.max_particles as u64)) as usize
}

/// Fixed-size particle population plus the proximity mesh renderer.
///
/// The population is sized once at construction and never grows or shrinks;
/// resizing the surface only changes the bounds used by later updates.
pub struct ParticleField {
    particles: Vec<Particle>,
    surface: Surface,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    /// Validate `config` and populate the field from `seed`.
    pub fn new(surface: Surface, config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::populate(surface, config, seed))
    }

    /// Field with the stock configuration.
    pub fn with_defaults(surface: Surface, seed: u64) -> Self {
        Self::populate(surface, FieldConfig::default(), seed)
    }

    /// Field over an explicit particle set, mostly useful for scripted scenes.
    pub fn with_particles(
        surface: Surface,
        config: FieldConfig,
        particles: Vec<Particle>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if particles.len() > PARTICLE_HARD_CAP {
            return Err(ConfigError::TooManyParticles {
                requested: particles.len(),
                cap: PARTICLE_HARD_CAP,
            });
        }
        Ok(Self {
            particles,
            surface,
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn populate(surface: Surface, config: FieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = particle_count_for(surface, &config);
        let particles = (0..count)
            .map(|_| Particle::random(&mut rng, surface))
            .collect::<Vec<_>>();
        log::debug!(
            "[particles] {} particles for {}x{} surface",
            particles.len(),
            surface.width,
            surface.height
        );
        Self {
            particles,
            surface,
            config,
            rng,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Adopt new surface bounds. Existing positions are left where they are.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Re-randomize one particle in place within the current bounds.
    pub fn reset_particle(&mut self, index: usize) {
        let surface = self.surface;
        if let Some(p) = self.particles.get_mut(index) {
            p.reset(&mut self.rng, surface);
        }
    }

    /// Advance every particle without drawing anything.
    pub fn update(&mut self) {
        let surface = self.surface;
        for p in &mut self.particles {
            p.update(surface);
        }
    }

    /// One animation frame: update and draw each particle in index order,
    /// then render the mesh and pointer links.
    pub fn step<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C, pointer: Option<Vec2>) {
        let surface = self.surface;
        let rgb = self.config.particle_rgb;
        for p in &mut self.particles {
            p.update(surface);
            p.draw(canvas, rgb);
        }
        self.connect(canvas, pointer);
    }

    /// Draw a line for every pair closer than the link distance, and from every
    /// particle to the pointer when it is within the pointer distance.
    ///
    /// Pairs are visited once each (`a < b`), so the pass costs `n(n-1)/2`
    /// distance checks; `n` is capped by the configuration.
    pub fn connect<C: Canvas2d + ?Sized>(&self, canvas: &mut C, pointer: Option<Vec2>) {
        let cfg = &self.config;
        let n = self.particles.len();
        for a in 0..n {
            let pa = self.particles[a].position;
            for b in (a + 1)..n {
                let pb = self.particles[b].position;
                let dist = pa.distance(pb);
                if dist < cfg.link_distance {
                    let alpha = link_opacity(dist, cfg.link_distance, cfg.link_max_opacity);
                    canvas.stroke_line(
                        pa,
                        pb,
                        cfg.link_line_width,
                        Rgba::from_rgb(cfg.particle_rgb, alpha),
                    );
                }
            }
            if let Some(m) = pointer {
                let dist = pa.distance(m);
                if dist < cfg.pointer_link_distance {
                    let alpha =
                        link_opacity(dist, cfg.pointer_link_distance, cfg.pointer_link_max_opacity);
                    canvas.stroke_line(
                        pa,
                        m,
                        cfg.pointer_line_width,
                        Rgba::from_rgb(cfg.pointer_rgb, alpha),
                    );
                }
            }
        }
    }
}
