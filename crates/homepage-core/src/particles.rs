//! Full-page particle backdrop with pointer repulsion and proximity links.

use crate::config::ParticleConfig;
use crate::input::PointerState;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// CSS fill color for this particle.
    pub fn color(&self, rgb: [u8; 3]) -> String {
        rgba(rgb, self.alpha)
    }
}

/// A line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

/// Particle count for a surface: one per `area_per_particle` square pixels.
#[inline]
pub fn particle_count(width: f32, height: f32, area_per_particle: f32) -> usize {
    ((width.max(0.0) * height.max(0.0)) / area_per_particle).floor() as usize
}

/// Opacity of a link between two points `distance` apart, or `None` when
/// they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| 1.0 - distance / threshold)
}

pub struct ParticleField {
    pub config: ParticleConfig,
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
        }
    }

    /// Adopt new surface dimensions and respawn every particle.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reset(rng);
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cfg = &self.config;
        let count = particle_count(self.width, self.height, cfg.area_per_particle);
        let (w, h) = (self.width, self.height);
        self.particles = (0..count)
            .map(|_| {
                let radius = cfg.radius_min + rng.gen::<f32>() * cfg.radius_span;
                Particle {
                    position: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                    velocity: Vec2::new(
                        (rng.gen::<f32>() * 2.0 - 1.0) * cfg.speed_max,
                        (rng.gen::<f32>() * 2.0 - 1.0) * cfg.speed_max,
                    ),
                    radius,
                    base_radius: radius,
                    alpha: cfg.alpha_min + rng.gen::<f32>() * cfg.alpha_span,
                }
            })
            .collect();
        log::debug!("[particles] reset {}x{} count={}", w, h, count);
    }

    /// Advance one frame. Walls reflect velocity without position correction.
    /// While the pointer is over the page, particles inside its radius are
    /// pushed away and enlarged and the rest shrink back toward base size.
    pub fn update(&mut self, pointer: &PointerState) {
        let cfg = &self.config;
        for p in &mut self.particles {
            if p.position.x < 0.0 || p.position.x > self.width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.height {
                p.velocity.y = -p.velocity.y;
            }

            // without a pointer the radius is left as it is
            if let Some(at) = pointer.position {
                let delta = at - p.position;
                let distance = delta.length();
                if distance < pointer.radius {
                    // direction is undefined when exactly on the pointer
                    if distance > 0.0 {
                        let force = (pointer.radius - distance) / pointer.radius;
                        p.position -= delta / distance * force * cfg.pointer_force;
                    }
                    p.radius = p.base_radius + cfg.radius_growth;
                } else {
                    p.radius = (p.radius - cfg.radius_decay).max(p.base_radius);
                }
            }

            p.position += p.velocity;
        }
    }

    /// Visit every linked pair once (`a < b`). Quadratic in particle count.
    pub fn for_each_link(&self, mut visit: impl FnMut(Link)) {
        let threshold = self.config.link_distance;
        let threshold_sq = threshold * threshold;
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let dist_sq = pa.position.distance_squared(pb.position);
                if dist_sq >= threshold_sq {
                    continue;
                }
                if let Some(alpha) = link_alpha(dist_sq.sqrt(), threshold) {
                    visit(Link {
                        a,
                        b: a + 1 + offset,
                        alpha,
                    });
                }
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        self.for_each_link(|l| out.push(l));
        out
    }
}
