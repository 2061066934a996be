//! Rolling wave strip drawn along the top of the page.
//!
//! The strip is a row of sample points spaced `segment_width` apart. Every
//! point bobs on its own sine phase; the outline is a chain of quadratic
//! curves through the midpoints of neighbouring samples, closed along the
//! bottom edge.

use crate::config::WaveConfig;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct WavePoint {
    pub x: f32,
    pub y: f32,
    pub origin_y: f32,
    pub speed: f32,
    pub phase: f32,
}

/// Outline commands, mirroring the 2D canvas path API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

/// Number of samples needed to cover `width` plus one trailing point.
#[inline]
pub fn point_count(width: f32, segment_width: f32) -> usize {
    (width.max(0.0) / segment_width).ceil() as usize + 1
}

pub struct WaveField {
    pub config: WaveConfig,
    pub width: f32,
    pub height: f32,
    pub points: Vec<WavePoint>,
}

impl WaveField {
    pub fn new(config: WaveConfig) -> Self {
        let height = config.height;
        Self {
            config,
            width: 0.0,
            height,
            points: Vec::new(),
        }
    }

    /// Adopt a new viewport width and rebuild every sample from scratch.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = self.config.height;
        self.reset(rng);
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = point_count(self.width, self.config.segment_width);
        let baseline = self.height / 2.0;
        self.points = (0..count)
            .map(|i| WavePoint {
                x: i as f32 * self.config.segment_width,
                y: baseline,
                origin_y: baseline,
                speed: self.config.phase_speed,
                phase: rng.gen::<f32>() * self.config.phase_span,
            })
            .collect();
        log::debug!("[wave] reset width={} points={}", self.width, count);
    }

    pub fn update(&mut self) {
        let amplitude = self.config.amplitude;
        for p in &mut self.points {
            p.phase += p.speed;
            p.y = p.origin_y + p.phase.sin() * amplitude;
        }
    }

    /// Closed outline of the filled wave body.
    pub fn silhouette(&self) -> Vec<PathCmd> {
        let bottom_left = Vec2::new(0.0, self.height);
        let mut path = Vec::with_capacity(self.points.len() + 3);
        path.push(PathCmd::MoveTo(bottom_left));
        for (i, p) in self.points.iter().enumerate() {
            let here = Vec2::new(p.x, p.y);
            match self.points.get(i + 1) {
                Some(next) => {
                    let mid = (here + Vec2::new(next.x, next.y)) * 0.5;
                    path.push(PathCmd::QuadTo { ctrl: here, to: mid });
                }
                None => path.push(PathCmd::LineTo(here)),
            }
        }
        path.push(PathCmd::LineTo(Vec2::new(self.width, self.height)));
        path.push(PathCmd::LineTo(bottom_left));
        path
    }
}
