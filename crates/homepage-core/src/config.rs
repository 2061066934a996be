//! Runtime parameter sets for the backdrops and the carousel.
//!
//! Defaults come from [`crate::constants`]; the browser front-end always uses
//! the defaults, tests build variations to probe edge cases.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub segment_width: f32,
    pub height: f32,
    pub amplitude: f32,
    pub phase_speed: f32,
    pub phase_span: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            segment_width: WAVE_SEGMENT_WIDTH,
            height: WAVE_HEIGHT,
            amplitude: WAVE_AMPLITUDE,
            phase_speed: WAVE_PHASE_SPEED,
            phase_span: WAVE_PHASE_SPAN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub area_per_particle: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub speed_max: f32,
    pub rgb: [u8; 3],
    pub alpha_min: f32,
    pub alpha_span: f32,
    pub link_distance: f32,
    pub pointer_force: f32,
    pub radius_growth: f32,
    pub radius_decay: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: PARTICLE_AREA_PER_PARTICLE,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            speed_max: PARTICLE_SPEED_MAX,
            rgb: PARTICLE_RGB,
            alpha_min: PARTICLE_ALPHA_MIN,
            alpha_span: PARTICLE_ALPHA_SPAN,
            link_distance: PARTICLE_LINK_DISTANCE,
            pointer_force: POINTER_FORCE,
            radius_growth: POINTER_RADIUS_GROWTH,
            radius_decay: PARTICLE_RADIUS_DECAY,
        }
    }
}

/// Carousel timing. `transition_ms` is the only duration source: the CSS
/// transition and the snap delay are both derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub transition_ms: u32,
    pub autoplay_ms: u32,
    pub easing: &'static str,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: CAROUSEL_TRANSITION_MS,
            autoplay_ms: CAROUSEL_AUTOPLAY_MS,
            easing: CAROUSEL_EASING,
        }
    }
}

impl CarouselConfig {
    /// Value for the slide strip's `transition` style while animating.
    pub fn transition_css(&self) -> String {
        format!("transform {}s {}", f64::from(self.transition_ms) / 1000.0, self.easing)
    }

    /// Delay before the post-animation snap fires.
    pub fn snap_delay_ms(&self) -> i32 {
        self.transition_ms as i32
    }
}
