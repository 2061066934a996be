// Host-side tests for constants and their relationships.

use homepage_core::config::{CarouselConfig, ParticleConfig, WaveConfig};
use homepage_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn wave_constants_keep_the_strip_inside_its_canvas() {
    assert!(WAVE_SEGMENT_WIDTH > 0.0);
    assert!(WAVE_PHASE_SPEED > 0.0);
    // crest and trough stay within the canvas around the h/2 baseline
    assert!(WAVE_AMPLITUDE < WAVE_HEIGHT / 2.0);
    assert!(WAVE_GRADIENT_TOP.starts_with('#') && WAVE_GRADIENT_BOTTOM.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    assert!(PARTICLE_AREA_PER_PARTICLE > 0.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN > 0.0);
    assert!(PARTICLE_SPEED_MAX > 0.0);
    // alpha in [min, min + span) stays a valid opacity
    assert!(PARTICLE_ALPHA_MIN > 0.0);
    assert!(PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN <= 1.0);
    assert!(PARTICLE_LINK_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_growth_outlasts_one_frame_of_decay() {
    assert!(POINTER_RADIUS > 0.0 && POINTER_FORCE > 0.0);
    assert!(PARTICLE_RADIUS_DECAY > 0.0);
    assert!(POINTER_RADIUS_GROWTH > PARTICLE_RADIUS_DECAY);
    // decay returns a grown particle to base in a bounded number of frames
    let frames = (POINTER_RADIUS_GROWTH / PARTICLE_RADIUS_DECAY).ceil();
    assert!(frames <= 60.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn autoplay_interval_exceeds_transition() {
    assert!(CAROUSEL_TRANSITION_MS > 0);
    assert!(CAROUSEL_AUTOPLAY_MS > CAROUSEL_TRANSITION_MS);
    assert!(!CAROUSEL_EASING.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_order_is_top_then_main() {
    assert!(REVEAL_TOP_DELAY_MS < REVEAL_MAIN_DELAY_MS);
    assert!(CARD_STAGGER_MS > 0);
    assert!(NAV_SCROLL_OFFSET >= 0.0);
    assert!(PARALLAX_DEFAULT_SPEED > 0.0 && PARALLAX_DEFAULT_SPEED < 1.0);
}

#[test]
fn configs_default_to_constants() {
    let wave = WaveConfig::default();
    assert_eq!(wave.segment_width, WAVE_SEGMENT_WIDTH);
    assert_eq!(wave.height, WAVE_HEIGHT);

    let particles = ParticleConfig::default();
    assert_eq!(particles.rgb, PARTICLE_RGB);
    assert_eq!(particles.link_distance, PARTICLE_LINK_DISTANCE);
    assert_eq!(particles.radius_growth, POINTER_RADIUS_GROWTH);

    let carousel = CarouselConfig::default();
    assert_eq!(carousel.transition_ms, CAROUSEL_TRANSITION_MS);
    assert_eq!(carousel.autoplay_ms, CAROUSEL_AUTOPLAY_MS);
}
