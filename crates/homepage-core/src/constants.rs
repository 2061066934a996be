// Shared tuning constants for the homepage backdrops, carousel and navigation.

// Wave backdrop
pub const WAVE_SEGMENT_WIDTH: f32 = 20.0; // horizontal spacing between sample points
pub const WAVE_HEIGHT: f32 = 150.0; // fixed canvas height
pub const WAVE_AMPLITUDE: f32 = 30.0;
pub const WAVE_PHASE_SPEED: f32 = 0.05; // radians per frame
pub const WAVE_PHASE_SPAN: f32 = 100.0; // initial phase drawn from [0, span)
pub const WAVE_GRADIENT_TOP: &str = "#E8F4E0";
pub const WAVE_GRADIENT_BOTTOM: &str = "#CCE6C6";

// Particle backdrop
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 10_000.0;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0; // base radius in [min, min + span)
pub const PARTICLE_SPEED_MAX: f32 = 0.5; // each velocity axis in [-max, max)
pub const PARTICLE_RGB: [u8; 3] = [58, 157, 35];
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const PARTICLE_LINK_DISTANCE: f32 = 100.0;
pub const PARTICLE_LINK_WIDTH: f64 = 0.5;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 100.0;
pub const POINTER_FORCE: f32 = 5.0; // max displacement per frame at the pointer
pub const POINTER_RADIUS_GROWTH: f32 = 2.0; // radius bonus while repelled
pub const PARTICLE_RADIUS_DECAY: f32 = 0.1; // shrink per frame back toward base

// Carousel
pub const CAROUSEL_TRANSITION_MS: u32 = 300;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;
pub const CAROUSEL_EASING: &str = "ease-in-out";

// Navigation
pub const NAV_SCROLL_OFFSET: f64 = 100.0; // section counts as current this far before its top
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.3;

// Content reveal timings
pub const REVEAL_TOP_DELAY_MS: i32 = 100;
pub const REVEAL_MAIN_DELAY_MS: i32 = 300;
pub const CARD_STAGGER_MS: u32 = 100;
