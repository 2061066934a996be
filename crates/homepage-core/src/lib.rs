//! Platform-free core of the homepage: backdrop simulations, the carousel
//! state machine, navigation math and the content models with their markup.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod input;
pub mod markup;
pub mod nav;
pub mod particles;
pub mod sections;
pub mod wave;

pub use carousel::{Autoplay, Carousel, Nav, Phase, Snap, Step, Transform};
pub use config::{CarouselConfig, ParticleConfig, WaveConfig};
pub use error::{LoadError, LoadResult};
pub use input::PointerState;
pub use particles::{Link, Particle, ParticleField};
pub use sections::{Content, Outcome, Placeholder, Section};
pub use wave::{PathCmd, WaveField, WavePoint};
