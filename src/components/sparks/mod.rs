//! Click-to-spawn particle animation on an HTML canvas.
//!
//! Renders a continuously animating canvas where every click spawns a
//! randomly-colored circle at the canvas center. Each particle drifts at a
//! constant velocity while fading out, and is dropped from the simulation
//! once fully transparent:
//! - One update-and-prune pass per animation frame
//! - Uniformly sampled radius, color, and velocity per particle
//! - No cap on the particle count; sustained clicking keeps growing it
//!
//! # Example
//!
//! ```ignore
//! use click_sparks::SparkCanvas;
//!
//! view! { <SparkCanvas width=800.0 height=600.0 /> }
//! ```

mod color;
mod component;
mod particle;
mod surface;
mod system;

pub use color::Color;
pub use component::SparkCanvas;
pub use particle::Particle;
pub use surface::DrawSurface;
pub use system::ParticleSystem;
