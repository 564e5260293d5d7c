//! A single drifting, fading particle.

use std::f64::consts::PI;

use rand::Rng;

use super::color::Color;
use super::surface::DrawSurface;

/// One animated circle: fixed radius, color, and velocity; decaying opacity.
///
/// Radius, color, and velocity never change after construction. Opacity
/// starts at 1.0 and drops by [`Particle::OPACITY_DECAY`] per update with no
/// lower clamp, so it may end slightly negative on the particle's last frame.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
}

impl Particle {
	/// Opacity lost per update step.
	pub const OPACITY_DECAY: f64 = 0.01;

	/// Create a particle at the given position with a velocity whose
	/// components are each sampled uniformly from [-1, 1).
	pub fn new(x: f64, y: f64, radius: f64, color: Color) -> Particle {
		let mut rng = rand::thread_rng();
		Particle {
			x,
			y,
			radius,
			color,
			vx: rng.r#gen::<f64>() * 2.0 - 1.0,
			vy: rng.r#gen::<f64>() * 2.0 - 1.0,
			opacity: 1.0,
		}
	}

	/// Advance one step: translate by the velocity, decay the opacity, and
	/// draw the result. Drawing happens here as well as in the system's
	/// dedicated draw pass, so a live particle is painted twice per frame.
	pub fn update(&mut self, surface: &impl DrawSurface) {
		self.x += self.vx;
		self.y += self.vy;
		self.opacity -= Self::OPACITY_DECAY;

		self.draw(surface);
	}

	/// Paint a filled circle at the current position and opacity.
	pub fn draw(&self, surface: &impl DrawSurface) {
		surface.begin_path();
		surface.arc(self.x, self.y, self.radius, 0.0, PI * 2.0);
		surface.set_fill_style(&self.color.to_css_rgba(self.opacity));
		surface.fill();
		surface.close_path();
	}
}
