//! Owns the live particle collection and drives the per-frame passes.

use log::debug;
use rand::Rng;

use super::color::Color;
use super::particle::Particle;
use super::surface::DrawSurface;

/// Ordered collection of live particles over a fixed-size drawing surface.
///
/// Particles are kept in creation order and pruned as soon as their opacity
/// reaches zero. There is no cap: every click adds a particle, and the
/// collection grows without limit under sustained clicking.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSystem {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			particles: Vec::new(),
			width,
			height,
		}
	}

	/// Spawn one particle at the surface center with a uniformly sampled
	/// radius in [5, 25) and a uniformly sampled color.
	pub fn create_particle(&mut self) {
		let x = self.width / 2.0;
		let y = self.height / 2.0;

		let mut rng = rand::thread_rng();
		let radius = rng.r#gen::<f64>() * 20.0 + 5.0;
		let color = Color::sample(&mut rng);

		debug!(
			"click-sparks: spawned particle at ({}, {}), radius {:.1}, {} live",
			x,
			y,
			radius,
			self.particles.len() + 1
		);
		self.particles.push(Particle::new(x, y, radius, color));
	}

	/// Advance every particle one step (each draws itself as part of its
	/// update) and remove the ones that have faded out.
	///
	/// The scan runs in descending index order so removal never skips or
	/// revisits an element, and survivors keep their insertion order.
	pub fn update_particles(&mut self, surface: &impl DrawSurface) {
		for i in (0..self.particles.len()).rev() {
			self.particles[i].update(surface);

			if self.particles[i].opacity <= 0.0 {
				self.particles.remove(i);
			}
		}
	}

	/// Draw every live particle in collection order.
	///
	/// Together with the draw inside each particle's update this paints every
	/// live particle twice per frame, matching the observed frame sequence.
	pub fn draw_particles(&self, surface: &impl DrawSurface) {
		for particle in &self.particles {
			particle.draw(surface);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::RecordingSurface;
	use super::*;

	fn test_system() -> ParticleSystem {
		ParticleSystem::new(800.0, 600.0)
	}

	#[test]
	fn particles_always_spawn_at_the_center() {
		let mut system = test_system();
		for _ in 0..10 {
			system.create_particle();
		}
		for p in &system.particles {
			assert_eq!((p.x, p.y), (400.0, 300.0));
			assert_eq!(p.opacity, 1.0);
		}
	}

	#[test]
	fn spawned_radius_stays_in_range() {
		let mut system = test_system();
		for _ in 0..200 {
			system.create_particle();
		}
		for p in &system.particles {
			assert!((5.0..25.0).contains(&p.radius));
		}
	}

	#[test]
	fn one_update_advances_every_particle_exactly_once() {
		let surface = RecordingSurface::new();
		let mut system = test_system();
		for _ in 0..3 {
			system.create_particle();
		}

		system.update_particles(&surface);

		assert_eq!(system.particles.len(), 3);
		for p in &system.particles {
			assert!((p.opacity - 0.99).abs() < 1e-9);
			assert!((p.x - (400.0 + p.vx)).abs() < 1e-9);
			assert!((p.y - (300.0 + p.vy)).abs() < 1e-9);
		}
	}

	#[test]
	fn no_faded_particle_survives_an_update_pass() {
		let surface = RecordingSurface::new();
		let mut system = test_system();
		for _ in 0..5 {
			system.create_particle();
		}
		// Push two of them to the brink so the next pass prunes them.
		system.particles[1].opacity = 0.005;
		system.particles[3].opacity = 0.005;

		system.update_particles(&surface);

		assert_eq!(system.particles.len(), 3);
		for p in &system.particles {
			assert!(p.opacity > 0.0);
		}
	}

	#[test]
	fn survivors_keep_insertion_order_across_removal() {
		let surface = RecordingSurface::new();
		let mut system = test_system();
		for _ in 0..4 {
			system.create_particle();
		}
		// Tag by radius so order is observable after the middle one dies.
		for (i, p) in system.particles.iter_mut().enumerate() {
			p.radius = i as f64;
		}
		system.particles[1].opacity = 0.005;

		system.update_particles(&surface);

		let radii: Vec<f64> = system.particles.iter().map(|p| p.radius).collect();
		assert_eq!(radii, vec![0.0, 2.0, 3.0]);
	}

	#[test]
	fn a_particle_lives_exactly_one_hundred_updates() {
		let surface = RecordingSurface::new();
		let mut system = test_system();
		system.create_particle();

		for _ in 0..99 {
			system.update_particles(&surface);
		}
		assert_eq!(system.particles.len(), 1);

		system.update_particles(&surface);
		assert!(system.particles.is_empty());
	}

	#[test]
	fn each_live_particle_is_drawn_twice_per_frame() {
		let surface = RecordingSurface::new();
		let mut system = test_system();
		system.create_particle();

		// One frame: update pass (draws once) then the dedicated draw pass.
		system.update_particles(&surface);
		system.draw_particles(&surface);

		assert_eq!(surface.arc_count(), 2);
	}
}
