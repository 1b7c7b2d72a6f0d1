//! The animator context: every particle plus the viewport it was built for.

use log::info;

use super::particles::Particle;
use super::rng::Rng;
use super::shape::{ShapeMapping, particle_count_for};
use super::sprites::Sprite;
use super::theme::Theme;

/// Owns the particle set, the viewport size, the theme, and the random
/// source. Created once per page session and mutated by the frame loop,
/// resize handling, and clicks.
pub struct HeartField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pub theme: Theme,
	particle_count: usize,
	generation: u64,
	rng: Rng,
}

impl HeartField {
	/// Builds a field sized for the viewport and fills it.
	pub fn new(width: f64, height: f64, theme: Theme, rng: Rng) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
			theme,
			particle_count: particle_count_for(width, height),
			generation: 0,
			rng,
		};
		field.reinitialize();
		field
	}

	pub fn particle_count(&self) -> usize {
		self.particle_count
	}

	/// How many times the particle set has been rebuilt, including the first build.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn mapping(&self) -> ShapeMapping {
		ShapeMapping::for_viewport(self.width, self.height)
	}

	/// Adopts a new viewport size, picks the particle count for it, and
	/// rebuilds every particle.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.particle_count = particle_count_for(width, height);
		self.reinitialize();
	}

	/// Discards all particles and scatters a fresh set aimed at the heart.
	pub fn reinitialize(&mut self) {
		let mapping = self.mapping();
		let (width, height) = (self.width, self.height);
		let style = &self.theme.particles;
		let rng = &mut self.rng;
		self.particles = (0..self.particle_count)
			.map(|_| Particle::spawn(rng, &mapping, style, width, height))
			.collect();
		self.generation += 1;
		info!(
			"heart-greeting: built {} {} particles for {:.0}x{:.0}",
			self.particles.len(),
			self.theme.name,
			width,
			height
		);
	}

	/// Advances every particle one frame.
	pub fn tick(&mut self) {
		let physics = &self.theme.physics;
		let floor = self.theme.particles.size_floor;
		for p in &mut self.particles {
			p.step(physics, floor);
		}
	}

	/// Click response. Pushes randomly chosen particles (with replacement)
	/// away from `local`, the click in canvas coordinates, and returns the
	/// sprites to spawn around `client`, the click in page coordinates.
	pub fn pointer_burst(&mut self, local: (f64, f64), client: (f64, f64)) -> Vec<Sprite> {
		let burst = &self.theme.burst;
		let half_jitter = burst.jitter / 2.0;
		if !self.particles.is_empty() {
			for _ in 0..burst.impulses {
				let idx = self.rng.index(self.particles.len());
				let p = &mut self.particles[idx];
				p.vx += (p.x - local.0) * burst.repulsion + self.rng.jitter(half_jitter);
				p.vy += (p.y - local.1) * burst.repulsion + self.rng.jitter(half_jitter);
			}
		}

		let half_spread = burst.spread / 2.0;
		(0..burst.sprites)
			.map(|_| {
				let x = client.0 + self.rng.jitter(half_spread);
				let y = client.1 + self.rng.jitter(half_spread);
				Sprite::launch(&mut self.rng, &self.theme.sprite, x, y)
			})
			.collect()
	}
}
