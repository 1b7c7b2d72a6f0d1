//! Point particles that spring toward a target on the heart outline.

use super::rng::Rng;
use super::shape::ShapeMapping;
use super::theme::{ParticleStyle, PhysicsStyle};

/// A single particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub tx: f64,
	pub ty: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	/// CSS color, fixed at creation.
	pub color: String,
	/// Reserved for fade-out; always 1.0 for now.
	pub life: f64,
}

impl Particle {
	/// Spawns a particle anywhere in the viewport, aimed at a random point
	/// of the mapped heart.
	pub fn spawn(
		rng: &mut Rng,
		mapping: &ShapeMapping,
		style: &ParticleStyle,
		width: f64,
		height: f64,
	) -> Self {
		let (tx, ty) = mapping.point_at(rng.angle());
		let half_jitter = style.target_jitter / 2.0;
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			tx: tx + rng.jitter(half_jitter),
			ty: ty + rng.jitter(half_jitter),
			vx: 0.0,
			vy: 0.0,
			size: rng.range(style.size_min, style.size_min + style.size_span),
			color: style.hue.sample(rng),
			life: 1.0,
		}
	}

	/// One explicit Euler step: spring toward the target, apply drag, move,
	/// and shrink down to `size_floor`.
	pub fn step(&mut self, physics: &PhysicsStyle, size_floor: f64) {
		self.vx += (self.tx - self.x) * physics.spring;
		self.vy += (self.ty - self.y) * physics.spring;
		self.vx *= physics.drag;
		self.vy *= physics.drag;
		self.x += self.vx;
		self.y += self.vy;
		self.size = (self.size * physics.shrink).max(size_floor);
	}

	pub fn distance_to_target(&self) -> f64 {
		((self.tx - self.x).powi(2) + (self.ty - self.y).powi(2)).sqrt()
	}

	#[cfg(test)]
	fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}
