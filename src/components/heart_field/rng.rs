//! Seedable pseudo-random number generator (xorshift64).

use std::f64::consts::TAU;

/// Small xorshift64 generator. Seeded from browser entropy at runtime and
/// from fixed seeds in tests.
#[derive(Clone, Debug)]
pub struct Rng {
	state: u64,
}

impl Rng {
	/// Creates a generator; a zero seed is remapped since xorshift would stay at zero.
	pub fn new(seed: u64) -> Self {
		Self {
			state: if seed == 0 { 1 } else { seed },
		}
	}

	/// Seeds from `Math.random()` and the wall clock.
	pub fn from_browser() -> Self {
		let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
		let clock = js_sys::Date::now() as u64;
		Self::new((noise << 32) ^ clock)
	}

	fn next_u64(&mut self) -> u64 {
		let mut x = self.state;
		x ^= x << 13;
		x ^= x >> 7;
		x ^= x << 17;
		self.state = x;
		x
	}

	/// Uniform value in [0, 1).
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform value in [min, max).
	pub fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// Uniform value in [-half_width, half_width).
	pub fn jitter(&mut self, half_width: f64) -> f64 {
		self.range(-half_width, half_width)
	}

	/// Uniform angle in [0, 2π).
	pub fn angle(&mut self) -> f64 {
		self.next_f64() * TAU
	}

	/// Uniform index in [0, len). `len` must be non-zero.
	pub fn index(&mut self, len: usize) -> usize {
		(self.next_u64() % len as u64) as usize
	}
}
