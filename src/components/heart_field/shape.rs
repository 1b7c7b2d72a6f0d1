//! Heart curve and viewport mapping.
//!
//! The curve lives in a fixed normalized space roughly spanning
//! `[-16, 16] x [-12, 17]` with +y pointing down (canvas convention), so the
//! lobes sit at the top and the tip at the bottom. [`ShapeMapping`] scales
//! it uniformly and centres it in the viewport.

/// Largest absolute coordinate the normalized curve reaches on either axis.
pub const HEART_EXTENT: f64 = 17.0;

/// Viewport breakpoints (on the smaller side, CSS pixels) and the particle
/// count used below each of them. Anything at or above the last breakpoint
/// gets [`MAX_PARTICLES`].
const COUNT_BANDS: [(f64, usize); 3] = [(420.0, 200), (768.0, 420), (1200.0, 700)];
const MAX_PARTICLES: usize = 900;

/// Normalized heart curve point for parameter `t` (radians).
pub fn heart_point(t: f64) -> (f64, f64) {
	let x = 16.0 * t.sin().powi(3);
	let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
	(x, y)
}

/// Particle count for a viewport, as a step function of its smaller side.
pub fn particle_count_for(width: f64, height: f64) -> usize {
	let min_side = width.min(height);
	COUNT_BANDS
		.iter()
		.find(|(limit, _)| min_side < *limit)
		.map(|&(_, count)| count)
		.unwrap_or(MAX_PARTICLES)
}

/// Uniform scale plus centre offset from curve space into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMapping {
	pub scale: f64,
	pub center_x: f64,
	pub center_y: f64,
}

impl ShapeMapping {
	pub fn for_viewport(width: f64, height: f64) -> Self {
		Self {
			scale: width.min(height) / 40.0,
			center_x: width / 2.0,
			center_y: height / 2.0,
		}
	}

	pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
		(self.center_x + x * self.scale, self.center_y + y * self.scale)
	}

	/// Canvas point on the heart outline for parameter `t`.
	pub fn point_at(&self, t: f64) -> (f64, f64) {
		let (x, y) = heart_point(t);
		self.map(x, y)
	}

	/// Bounding box `(min_x, min_y, max_x, max_y)` of the mapped curve,
	/// widened by `margin` on every side.
	pub fn bounds(&self, margin: f64) -> (f64, f64, f64, f64) {
		let reach = HEART_EXTENT * self.scale + margin;
		(
			self.center_x - reach,
			self.center_y - reach,
			self.center_x + reach,
			self.center_y + reach,
		)
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;

	#[test]
	fn particle_count_band_boundaries() {
		let cases = [
			(419.0, 200),
			(420.0, 420),
			(767.0, 420),
			(768.0, 700),
			(1199.0, 700),
			(1200.0, 900),
		];
		for (side, expected) in cases {
			assert_eq!(particle_count_for(side, 4000.0), expected, "width {side}");
			assert_eq!(particle_count_for(4000.0, side), expected, "height {side}");
		}
	}

	#[test]
	fn particle_count_uses_smaller_side() {
		assert_eq!(particle_count_for(1920.0, 400.0), 200);
		assert_eq!(particle_count_for(300.0, 1080.0), 200);
		assert_eq!(particle_count_for(1920.0, 1080.0), 700);
		assert_eq!(particle_count_for(0.0, 0.0), 200);
	}

	#[test]
	fn heart_is_mirror_symmetric_in_parameter() {
		for i in 0..64 {
			let t = i as f64 * PI / 32.0;
			let (x_pos, y_pos) = heart_point(t);
			let (x_neg, y_neg) = heart_point(-t);
			assert!((x_pos + x_neg).abs() < 1e-9, "x should be odd at t={t}");
			assert!((y_pos - y_neg).abs() < 1e-9, "y should be even at t={t}");
		}
	}

	#[test]
	fn heart_stays_within_extent() {
		for i in 0..720 {
			let (x, y) = heart_point(i as f64 * PI / 360.0);
			assert!(x.abs() <= HEART_EXTENT + 1e-9);
			assert!(y.abs() <= HEART_EXTENT + 1e-9);
		}
	}

	#[test]
	fn tip_points_down() {
		// t = π is the bottom tip, t = 0 the notch between the lobes.
		let (_, tip) = heart_point(PI);
		let (_, notch) = heart_point(0.0);
		assert!((tip - 17.0).abs() < 1e-9);
		assert!(tip > notch);
	}

	#[test]
	fn mapping_centres_and_scales() {
		let mapping = ShapeMapping::for_viewport(800.0, 600.0);
		assert_eq!(mapping.scale, 15.0);
		assert_eq!(mapping.map(0.0, 0.0), (400.0, 300.0));
		assert_eq!(mapping.map(2.0, -1.0), (430.0, 285.0));

		let (min_x, min_y, max_x, max_y) = mapping.bounds(1.0);
		assert_eq!((min_x, max_x), (400.0 - 256.0, 400.0 + 256.0));
		assert_eq!((min_y, max_y), (300.0 - 256.0, 300.0 + 256.0));
	}
}
