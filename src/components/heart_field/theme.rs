//! Visual theming and tuning for the heart field.
//!
//! Every number that shapes the look and feel of the animation lives here:
//! colors, particle sizing, spring coefficients, click burst strength, and
//! sprite trajectories. They are presentation parameters, not contracts.

use super::rng::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// A band of hues at fixed saturation and lightness, sampled per particle.
#[derive(Clone, Debug)]
pub struct HueBand {
	/// Lowest hue in degrees.
	pub hue_min: f64,
	/// Width of the band in degrees.
	pub hue_span: f64,
	/// Saturation percentage.
	pub saturation: f64,
	/// Lightness percentage.
	pub lightness: f64,
}

impl HueBand {
	pub fn sample(&self, rng: &mut Rng) -> String {
		let hue = self.hue_min + rng.next_f64() * self.hue_span;
		format!("hsl({hue:.1}, {}%, {}%)", self.saturation, self.lightness)
	}
}

/// Ambient radial glow painted behind the particles.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Color at the centre of the viewport.
	pub inner: Color,
	/// Color at the outer radius.
	pub outer: Color,
	/// Radius of the inner circle in CSS pixels.
	pub inner_radius: f64,
	/// The outer radius is `max(width, height) / reach_divisor`.
	pub reach_divisor: f64,
}

/// Particle creation parameters.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Smallest initial radius.
	pub size_min: f64,
	/// Initial radius is drawn from `[size_min, size_min + size_span)`.
	pub size_span: f64,
	/// Radius never decays below this.
	pub size_floor: f64,
	/// Full width of the random offset added to each target, per axis.
	pub target_jitter: f64,
	/// Fill alpha.
	pub alpha: f64,
	pub hue: HueBand,
}

/// Spring-toward-target integration coefficients, applied once per frame.
#[derive(Clone, Debug)]
pub struct PhysicsStyle {
	/// Fraction of the offset to the target added to velocity.
	pub spring: f64,
	/// Velocity multiplier after acceleration.
	pub drag: f64,
	/// Radius multiplier.
	pub shrink: f64,
}

/// What a single click does to the field.
#[derive(Clone, Debug)]
pub struct BurstStyle {
	/// Particles picked (with replacement) to receive an impulse.
	pub impulses: usize,
	/// Scale of the outward push away from the click point.
	pub repulsion: f64,
	/// Full width of the random velocity kick, per axis.
	pub jitter: f64,
	/// Sprites spawned per click.
	pub sprites: usize,
	/// Full width of the spawn scatter around the click, per axis.
	pub spread: f64,
}

/// Heart glyph sprite look and trajectory.
#[derive(Clone, Debug)]
pub struct SpriteStyle {
	pub glyph: &'static str,
	/// Font size in CSS pixels; also used to centre the glyph on its spawn point.
	pub font_px: f64,
	pub color: Color,
	/// Full width of the horizontal velocity range.
	pub drift: f64,
	/// Minimum upward speed.
	pub lift_min: f64,
	/// Upward speed is drawn from `[lift_min, lift_min + lift_span)`.
	pub lift_span: f64,
	/// Quadratic vertical term per step².
	pub gravity: f64,
	/// Scale lost per step.
	pub shrink: f64,
	/// Opacity lost per step.
	pub fade: f64,
	/// Steps before the sprite is removed.
	pub lifetime: u32,
}

/// Complete theme for the heart field.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub glow: GlowStyle,
	pub particles: ParticleStyle,
	pub physics: PhysicsStyle,
	pub burst: BurstStyle,
	pub sprite: SpriteStyle,
}

impl Theme {
	/// Pink heart on a dark night background.
	pub fn rose() -> Self {
		Self {
			name: "rose",
			glow: GlowStyle {
				inner: Color::rgba(255, 150, 180, 0.06),
				outer: Color::rgba(15, 11, 26, 0.0),
				inner_radius: 10.0,
				reach_divisor: 1.6,
			},
			particles: ParticleStyle {
				size_min: 0.6,
				size_span: 1.6,
				size_floor: 0.4,
				target_jitter: 2.0,
				alpha: 0.95,
				hue: HueBand {
					hue_min: 330.0,
					hue_span: 20.0,
					saturation: 80.0,
					lightness: 65.0,
				},
			},
			physics: PhysicsStyle {
				spring: 0.02,
				drag: 0.92,
				shrink: 0.997,
			},
			burst: BurstStyle {
				impulses: 80,
				repulsion: 0.02,
				jitter: 4.0,
				sprites: 18,
				spread: 40.0,
			},
			sprite: SpriteStyle {
				glyph: "❤",
				font_px: 20.0,
				color: Color::rgb(255, 110, 150),
				drift: 6.0,
				lift_min: 2.0,
				lift_span: 6.0,
				gravity: 0.02,
				shrink: 0.02,
				fade: 0.03,
				lifetime: 60,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::rose()
	}
}
