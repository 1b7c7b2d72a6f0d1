//! Heart glyph sprites that burst out of a click and fade away.
//!
//! [`Sprite`] is the pure trajectory: a step counter plus the two random
//! velocities chosen at spawn. [`SpriteLayer`] owns the DOM elements and
//! advances every live sprite once per animation frame.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::rng::Rng;
use super::theme::SpriteStyle;

/// Pose of a sprite relative to its spawn point for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteFrame {
	pub dx: f64,
	pub dy: f64,
	pub scale: f64,
	pub opacity: f64,
}

impl SpriteFrame {
	pub fn transform_css(&self) -> String {
		format!(
			"translate({:.2}px, {:.2}px) scale({:.3})",
			self.dx, self.dy, self.scale
		)
	}
}

/// Trajectory state of one sprite.
#[derive(Clone, Debug)]
pub struct Sprite {
	/// Spawn point in client (page) coordinates.
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	step: u32,
}

impl Sprite {
	/// Spawns at `(x, y)` with a random sideways drift and an upward kick.
	pub fn launch(rng: &mut Rng, style: &SpriteStyle, x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			vx: rng.jitter(style.drift / 2.0),
			vy: -rng.range(style.lift_min, style.lift_min + style.lift_span),
			step: 0,
		}
	}

	#[cfg(test)]
	fn step(&self) -> u32 {
		self.step
	}

	/// Advances one step. Returns `None` once the lifetime is exceeded, after
	/// which the sprite must be removed.
	pub fn advance(&mut self, style: &SpriteStyle) -> Option<SpriteFrame> {
		self.step += 1;
		if self.step > style.lifetime {
			return None;
		}
		let t = self.step as f64;
		Some(SpriteFrame {
			dx: self.vx * t,
			dy: self.vy * t + style.gravity * t * t,
			scale: (1.0 - t * style.shrink).max(0.0),
			opacity: (1.0 - t * style.fade).max(0.0),
		})
	}
}

struct LiveSprite {
	sprite: Sprite,
	element: HtmlElement,
}

/// DOM-backed sprites, ticked by the frame loop.
#[derive(Default)]
pub struct SpriteLayer {
	live: Vec<LiveSprite>,
}

impl SpriteLayer {
	/// Creates one `div.heart` per sprite and appends it to the body.
	pub fn spawn_all(&mut self, sprites: Vec<Sprite>, style: &SpriteStyle) {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("heart-greeting: no document, dropping {} sprites", sprites.len());
			return;
		};
		let Some(body) = document.body() else {
			return;
		};
		for sprite in sprites {
			let Some(element) = create_glyph(&document, &sprite, style) else {
				continue;
			};
			if body.append_child(&element).is_ok() {
				self.live.push(LiveSprite { sprite, element });
			}
		}
	}

	/// Moves every sprite one step and removes the ones past their lifetime.
	pub fn tick(&mut self, style: &SpriteStyle) {
		self.live.retain_mut(|live| match live.sprite.advance(style) {
			Some(frame) => {
				let css = live.element.style();
				let _ = css.set_property("transform", &frame.transform_css());
				let _ = css.set_property("opacity", &frame.opacity.to_string());
				true
			}
			None => {
				live.element.remove();
				false
			}
		});
	}
}

fn create_glyph(document: &Document, sprite: &Sprite, style: &SpriteStyle) -> Option<HtmlElement> {
	let element: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
	element.set_class_name("heart");
	element.set_text_content(Some(style.glyph));

	let half = style.font_px / 2.0;
	let css = element.style();
	for (property, value) in [
		("position", "fixed".to_string()),
		("pointer-events", "none".to_string()),
		("left", format!("{}px", sprite.x - half)),
		("top", format!("{}px", sprite.y - half)),
		("font-size", format!("{}px", style.font_px)),
		("color", style.color.to_css()),
	] {
		let _ = css.set_property(property, &value);
	}
	Some(element)
}
