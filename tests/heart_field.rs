// Integration tests (native) for the `heart-greeting` crate.
// These stick to the pure particle, shape, and typewriter logic so they run
// under `cargo test` on the host without a browser.

#![allow(unused_crate_dependencies)]

use heart_greeting::components::heart_field::shape::{ShapeMapping, heart_point, particle_count_for};
use heart_greeting::components::heart_field::{HeartField, Rng, Theme};
use heart_greeting::{GreetingConfig, Typewriter};

#[test]
fn field_matches_viewport_band() {
	for (w, h, expected) in [(390.0, 844.0, 200), (768.0, 1024.0, 700), (2560.0, 1440.0, 900)] {
		let field = HeartField::new(w, h, Theme::default(), Rng::new(99));
		assert_eq!(field.particles.len(), expected, "{w}x{h}");
		assert_eq!(field.particles.len(), particle_count_for(w, h));
	}
}

#[test]
fn click_then_settle() {
	let mut field = HeartField::new(1280.0, 800.0, Theme::default(), Rng::new(5));
	for _ in 0..400 {
		field.tick();
	}
	let sprites = field.pointer_burst((640.0, 400.0), (640.0, 400.0));
	assert_eq!(sprites.len(), 18);
	for _ in 0..5 {
		field.tick();
	}
	assert!(field.particles.iter().any(|p| p.distance_to_target() > 0.5));

	for _ in 0..600 {
		field.tick();
	}
	assert!(field.particles.iter().all(|p| p.distance_to_target() < 0.5));
}

#[test]
fn targets_trace_the_heart() {
	let field = HeartField::new(1000.0, 1000.0, Theme::default(), Rng::new(17));
	let mapping = ShapeMapping::for_viewport(1000.0, 1000.0);
	let (min_x, min_y, max_x, max_y) = mapping.bounds(1.0);
	for p in &field.particles {
		assert!(p.tx >= min_x && p.tx <= max_x);
		assert!(p.ty >= min_y && p.ty <= max_y);
	}
	// Left/right halves of the silhouette should both be populated.
	let left = field.particles.iter().filter(|p| p.tx < 500.0).count();
	let right = field.particles.len() - left;
	assert!(left > 200 && right > 200, "left {left}, right {right}");
	assert_eq!(heart_point(0.0).0, 0.0);
}

#[test]
fn default_opening_types_out_in_full() {
	let config = GreetingConfig::default();
	let text = config.opening(&config.name);
	let mut writer = Typewriter::new(&text);
	writer.start();
	let mut shown = String::new();
	loop {
		let tick = writer.tick();
		shown.extend(tick.appended);
		if tick.complete {
			break;
		}
	}
	assert_eq!(shown, "Ximena, ");
}
