//! Canvas rendering for the heart field.
//!
//! One frame is: clear, paint the ambient glow, then draw every particle as
//! a filled circle. Coordinates are CSS pixels; the device pixel ratio is
//! folded into the context transform when the canvas is sized.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::HeartField;
use super::theme::Theme;

/// Renders the complete field to the canvas.
pub fn render(field: &HeartField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	draw_glow(field, ctx, &field.theme);
	draw_particles(field, ctx, &field.theme);
}

fn draw_glow(field: &HeartField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (cx, cy) = (field.width / 2.0, field.height / 2.0);
	let outer = field.width.max(field.height) / theme.glow.reach_divisor;
	let Ok(gradient) = ctx.create_radial_gradient(cx, cy, theme.glow.inner_radius, cx, cy, outer)
	else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, &theme.glow.inner.to_css());
	let _ = gradient.add_color_stop(1.0, &theme.glow.outer.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, field.width, field.height);
}

fn draw_particles(field: &HeartField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_global_alpha(theme.particles.alpha);
	for p in &field.particles {
		ctx.begin_path();
		ctx.set_fill_style_str(&p.color);
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}
