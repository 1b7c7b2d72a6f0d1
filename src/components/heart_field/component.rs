//! Leptos component wrapping the heart field canvas.
//!
//! The component creates a full-viewport canvas, sizes its backing store for
//! the device pixel ratio, and runs one `requestAnimationFrame` loop that
//! steps the particles, redraws, and advances click sprites. Window resizes
//! are debounced before the field is rebuilt.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::HeartField;
use super::render;
use super::rng::Rng;
use super::sprites::SpriteLayer;
use super::theme::Theme;
use crate::schedule::{Debouncer, TimerHost, WindowTimers};

/// Bundles the animator context with the surface it draws on.
struct FieldContext {
	field: HeartField,
	sprites: SpriteLayer,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl FieldContext {
	/// Re-fits the canvas to the window and rebuilds the particle set.
	fn refit(&mut self) {
		let Some((width, height)) = fit_canvas(&self.canvas, &self.ctx) else {
			return;
		};
		self.field.resize(width, height);
	}
}

/// Sizes the canvas backing store to CSS size × device pixel ratio and sets
/// the transform so drawing happens in CSS pixels. Returns the CSS size.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> Option<(f64, f64)> {
	let window: Window = web_sys::window()?;
	let ratio = match window.device_pixel_ratio() {
		r if r > 0.0 => r,
		_ => 1.0,
	};
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;

	canvas.set_width((width * ratio).round() as u32);
	canvas.set_height((height * ratio).round() as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{width}px"));
	let _ = style.set_property("height", &format!("{height}px"));
	let _ = ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
	Some((width, height))
}

/// Full-viewport canvas where particles gather into a heart.
///
/// Clicking bursts particles outward and throws heart sprites. Every change
/// of `reset` rebuilds the particle set.
#[component]
pub fn HeartFieldCanvas(
	#[prop(into)] reset: Signal<u32>,
	#[prop(default = 120)] resize_debounce_ms: i32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let timers: Rc<dyn TimerHost> = Rc::new(WindowTimers::new());
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("heart-greeting: 2d canvas context unavailable");
			return;
		};
		let Some((w, h)) = fit_canvas(&canvas, &ctx) else {
			return;
		};

		*context_init.borrow_mut() = Some(FieldContext {
			field: HeartField::new(w, h, Theme::default(), Rng::from_browser()),
			sprites: SpriteLayer::default(),
			canvas,
			ctx,
		});

		let debounce = Rc::new(Debouncer::new(timers.clone(), resize_debounce_ms));
		let context_resize = context_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let context_refit = context_resize.clone();
			debounce.trigger(move || {
				if let Some(ref mut c) = *context_refit.borrow_mut() {
					c.refit();
				}
			});
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.tick();
				render::render(&c.field, &c.ctx);
				c.sprites.tick(&c.field.theme.sprite);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_reset = context.clone();
	Effect::new(move |previous: Option<u32>| {
		let current = reset.get();
		if previous.is_some() {
			if let Some(ref mut c) = *context_reset.borrow_mut() {
				c.field.reinitialize();
			}
		}
		current
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let client = (ev.client_x() as f64, ev.client_y() as f64);
		let local = (client.0 - rect.left(), client.1 - rect.top());

		if let Some(ref mut c) = *context_click.borrow_mut() {
			let sprites = c.field.pointer_burst(local, client);
			debug!(
				"heart-greeting: burst at ({:.0}, {:.0}), {} sprites",
				local.0,
				local.1,
				sprites.len()
			);
			c.sprites.spawn_all(sprites, &c.field.theme.sprite);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="canvas"
			class="heart-field-canvas"
			on:click=on_click
			style="display: block; position: fixed; inset: 0;"
		/>
	}
}
