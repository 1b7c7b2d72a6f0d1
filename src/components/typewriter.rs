//! Typewriter-style text reveal.
//!
//! [`Typewriter`] is the cursor state machine, [`Revealer`] binds one to a
//! text container and an interval timer, and [`reveal_in_sequence`] chains
//! reveals so the next one starts only when the previous has completed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlElement;

use crate::schedule::{TimerHost, TimerId};

/// Where the typewriter is in its string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
	Idle,
	Revealing { cursor: usize },
	Complete,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
	/// Character to append, if the cursor was still inside the string.
	pub appended: Option<char>,
	/// Set on the tick that finished the reveal and on every tick after it.
	pub complete: bool,
}

/// Reveals a string one character per tick.
///
/// The cursor runs one step past the end before completing, so a string of
/// `n` characters completes on tick `n + 1`.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	state: RevealState,
}

impl Typewriter {
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			state: RevealState::Idle,
		}
	}

	pub fn state(&self) -> RevealState {
		self.state
	}

	pub fn start(&mut self) {
		self.state = RevealState::Revealing { cursor: 0 };
	}

	pub fn tick(&mut self) -> Tick {
		let RevealState::Revealing { cursor } = self.state else {
			return Tick {
				appended: None,
				complete: self.state == RevealState::Complete,
			};
		};
		let appended = self.chars.get(cursor).copied();
		let cursor = cursor + 1;
		let complete = cursor > self.chars.len();
		self.state = if complete {
			RevealState::Complete
		} else {
			RevealState::Revealing { cursor }
		};
		Tick { appended, complete }
	}
}

/// A text container the revealer writes into.
pub trait TextSink {
	fn clear(&self);
	fn append(&self, text: &str);
}

/// Paragraphs reached through a node ref; does nothing while unmounted.
impl TextSink for NodeRef<leptos::html::P> {
	fn clear(&self) {
		if let Some(el) = self.get_untracked() {
			el.set_text_content(Some(""));
		}
	}

	fn append(&self, text: &str) {
		if let Some(el) = self.get_untracked() {
			let mut current = el.text_content().unwrap_or_default();
			current.push_str(text);
			el.set_text_content(Some(&current));
		}
	}
}

struct ActiveReveal {
	timer: Option<TimerId>,
	on_complete: Option<Box<dyn FnOnce()>>,
}

type ActiveSlot = Rc<RefCell<Option<ActiveReveal>>>;

/// Drives a [`Typewriter`] into a [`TextSink`] on a fixed-period timer.
pub struct Revealer {
	timers: Rc<dyn TimerHost>,
	sink: Rc<dyn TextSink>,
	active: ActiveSlot,
}

impl Revealer {
	pub fn new(timers: Rc<dyn TimerHost>, sink: Rc<dyn TextSink>) -> Self {
		Self {
			timers,
			sink,
			active: Rc::new(RefCell::new(None)),
		}
	}

	pub fn is_active(&self) -> bool {
		self.active.borrow().is_some()
	}

	/// Clears the container and reveals `text` one character every
	/// `delay_ms`. A reveal already in flight is cancelled first.
	/// `on_complete` runs once, when the text is fully shown or the reveal
	/// is cancelled.
	pub fn reveal(&self, text: &str, delay_ms: i32, on_complete: impl FnOnce() + 'static) {
		self.cancel();
		self.sink.clear();

		let mut writer = Typewriter::new(text);
		writer.start();
		*self.active.borrow_mut() = Some(ActiveReveal {
			timer: None,
			on_complete: Some(Box::new(on_complete)),
		});

		let (timers, sink, active) = (self.timers.clone(), self.sink.clone(), self.active.clone());
		let tick = move || {
			let step = writer.tick();
			if let Some(ch) = step.appended {
				sink.append(ch.encode_utf8(&mut [0; 4]));
			}
			if step.complete {
				finish(timers.as_ref(), &active);
			}
		};

		match self.timers.start_interval(delay_ms, Box::new(tick)) {
			Some(id) => {
				if let Some(reveal) = self.active.borrow_mut().as_mut() {
					reveal.timer = Some(id);
				}
			}
			None => {
				warn!("heart-greeting: could not start reveal timer");
				self.cancel();
			}
		}
	}

	/// Stops a reveal in flight, leaving whatever text is already shown, and
	/// runs its completion callback.
	pub fn cancel(&self) {
		finish(self.timers.as_ref(), &self.active);
	}

	pub fn clear(&self) {
		self.sink.clear();
	}
}

fn finish(timers: &dyn TimerHost, active: &RefCell<Option<ActiveReveal>>) {
	let Some(reveal) = active.borrow_mut().take() else {
		return;
	};
	if let Some(id) = reveal.timer {
		timers.cancel(id);
	}
	if let Some(on_complete) = reveal.on_complete {
		on_complete();
	}
}

/// One entry in a [`reveal_in_sequence`] chain.
pub struct RevealStep {
	pub revealer: Rc<Revealer>,
	pub text: String,
	pub delay_ms: i32,
}

/// Runs each step after the previous one completes, then `on_complete`.
pub fn reveal_in_sequence(steps: Vec<RevealStep>, on_complete: impl FnOnce() + 'static) {
	run_next(steps.into_iter(), Box::new(on_complete));
}

fn run_next(mut steps: std::vec::IntoIter<RevealStep>, on_complete: Box<dyn FnOnce()>) {
	match steps.next() {
		Some(step) => {
			let chars = step.text.chars().count();
			step.revealer.reveal(&step.text, step.delay_ms, move || {
				debug!("heart-greeting: revealed {chars} chars");
				run_next(steps, on_complete);
			});
		}
		None => on_complete(),
	}
}

/// Restarts a CSS animation bound to `class` by removing the class, forcing
/// a reflow, and adding it back.
pub fn restart_pulse(element: &HtmlElement, class: &str) {
	let classes = element.class_list();
	let _ = classes.remove_1(class);
	let _ = element.offset_width();
	let _ = classes.add_1(class);
}
