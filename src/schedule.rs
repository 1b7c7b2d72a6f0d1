//! Timer plumbing shared by the resize debounce and the typewriter.
//!
//! [`TimerHost`] is the one seam between timed behavior and the browser:
//! [`WindowTimers`] backs it with `setTimeout`/`setInterval`, and tests
//! drive the same code with a manual clock.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;

/// Handle to a scheduled timeout or interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// Something that can run callbacks later.
pub trait TimerHost {
	/// Runs `callback` once after `delay_ms`. `None` if scheduling failed.
	fn start_timeout(&self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Option<TimerId>;
	/// Runs `callback` every `period_ms` until cancelled.
	fn start_interval(&self, period_ms: i32, callback: Box<dyn FnMut()>) -> Option<TimerId>;
	/// Cancels a pending timer. Safe to call from inside that timer's own
	/// callback and with handles that already fired.
	fn cancel(&self, id: TimerId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
	Timeout,
	Interval,
}

type LiveClosures = Rc<RefCell<HashMap<i32, (TimerKind, Closure<dyn FnMut()>)>>>;

/// Browser timers on the global `window`.
///
/// Each callback is wrapped in a [`Closure`] kept alive in a table until it
/// is cancelled or, for timeouts, until it has fired.
#[derive(Default)]
pub struct WindowTimers {
	live: LiveClosures,
}

impl WindowTimers {
	pub fn new() -> Self {
		Self::default()
	}
}

impl TimerHost for WindowTimers {
	fn start_timeout(&self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
		let window = web_sys::window()?;
		let own_id = Rc::new(Cell::new(None::<i32>));
		let (live, own_id_cb) = (self.live.clone(), own_id.clone());
		let mut callback = Some(callback);
		let closure = Closure::<dyn FnMut()>::new(move || {
			if let Some(f) = callback.take() {
				f();
			}
			// Releasing the closure from inside its own call is deferred by
			// wasm-bindgen until the call returns.
			if let Some(id) = own_id_cb.get() {
				let _ = live.borrow_mut().remove(&id);
			}
		});

		let id = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			delay_ms,
		) {
			Ok(id) => id,
			Err(e) => {
				warn!("heart-greeting: setTimeout failed: {:?}", e);
				return None;
			}
		};
		own_id.set(Some(id));
		self.live.borrow_mut().insert(id, (TimerKind::Timeout, closure));
		Some(TimerId(id))
	}

	fn start_interval(&self, period_ms: i32, callback: Box<dyn FnMut()>) -> Option<TimerId> {
		let window = web_sys::window()?;
		let closure = Closure::wrap(callback);
		let id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			period_ms,
		) {
			Ok(id) => id,
			Err(e) => {
				warn!("heart-greeting: setInterval failed: {:?}", e);
				return None;
			}
		};
		self.live.borrow_mut().insert(id, (TimerKind::Interval, closure));
		Some(TimerId(id))
	}

	fn cancel(&self, id: TimerId) {
		let removed = self.live.borrow_mut().remove(&id.0);
		let Some((kind, _closure)) = removed else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		match kind {
			TimerKind::Timeout => window.clear_timeout_with_handle(id.0),
			TimerKind::Interval => window.clear_interval_with_handle(id.0),
		}
	}
}

/// Runs only the last of a burst of triggers, once `delay_ms` passes
/// without another one.
pub struct Debouncer {
	timers: Rc<dyn TimerHost>,
	delay_ms: i32,
	pending: Cell<Option<TimerId>>,
}

impl Debouncer {
	pub fn new(timers: Rc<dyn TimerHost>, delay_ms: i32) -> Self {
		Self {
			timers,
			delay_ms,
			pending: Cell::new(None),
		}
	}

	/// Cancels whatever is pending and schedules `action` in its place.
	pub fn trigger(&self, action: impl FnOnce() + 'static) {
		if let Some(id) = self.pending.take() {
			self.timers.cancel(id);
		}
		self.pending
			.set(self.timers.start_timeout(self.delay_ms, Box::new(action)));
	}
}

/// Deterministic [`TimerHost`] for tests: time only moves on [`advance`].
///
/// [`advance`]: manual::ManualTimers::advance
#[cfg(test)]
pub(crate) mod manual {
	use std::cell::{Cell, RefCell};
	use std::collections::BTreeMap;

	use super::{TimerHost, TimerId};

	enum Task {
		Once(Option<Box<dyn FnOnce()>>),
		Repeat(Box<dyn FnMut()>),
	}

	struct Pending {
		due: u64,
		period: Option<u64>,
		task: Task,
	}

	#[derive(Default)]
	pub struct ManualTimers {
		now: Cell<u64>,
		next_id: Cell<i32>,
		pending: RefCell<BTreeMap<i32, Pending>>,
		running: Cell<Option<i32>>,
		running_cancelled: Cell<bool>,
	}

	impl ManualTimers {
		pub fn new() -> Self {
			Self::default()
		}

		pub fn pending(&self) -> usize {
			self.pending.borrow().len()
		}

		/// Moves the clock forward, firing everything that falls due in order.
		pub fn advance(&self, ms: u64) {
			let until = self.now.get() + ms;
			loop {
				let next = self
					.pending
					.borrow()
					.iter()
					.filter(|(_, p)| p.due <= until)
					.min_by_key(|(id, p)| (p.due, **id))
					.map(|(id, _)| *id);
				let Some(id) = next else { break };
				let Some(mut entry) = self.pending.borrow_mut().remove(&id) else {
					break;
				};

				self.now.set(entry.due);
				self.running.set(Some(id));
				self.running_cancelled.set(false);
				match &mut entry.task {
					Task::Once(f) => {
						if let Some(f) = f.take() {
							f();
						}
					}
					Task::Repeat(f) => f(),
				}
				self.running.set(None);

				if let Some(period) = entry.period {
					if !self.running_cancelled.get() {
						entry.due += period;
						self.pending.borrow_mut().insert(id, entry);
					}
				}
			}
			self.now.set(until);
		}

		fn schedule(&self, delay_ms: i32, period: Option<u64>, task: Task) -> Option<TimerId> {
			let id = self.next_id.get() + 1;
			self.next_id.set(id);
			let due = self.now.get() + delay_ms.max(1) as u64;
			self.pending
				.borrow_mut()
				.insert(id, Pending { due, period, task });
			Some(TimerId(id))
		}
	}

	impl TimerHost for ManualTimers {
		fn start_timeout(&self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
			self.schedule(delay_ms, None, Task::Once(Some(callback)))
		}

		fn start_interval(&self, period_ms: i32, callback: Box<dyn FnMut()>) -> Option<TimerId> {
			let period = period_ms.max(1) as u64;
			self.schedule(period_ms, Some(period), Task::Repeat(callback))
		}

		fn cancel(&self, id: TimerId) {
			let removed = self.pending.borrow_mut().remove(&id.0).is_some();
			if !removed && self.running.get() == Some(id.0) {
				self.running_cancelled.set(true);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::manual::ManualTimers;
	use super::*;
	use crate::components::heart_field::{HeartField, Rng, Theme};

	fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
		let count = Rc::new(Cell::new(0));
		let handle = count.clone();
		let make = move || {
			let c = handle.clone();
			Box::new(move || c.set(c.get() + 1)) as Box<dyn FnOnce()>
		};
		(count, make)
	}

	#[test]
	fn debounce_collapses_a_burst() {
		let timers = Rc::new(ManualTimers::new());
		let debounce = Debouncer::new(timers.clone(), 120);
		let (count, make) = counter();

		debounce.trigger(make());
		timers.advance(50);
		debounce.trigger(make());
		timers.advance(119);
		assert_eq!(count.get(), 0);

		timers.advance(1);
		assert_eq!(count.get(), 1);
		timers.advance(1000);
		assert_eq!(count.get(), 1);
		assert_eq!(timers.pending(), 0);
	}

	#[test]
	fn double_resize_rebuilds_field_once() {
		let timers = Rc::new(ManualTimers::new());
		let debounce = Debouncer::new(timers.clone(), 120);
		let field = Rc::new(RefCell::new(HeartField::new(
			1280.0,
			800.0,
			Theme::default(),
			Rng::new(3),
		)));
		assert_eq!(field.borrow().generation(), 1);

		for (w, h) in [(900.0, 700.0), (390.0, 844.0)] {
			let target = field.clone();
			debounce.trigger(move || target.borrow_mut().resize(w, h));
			timers.advance(60);
		}
		assert_eq!(field.borrow().generation(), 1);

		timers.advance(60);
		assert_eq!(field.borrow().generation(), 2);
		assert_eq!(field.borrow().particles.len(), 200);
		timers.advance(1000);
		assert_eq!(field.borrow().generation(), 2);
	}

	#[test]
	fn debounce_fires_again_after_quiet_period() {
		let timers = Rc::new(ManualTimers::new());
		let debounce = Debouncer::new(timers.clone(), 120);
		let (count, make) = counter();

		debounce.trigger(make());
		timers.advance(200);
		debounce.trigger(make());
		timers.advance(200);
		assert_eq!(count.get(), 2);
	}

	#[test]
	fn interval_can_cancel_itself() {
		let timers = Rc::new(ManualTimers::new());
		let ticks = Rc::new(Cell::new(0));
		let own = Rc::new(Cell::new(None::<TimerId>));

		let (t, k, o) = (timers.clone(), ticks.clone(), own.clone());
		let id = timers.start_interval(
			10,
			Box::new(move || {
				k.set(k.get() + 1);
				if k.get() == 3 {
					if let Some(id) = o.get() {
						t.cancel(id);
					}
				}
			}),
		);
		own.set(id);

		timers.advance(100);
		assert_eq!(ticks.get(), 3);
		assert_eq!(timers.pending(), 0);
	}
}
