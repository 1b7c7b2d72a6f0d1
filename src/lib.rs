//! heart-greeting: an animated greeting page.
//!
//! Particles converge into a heart on a full-screen canvas while a
//! typewriter reveals a personal message and a short poem. Clicking the
//! canvas scatters the particles and throws heart sprites.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info};

pub mod components;
pub mod config;
pub mod schedule;

pub use components::heart_field::{HeartField, HeartFieldCanvas, Theme};
pub use components::typewriter::{Revealer, Typewriter};
pub use config::GreetingConfig;

use components::typewriter::{RevealStep, reveal_in_sequence, restart_pulse};
use config::{load_config, resolve_name};
use schedule::{TimerHost, WindowTimers};

/// CSS class whose animation replays each time the poem finishes.
const PULSE_CLASS: &str = "phrase-pulse";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-greeting: logging initialized");
}

/// Main application component.
/// Loads config from the DOM, renders the canvas, texts, and controls, and
/// starts the opening reveal once mounted.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = Rc::new(load_config().unwrap_or_default());
	let timers: Rc<dyn TimerHost> = Rc::new(WindowTimers::new());

	let message_ref = NodeRef::<leptos::html::P>::new();
	let phrase_ref = NodeRef::<leptos::html::P>::new();
	let name_ref = NodeRef::<leptos::html::Input>::new();
	let name = RwSignal::new(config.name.clone());
	let reset_count = RwSignal::new(0u32);
	let player_hidden = RwSignal::new(false);

	let message = Rc::new(Revealer::new(timers.clone(), Rc::new(message_ref)));
	let phrase = Rc::new(Revealer::new(timers, Rc::new(phrase_ref)));

	let (message_init, config_init) = (message.clone(), config.clone());
	Effect::new(move |_| {
		let steps = vec![
			RevealStep {
				revealer: message_init.clone(),
				text: config_init.opening(&name.get_untracked()),
				delay_ms: config_init.opening_delay_ms,
			},
			RevealStep {
				revealer: phrase.clone(),
				text: config_init.poem.clone(),
				delay_ms: config_init.poem_delay_ms,
			},
		];
		reveal_in_sequence(steps, move || {
			if let Some(el) = phrase_ref.get_untracked() {
				restart_pulse(&el, PULSE_CLASS);
			}
		});
	});

	let (message_start, config_start) = (message.clone(), config.clone());
	let on_start = move |_| {
		let typed = name_ref
			.get_untracked()
			.map(|input| input.value())
			.unwrap_or_default();
		name.set(resolve_name(&typed, &name.get_untracked()));
		let text = config_start.message(&name.get_untracked());
		debug!("heart-greeting: revealing greeting for {}", name.get_untracked());
		message_start.reveal(&text, config_start.message_delay_ms, || {});
	};

	let message_reset = message.clone();
	let on_reset = move |_| {
		reset_count.update(|n| *n += 1);
		if message_reset.is_active() {
			debug!("heart-greeting: reset interrupts the greeting in flight");
		}
		message_reset.cancel();
		message_reset.clear();
	};

	let player = config.player_url.clone().map(|url| {
		let toggle_label = move || {
			if player_hidden.get() {
				"Mostrar reproductor"
			} else {
				"Ocultar reproductor"
			}
		};
		view! {
			<div id="playerWrap" class="player-wrap" class:hidden=move || player_hidden.get()>
				<iframe src=url allow="autoplay; encrypted-media" {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}></iframe>
			</div>
			<button
				id="togglePlayer"
				class="toggle-player"
				aria-label=toggle_label
				on:click=move |_| player_hidden.update(|hidden| *hidden = !*hidden)
			>
				"♫"
			</button>
		}
	});

	view! {
		<Html attr:lang="es" attr:dir="ltr" />
		<Title text="Para ti" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="greeting">
			<HeartFieldCanvas reset=reset_count resize_debounce_ms=config.resize_debounce_ms />
			<div class="greeting-overlay">
				<p id="message" class="message" node_ref=message_ref></p>
				<p id="phrase" class="phrase" node_ref=phrase_ref></p>
				<div class="controls">
					<input id="nameInput" type="text" placeholder="Tu nombre" node_ref=name_ref />
					<button id="startBtn" on:click=on_start>"Comenzar"</button>
					<button id="resetBtn" on:click=on_reset>"Reiniciar"</button>
				</div>
			</div>
			{player}
		</div>
	}
}
