//! Page configuration, read from a JSON script element.
//!
//! ```html
//! <script id="greeting-config" type="application/json">
//!   { "name": "Ximena", "player_url": "https://open.spotify.com/embed/track/..." }
//! </script>
//! ```
//!
//! Every field is optional; missing ones fall back to [`GreetingConfig::default`].

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the script element holding the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "greeting-config";

const DEFAULT_POEM: &str = "tu contienes en tu mirada el ocaso y la aurora; tu esparces perfumes como una tarde tempestuosa; tus besos son un filtro y tu boca un anfora que tornan al heroe flojo y al niño valiente";

/// Texts, timings, and optional embeds for the greeting page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GreetingConfig {
	/// Name greeted until the visitor types another one.
	pub name: String,
	/// Greeting revealed at startup; `{name}` is substituted.
	pub opening_template: String,
	/// Greeting revealed by the start control; `{name}` is substituted.
	pub message_template: String,
	/// Poem revealed once after the opening greeting.
	pub poem: String,
	/// Milliseconds per character of the opening greeting.
	pub opening_delay_ms: i32,
	/// Milliseconds per character of the greeting shown by the start control.
	pub message_delay_ms: i32,
	/// Milliseconds per character of the poem.
	pub poem_delay_ms: i32,
	/// Quiet period before a window resize rebuilds the particle field.
	pub resize_debounce_ms: i32,
	/// Embed URL for the music player; no player is shown without one.
	pub player_url: Option<String>,
}

impl Default for GreetingConfig {
	fn default() -> Self {
		Self {
			name: "Ximena".into(),
			opening_template: "{name}, ".into(),
			message_template: "Para {name}, con todo mi cariño.".into(),
			poem: DEFAULT_POEM.into(),
			opening_delay_ms: 30,
			message_delay_ms: 40,
			poem_delay_ms: 28,
			resize_debounce_ms: 120,
			player_url: None,
		}
	}
}

impl GreetingConfig {
	/// Opening greeting for `name`.
	pub fn opening(&self, name: &str) -> String {
		self.opening_template.replace("{name}", name)
	}

	/// Start-control greeting for `name`.
	pub fn message(&self, name: &str) -> String {
		self.message_template.replace("{name}", name)
	}

	/// Parses config JSON, logging and falling back to defaults on error.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str::<GreetingConfig>(json) {
			Ok(config) => config,
			Err(e) => {
				warn!("heart-greeting: failed to parse config: {}", e);
				Self::default()
			}
		}
	}
}

/// Picks the name to greet: the trimmed input, or `previous` when blank.
pub fn resolve_name(input: &str, previous: &str) -> String {
	match input.trim() {
		"" => previous.to_string(),
		typed => typed.to_string(),
	}
}

/// Loads config from the `#greeting-config` script element, if present.
pub fn load_config() -> Option<GreetingConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = GreetingConfig::from_json(&json_text);
	info!("heart-greeting: loaded config for {}", config.name);
	Some(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		assert_eq!(GreetingConfig::from_json("{}"), GreetingConfig::default());
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config = GreetingConfig::from_json(
			r#"{ "name": "Lucía", "poem_delay_ms": 50, "player_url": "https://example.com/embed" }"#,
		);
		assert_eq!(config.name, "Lucía");
		assert_eq!(config.poem_delay_ms, 50);
		assert_eq!(config.player_url.as_deref(), Some("https://example.com/embed"));
		assert_eq!(config.opening_delay_ms, 30);
		assert_eq!(config.resize_debounce_ms, 120);
	}

	#[test]
	fn malformed_json_falls_back() {
		assert_eq!(GreetingConfig::from_json("{ name: "), GreetingConfig::default());
		assert_eq!(
			GreetingConfig::from_json(r#"{ "opening_delay_ms": "fast" }"#),
			GreetingConfig::default()
		);
	}

	#[test]
	fn templates_substitute_name() {
		let config = GreetingConfig::default();
		assert_eq!(config.opening("Ximena"), "Ximena, ");
		assert_eq!(config.message("Ana"), "Para Ana, con todo mi cariño.");
	}

	#[test]
	fn blank_input_keeps_previous_name() {
		assert_eq!(resolve_name("   ", "Ximena"), "Ximena");
		assert_eq!(resolve_name("", "Ximena"), "Ximena");
		assert_eq!(resolve_name("  Ana ", "Ximena"), "Ana");
	}
}
