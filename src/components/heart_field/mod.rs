//! Heart-shaped particle field.
//!
//! Renders a few hundred particles on an HTML canvas that:
//! - Start scattered across the viewport and spring toward points on a heart curve
//! - Scale in count and shape with the viewport, rebuilt on (debounced) resize
//! - Scatter outward on click while heart sprites burst from the pointer
//!
//! # Example
//!
//! ```ignore
//! let reset = RwSignal::new(0u32);
//! view! { <HeartFieldCanvas reset=reset resize_debounce_ms=120 /> }
//! ```

mod component;
mod field;
mod particles;
mod render;
mod rng;
pub mod shape;
mod sprites;
pub mod theme;

pub use component::HeartFieldCanvas;
pub use field::HeartField;
pub use particles::Particle;
pub use rng::Rng;
pub use sprites::{Sprite, SpriteFrame};
pub use theme::Theme;
