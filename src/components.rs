//! UI components: the particle canvas and the typewriter text reveal.

pub mod heart_field;
pub mod typewriter;
