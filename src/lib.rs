//! Scroll-driven visual effects for the academy landing page: parallax
//! layers, section zoom/fade transitions, idle bobbing, the scroll hint and
//! the copy-address button.
//!
//! [`effects`] and [`clipboard`] are plain Rust and build on any target; the
//! DOM glue in `wasm` only compiles for `wasm32`.

pub mod clipboard;
pub mod config;
pub mod effects;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
