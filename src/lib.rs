// src/lib.rs

//! Real-space and reciprocal-space lattice viewer.
//!
//! The geometry pipeline (point generation, bonds, projection, depth
//! sorting) is plain Rust and always available. The GTK front-end lives
//! behind the `gui` feature.

pub mod animation;
pub mod config;
pub mod model;
pub mod rendering;
pub mod state;

#[cfg(feature = "gui")]
pub mod panels;
#[cfg(feature = "gui")]
pub mod ui;
#[cfg(feature = "gui")]
pub mod utils;

pub use config::{Config, RenderStyle};
pub use model::lattice::LatticeKind;
pub use rendering::scene::{calculate_scene, calculate_scenes, Scene, Scenes};
pub use state::{AppState, ViewParams};
