// src/state.rs

use crate::animation;
use crate::config::Config;
use crate::model::lattice;
use crate::rendering::projection::Rotation;
use crate::rendering::scene::{self, Scenes};
use serde::{Deserialize, Serialize};

pub const SPACING_MIN: f64 = 20.0;
pub const SPACING_MAX: f64 = 60.0;
pub const RADIUS_MIN: f64 = 2.0;
pub const RADIUS_MAX: f64 = 10.0;

/// Everything the geometry pipeline depends on. Angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
  pub lattice_spacing: f64,
  pub atom_radius: f64,
  pub rotation_x: f64,
  pub rotation_y: f64,
  pub rotation_z: f64,
  pub is_animating: bool,
}

impl Default for ViewParams {
  fn default() -> Self {
    Self {
      lattice_spacing: 40.0,
      atom_radius: 6.0,
      rotation_x: 0.0,
      rotation_y: 0.0,
      rotation_z: 0.0,
      is_animating: false,
    }
  }
}

impl ViewParams {
  pub fn set_lattice_spacing(&mut self, spacing: f64) {
    self.lattice_spacing = spacing.clamp(SPACING_MIN, SPACING_MAX);
  }

  pub fn set_atom_radius(&mut self, radius: f64) {
    self.atom_radius = radius.clamp(RADIUS_MIN, RADIUS_MAX);
  }

  pub fn set_rotation_x(&mut self, degrees: f64) {
    self.rotation_x = wrap_degrees(degrees);
  }

  pub fn set_rotation_y(&mut self, degrees: f64) {
    self.rotation_y = wrap_degrees(degrees);
  }

  pub fn reset_rotation(&mut self) {
    self.rotation_x = 0.0;
    self.rotation_y = 0.0;
    self.rotation_z = 0.0;
  }

  /// One animation frame: spin around Z.
  pub fn advance_animation(&mut self) {
    self.rotation_z = animation::advance_angle(self.rotation_z);
  }

  pub fn rotation(&self) -> Rotation {
    Rotation::new(self.rotation_x, self.rotation_y, self.rotation_z)
  }

  pub fn reciprocal_spacing(&self) -> f64 {
    lattice::reciprocal_spacing(self.lattice_spacing)
  }

  /// Same values pushed through the setters, for input that bypassed the UI bounds.
  pub fn sanitized(&self) -> Self {
    let mut p = self.clone();
    p.set_lattice_spacing(self.lattice_spacing);
    p.set_atom_radius(self.atom_radius);
    p.set_rotation_x(self.rotation_x);
    p.set_rotation_y(self.rotation_y);
    p.rotation_z = wrap_degrees(self.rotation_z);
    p
  }
}

fn wrap_degrees(degrees: f64) -> f64 {
  degrees.rem_euclid(360.0)
}

pub struct AppState {
  pub params: ViewParams,
  pub config: Config,
}

impl AppState {
  pub fn new(config: Config) -> Self {
    Self {
      params: config.params.sanitized(),
      config,
    }
  }

  pub fn scenes(&self) -> Scenes {
    scene::calculate_scenes(&self.params, &self.config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  #[test]
  fn test_defaults_match_widget() {
    let p = ViewParams::default();
    assert_eq!(p.lattice_spacing, 40.0);
    assert_eq!(p.atom_radius, 6.0);
    assert_eq!(p.rotation(), Rotation::default());
    assert!(!p.is_animating);
    assert_relative_eq!(p.reciprocal_spacing(), 10.0);
  }

  #[test]
  fn test_setters_clamp_and_wrap() {
    let mut p = ViewParams::default();
    p.set_lattice_spacing(5.0);
    assert_eq!(p.lattice_spacing, SPACING_MIN);
    p.set_lattice_spacing(100.0);
    assert_eq!(p.lattice_spacing, SPACING_MAX);
    p.set_atom_radius(0.5);
    assert_eq!(p.atom_radius, RADIUS_MIN);
    p.set_rotation_x(360.0);
    assert_eq!(p.rotation_x, 0.0);
    p.set_rotation_y(-90.0);
    assert_eq!(p.rotation_y, 270.0);
  }

  #[test]
  fn test_reset_rotation_zeroes_all_axes() {
    let mut p = ViewParams::default();
    p.set_rotation_x(10.0);
    p.set_rotation_y(20.0);
    p.advance_animation();
    p.reset_rotation();
    assert_eq!(p.rotation(), Rotation::default());
  }

  #[test]
  fn test_app_state_sanitizes_config_params() {
    let mut config = Config::default();
    config.params.lattice_spacing = 1000.0;
    config.params.rotation_z = 720.5;
    let state = AppState::new(config);
    assert_eq!(state.params.lattice_spacing, SPACING_MAX);
    assert_relative_eq!(state.params.rotation_z, 0.5);
  }
}
