// src/config.rs

use crate::model::bonds::ThresholdSource;
use crate::model::lattice::LatticeKind;
use crate::rendering::primitives::Rgb;
use crate::rendering::projection::PERSPECTIVE;
use crate::state::ViewParams;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

// --- Errors ---

#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ConfigError::Io(e) => write!(f, "Error opening config: {}", e),
      ConfigError::Parse(e) => write!(f, "Error parsing config: {}", e),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ConfigError::Io(e) => Some(e),
      ConfigError::Parse(e) => Some(e),
    }
  }
}

impl From<io::Error> for ConfigError {
  fn from(e: io::Error) -> Self {
    ConfigError::Io(e)
  }
}

impl From<serde_json::Error> for ConfigError {
  fn from(e: serde_json::Error) -> Self {
    ConfigError::Parse(e)
  }
}

// --- RenderStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  pub real_atom_color: Rgb,
  pub real_bond_color: Rgb,
  pub reciprocal_atom_color: Rgb,
  pub reciprocal_bond_color: Rgb,
  pub background_color: Rgb,
  pub atom_opacity: f64,
  pub bond_opacity: f64,
  /// In logical viewport units.
  pub bond_width: f64,
  /// Reciprocal atoms are drawn this much larger.
  pub reciprocal_radius_factor: f64,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      real_atom_color: rgb8(0x42, 0x99, 0xe1),
      real_bond_color: rgb8(0x90, 0xcd, 0xf4),
      reciprocal_atom_color: rgb8(0xed, 0x64, 0xa6),
      reciprocal_bond_color: rgb8(0xfb, 0xb6, 0xce),
      background_color: (1.0, 1.0, 1.0),
      atom_opacity: 0.8,
      bond_opacity: 0.4,
      bond_width: 1.0,
      reciprocal_radius_factor: 1.2,
    }
  }
}

impl RenderStyle {
  /// (atom fill, bond stroke)
  pub fn palette(&self, kind: LatticeKind) -> (Rgb, Rgb) {
    match kind {
      LatticeKind::Real => (self.real_atom_color, self.real_bond_color),
      LatticeKind::Reciprocal => (self.reciprocal_atom_color, self.reciprocal_bond_color),
    }
  }

  pub fn radius_factor(&self, kind: LatticeKind) -> f64 {
    if kind.is_reciprocal() {
      self.reciprocal_radius_factor
    } else {
      1.0
    }
  }
}

fn rgb8(r: u8, g: u8, b: u8) -> Rgb {
  (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Initial slider positions.
  #[serde(default)]
  pub params: ViewParams,

  #[serde(default)]
  pub style: RenderStyle,

  #[serde(default = "default_perspective")]
  pub perspective: f64,

  #[serde(default)]
  pub threshold_source: ThresholdSource,
}

fn default_perspective() -> f64 {
  PERSPECTIVE
}

impl Default for Config {
  fn default() -> Self {
    Self {
      params: ViewParams::default(),
      style: RenderStyle::default(),
      perspective: PERSPECTIVE,
      threshold_source: ThresholdSource::default(),
    }
  }
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/latview/settings.json),
  /// falling back to defaults.
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found. Using defaults.");
      return Self::default();
    }
    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("{}. Using defaults.", e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    let reader = BufReader::new(File::open(path)?);
    let mut cfg: Config = serde_json::from_reader(reader)?;
    cfg.params = cfg.params.sanitized();
    Ok(cfg)
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "latview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_default_colors_match_widget_palette() {
    let style = RenderStyle::default();
    assert_eq!(style.real_atom_color, (66.0 / 255.0, 153.0 / 255.0, 225.0 / 255.0));
    assert_eq!(style.palette(LatticeKind::Reciprocal).0, rgb8(0xed, 0x64, 0xa6));
    assert_eq!(style.radius_factor(LatticeKind::Real), 1.0);
    assert_eq!(style.radius_factor(LatticeKind::Reciprocal), 1.2);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
      file,
      r#"{{ "params": {{ "lattice_spacing": 25.0 }}, "threshold_source": "OwnSpacing" }}"#
    )
    .unwrap();

    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg.params.lattice_spacing, 25.0);
    assert_eq!(cfg.params.atom_radius, 6.0);
    assert_eq!(cfg.threshold_source, ThresholdSource::OwnSpacing);
    assert_eq!(cfg.perspective, PERSPECTIVE);
    assert_eq!(cfg.style, RenderStyle::default());
  }

  #[test]
  fn test_out_of_range_params_are_clamped() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "params": {{ "atom_radius": 50.0, "rotation_x": 400.0 }} }}"#).unwrap();
    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg.params.atom_radius, 10.0);
    assert_eq!(cfg.params.rotation_x, 40.0);
  }

  #[test]
  fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Error parsing config"));
  }

  #[test]
  fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
  }
}
