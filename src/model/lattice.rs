// src/model/lattice.rs

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Half-width of the grid along each axis, in lattice steps.
pub const GRID_SIZE: i32 = 2;

/// Points per lattice: (2 * GRID_SIZE + 1)^3.
pub const POINTS_PER_LATTICE: usize = 125;

/// Multiplier applied on top of the inverse spacing.
pub const RECIPROCAL_SCALE: f64 = 2.0;

const RECIPROCAL_NUMERATOR: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeKind {
  Real,
  Reciprocal,
}

impl LatticeKind {
  /// Grid spacing this lattice uses for a given real-space spacing.
  pub fn spacing_for(self, lattice_spacing: f64) -> f64 {
    match self {
      LatticeKind::Real => lattice_spacing,
      LatticeKind::Reciprocal => reciprocal_spacing(lattice_spacing),
    }
  }

  pub fn is_reciprocal(self) -> bool {
    matches!(self, LatticeKind::Reciprocal)
  }

  pub fn title(self) -> &'static str {
    match self {
      LatticeKind::Real => "Real Space",
      LatticeKind::Reciprocal => "Reciprocal Space",
    }
  }
}

/// Purely geometric inverse of the real spacing: `(200 / s) * 2`.
///
/// Widening the real lattice shrinks the reciprocal one. This is not a
/// Fourier-transform reciprocal lattice.
pub fn reciprocal_spacing(lattice_spacing: f64) -> f64 {
  (RECIPROCAL_NUMERATOR / lattice_spacing) * RECIPROCAL_SCALE
}

/// Simple cubic grid `(i*s, j*s, k*s)` for `i, j, k` in `[-GRID_SIZE, GRID_SIZE]`.
///
/// Enumeration order is i (outer), j, k (inner), all ascending.
pub fn generate_points(spacing: f64) -> Vec<Point3<f64>> {
  let mut points = Vec::with_capacity(POINTS_PER_LATTICE);
  for i in -GRID_SIZE..=GRID_SIZE {
    for j in -GRID_SIZE..=GRID_SIZE {
      for k in -GRID_SIZE..=GRID_SIZE {
        points.push(Point3::new(
          i as f64 * spacing,
          j as f64 * spacing,
          k as f64 * spacing,
        ));
      }
    }
  }
  points
}
