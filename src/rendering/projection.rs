// src/rendering/projection.rs

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Distance from the eye to the projection plane, in lattice units.
pub const PERSPECTIVE: f64 = 500.0;

/// Rotation angles in degrees, applied X first, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Rotation {
  pub fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }
}

/// A point after rotation and perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
  /// Screen x, already multiplied by `scale`.
  pub x: f64,
  /// Screen y, already multiplied by `scale`.
  pub y: f64,
  /// Rotated z. Only used as a sort key.
  pub depth: f64,
  /// `perspective / (perspective + depth)`.
  pub scale: f64,
}

/// Rotation + perspective for one frame. Trig is evaluated once here and
/// reused for every point of both lattices.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
  sin_x: f64,
  cos_x: f64,
  sin_y: f64,
  cos_y: f64,
  sin_z: f64,
  cos_z: f64,
  perspective: f64,
}

impl Projector {
  pub fn new(rotation: Rotation, perspective: f64) -> Self {
    let (sin_x, cos_x) = rotation.x.to_radians().sin_cos();
    let (sin_y, cos_y) = rotation.y.to_radians().sin_cos();
    let (sin_z, cos_z) = rotation.z.to_radians().sin_cos();
    Self {
      sin_x,
      cos_x,
      sin_y,
      cos_y,
      sin_z,
      cos_z,
      perspective,
    }
  }

  /// Rotate around X, then Y, then Z. The order is not interchangeable.
  pub fn rotate(&self, p: &Point3<f64>) -> Point3<f64> {
    // Around X
    let y1 = p.y * self.cos_x - p.z * self.sin_x;
    let z1 = p.y * self.sin_x + p.z * self.cos_x;

    // Around Y
    let x2 = p.x * self.cos_y + z1 * self.sin_y;
    let z2 = -p.x * self.sin_y + z1 * self.cos_y;

    // Around Z
    let x3 = x2 * self.cos_z - y1 * self.sin_z;
    let y3 = x2 * self.sin_z + y1 * self.cos_z;

    Point3::new(x3, y3, z2)
  }

  /// Rotate, then apply the perspective divide.
  ///
  /// A rotated depth of exactly `-perspective` divides by zero and yields
  /// an infinite scale. That case is left as is.
  pub fn project(&self, p: &Point3<f64>) -> Projection {
    let r = self.rotate(p);
    let scale = self.perspective / (self.perspective + r.z);
    Projection {
      x: r.x * scale,
      y: r.y * scale,
      depth: r.z,
      scale,
    }
  }
}

/// One-off projection of a single point.
pub fn project(p: &Point3<f64>, rotation: Rotation, perspective: f64) -> Projection {
  Projector::new(rotation, perspective).project(p)
}
