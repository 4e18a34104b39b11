// src/model/bonds.rs

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Bonds form between points no farther apart than `spacing * BOND_TOLERANCE`.
pub const BOND_TOLERANCE: f64 = 1.1;

/// Connection between two lattice points, as indices into the point list.
/// Always `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
  pub a: usize,
  pub b: usize,
}

impl Edge {
  pub fn endpoints<'a>(&self, points: &'a [Point3<f64>]) -> (&'a Point3<f64>, &'a Point3<f64>) {
    (&points[self.a], &points[self.b])
  }

  pub fn connects(&self, i: usize, j: usize) -> bool {
    (self.a == i && self.b == j) || (self.a == j && self.b == i)
  }
}

/// Which spacing feeds the bond threshold of a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdSource {
  /// Both lattices use the real-space spacing (`lattice_spacing * 1.1`).
  LatticeSpacing,
  /// Each lattice uses its own grid spacing.
  OwnSpacing,
}

impl Default for ThresholdSource {
  fn default() -> Self {
    ThresholdSource::LatticeSpacing
  }
}

impl ThresholdSource {
  pub fn threshold(self, lattice_spacing: f64, own_spacing: f64) -> f64 {
    match self {
      ThresholdSource::LatticeSpacing => bond_threshold(lattice_spacing),
      ThresholdSource::OwnSpacing => bond_threshold(own_spacing),
    }
  }
}

pub fn bond_threshold(spacing: f64) -> f64 {
  spacing * BOND_TOLERANCE
}

/// Every unordered pair within `threshold` (inclusive), i-major order.
pub fn find_connections(points: &[Point3<f64>], threshold: f64) -> Vec<Edge> {
  let mut edges = Vec::new();
  for (i, p1) in points.iter().enumerate() {
    for (j, p2) in points.iter().enumerate().skip(i + 1) {
      if nalgebra::distance(p1, p2) <= threshold {
        edges.push(Edge { a: i, b: j });
      }
    }
  }
  edges
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::lattice::{generate_points, reciprocal_spacing};

  fn neighbor_counts(n: usize, edges: &[Edge]) -> Vec<usize> {
    let mut counts = vec![0; n];
    for e in edges {
      counts[e.a] += 1;
      counts[e.b] += 1;
    }
    counts
  }

  fn index_of(points: &[Point3<f64>], p: Point3<f64>) -> usize {
    points
      .iter()
      .position(|q| nalgebra::distance(q, &p) < 1e-9)
      .unwrap()
  }

  #[test]
  fn test_simple_cubic_coordination() {
    let s = 40.0;
    let points = generate_points(s);
    let edges = find_connections(&points, bond_threshold(s));
    let counts = neighbor_counts(points.len(), &edges);

    let center = index_of(&points, Point3::new(0.0, 0.0, 0.0));
    let interior = index_of(&points, Point3::new(40.0, -40.0, 0.0));
    let corner = index_of(&points, Point3::new(80.0, 80.0, -80.0));
    let edge_mid = index_of(&points, Point3::new(80.0, 80.0, 0.0));

    assert_eq!(counts[center], 6);
    assert_eq!(counts[interior], 6);
    assert_eq!(counts[corner], 3);
    assert_eq!(counts[edge_mid], 4);

    // 3 axes * 5 * 5 rows * 4 links per row
    assert_eq!(edges.len(), 300);
  }

  #[test]
  fn test_no_face_diagonals() {
    let s = 25.0;
    let points = generate_points(s);
    let edges = find_connections(&points, bond_threshold(s));
    for e in &edges {
      let (p1, p2) = e.endpoints(&points);
      assert!((nalgebra::distance(p1, p2) - s).abs() < 1e-9);
    }
  }

  #[test]
  fn test_pairs_unique_and_ordered() {
    let points = generate_points(20.0);
    let edges = find_connections(&points, bond_threshold(20.0));
    assert!(edges.iter().all(|e| e.a < e.b));
    assert!(edges.windows(2).all(|w| (w[0].a, w[0].b) < (w[1].a, w[1].b)));
  }

  #[test]
  fn test_threshold_is_inclusive() {
    let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
    let edges = find_connections(&points, 5.0);
    assert_eq!(edges, vec![Edge { a: 0, b: 1 }]);
    assert!(find_connections(&points, 4.999).is_empty());
    assert!(edges[0].connects(1, 0));
  }

  #[test]
  fn test_threshold_source() {
    let recip = reciprocal_spacing(40.0);
    assert!((ThresholdSource::LatticeSpacing.threshold(40.0, recip) - 44.0).abs() < 1e-9);
    assert!((ThresholdSource::OwnSpacing.threshold(40.0, recip) - 11.0).abs() < 1e-9);
  }

  #[test]
  fn test_real_threshold_on_reciprocal_grid_bonds_diagonals() {
    // Spacing 10 with a threshold of 44 reaches well past nearest neighbours.
    let points = generate_points(reciprocal_spacing(40.0));
    let edges = find_connections(&points, bond_threshold(40.0));
    let a = index_of(&points, Point3::new(0.0, 0.0, 0.0));
    let b = index_of(&points, Point3::new(10.0, 10.0, 10.0));
    assert!(edges.iter().any(|e| e.connects(a, b)));
    assert!(edges.len() > 300);
  }
}
