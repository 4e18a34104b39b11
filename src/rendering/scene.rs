// src/rendering/scene.rs

use super::primitives::{Circle, Line, Primitive};
use super::projection::{Projection, Projector};
use crate::config::{Config, RenderStyle};
use crate::model::bonds::{self, Edge};
use crate::model::lattice::{self, LatticeKind};
use crate::state::ViewParams;
use nalgebra::Point3;

/// Side of the square logical viewport, centred on the origin.
pub const VIEWPORT_SIZE: f64 = 400.0;

/// Draw list for one lattice. Lines are painted before circles; each list
/// is ordered back to front.
#[derive(Debug, Clone)]
pub struct Scene {
  pub kind: LatticeKind,
  pub spacing: f64,
  pub lines: Vec<Line>,
  pub circles: Vec<Circle>,
}

impl Scene {
  pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
    self
      .lines
      .iter()
      .map(Primitive::Line)
      .chain(self.circles.iter().map(Primitive::Circle))
  }
}

#[derive(Debug, Clone)]
pub struct Scenes {
  pub real: Scene,
  pub reciprocal: Scene,
}

impl Scenes {
  pub fn get(&self, kind: LatticeKind) -> &Scene {
    match kind {
      LatticeKind::Real => &self.real,
      LatticeKind::Reciprocal => &self.reciprocal,
    }
  }
}

/// Maps the logical viewport onto a device surface: uniform scale,
/// centred, letterboxed along the longer side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub scale: f64,
  pub center_x: f64,
  pub center_y: f64,
}

impl Viewport {
  pub fn fit(width: f64, height: f64) -> Self {
    Self {
      scale: width.min(height).max(0.0) / VIEWPORT_SIZE,
      center_x: width / 2.0,
      center_y: height / 2.0,
    }
  }
}

/// Stable descending sort on `depth` (farthest first).
pub fn sort_back_to_front<T>(items: &mut [T], depth: impl Fn(&T) -> f64) {
  // + 0.0 folds -0.0 into 0.0 so signed zeros tie
  items.sort_by(|a, b| (depth(b) + 0.0).total_cmp(&(depth(a) + 0.0)));
}

/// Project, depth-sort and style one lattice.
///
/// Every point is projected once; bond endpoints reuse those projections.
pub fn compose_scene(
  kind: LatticeKind,
  spacing: f64,
  points: &[Point3<f64>],
  edges: &[Edge],
  projector: &Projector,
  atom_radius: f64,
  style: &RenderStyle,
) -> Scene {
  let (atom_color, bond_color) = style.palette(kind);
  let radius_factor = style.radius_factor(kind);

  let projected: Vec<Projection> = points.iter().map(|p| projector.project(p)).collect();

  let mut segments: Vec<(Projection, Projection)> = edges
    .iter()
    .map(|e| (projected[e.a], projected[e.b]))
    .collect();
  sort_back_to_front(&mut segments, |(p1, p2)| (p1.depth + p2.depth) / 2.0);

  let mut atoms = projected;
  sort_back_to_front(&mut atoms, |p| p.depth);

  let lines = segments
    .into_iter()
    .map(|(p1, p2)| Line {
      x1: p1.x,
      y1: p1.y,
      x2: p2.x,
      y2: p2.y,
      stroke: bond_color,
      stroke_width: style.bond_width,
      opacity: style.bond_opacity,
      depth: (p1.depth + p2.depth) / 2.0,
    })
    .collect();

  let circles = atoms
    .into_iter()
    .map(|p| Circle {
      cx: p.x,
      cy: p.y,
      r: atom_radius * p.scale * radius_factor,
      fill: atom_color,
      opacity: style.atom_opacity,
      depth: p.depth,
    })
    .collect();

  Scene {
    kind,
    spacing,
    lines,
    circles,
  }
}

/// Full pipeline for one lattice: generate, connect, project, sort.
pub fn calculate_scene(kind: LatticeKind, params: &ViewParams, config: &Config) -> Scene {
  let projector = Projector::new(params.rotation(), config.perspective);
  build_with(kind, params, config, &projector)
}

/// Both lattices under the same rotation.
pub fn calculate_scenes(params: &ViewParams, config: &Config) -> Scenes {
  let projector = Projector::new(params.rotation(), config.perspective);
  Scenes {
    real: build_with(LatticeKind::Real, params, config, &projector),
    reciprocal: build_with(LatticeKind::Reciprocal, params, config, &projector),
  }
}

fn build_with(
  kind: LatticeKind,
  params: &ViewParams,
  config: &Config,
  projector: &Projector,
) -> Scene {
  let spacing = kind.spacing_for(params.lattice_spacing);
  let points = lattice::generate_points(spacing);
  let threshold = config
    .threshold_source
    .threshold(params.lattice_spacing, spacing);
  let edges = bonds::find_connections(&points, threshold);

  log::trace!(
    "{}: {} points, {} bonds (spacing {:.2}, threshold {:.2})",
    kind.title(),
    points.len(),
    edges.len(),
    spacing,
    threshold
  );

  compose_scene(
    kind,
    spacing,
    &points,
    &edges,
    projector,
    params.atom_radius,
    &config.style,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::bonds::ThresholdSource;
  use crate::rendering::projection::{Rotation, PERSPECTIVE};
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_sort_descending_depth() {
    let mut depths = vec![5.0, -3.0, 0.0];
    sort_back_to_front(&mut depths, |d| *d);
    assert_eq!(depths, vec![5.0, 0.0, -3.0]);
  }

  #[test]
  fn test_sort_is_stable_for_ties() {
    let mut items = vec![(1, 0.0), (2, 4.0), (3, -0.0), (4, 0.0)];
    sort_back_to_front(&mut items, |(_, d)| *d);
    let order: Vec<i32> = items.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![2, 1, 3, 4]);
  }

  #[test]
  fn test_scene_lists_are_back_to_front() {
    let mut params = ViewParams::default();
    params.set_rotation_x(35.0);
    params.set_rotation_y(20.0);
    let scene = calculate_scene(LatticeKind::Real, &params, &Config::default());

    assert!(scene.circles.windows(2).all(|w| w[0].depth >= w[1].depth));
    assert!(scene.lines.windows(2).all(|w| w[0].depth >= w[1].depth));
    // Nearer atoms are drawn larger.
    assert!(scene.circles.first().unwrap().r < scene.circles.last().unwrap().r);
  }

  #[test]
  fn test_primitives_emit_lines_before_circles() {
    let scene = calculate_scene(LatticeKind::Real, &ViewParams::default(), &Config::default());
    let kinds: Vec<bool> = scene
      .primitives()
      .map(|p| matches!(p, Primitive::Circle(_)))
      .collect();
    assert_eq!(kinds.len(), scene.lines.len() + scene.circles.len());
    let first_circle = kinds.iter().position(|c| *c).unwrap();
    assert!(kinds[first_circle..].iter().all(|c| *c));
    assert_eq!(first_circle, scene.lines.len());
  }

  #[test]
  fn test_line_depth_is_mean_of_endpoints() {
    let points = vec![Point3::new(0.0, 0.0, 10.0), Point3::new(0.0, 0.0, -30.0)];
    let edges = vec![Edge { a: 0, b: 1 }];
    let projector = Projector::new(Rotation::default(), PERSPECTIVE);
    let scene = compose_scene(
      LatticeKind::Real,
      40.0,
      &points,
      &edges,
      &projector,
      6.0,
      &RenderStyle::default(),
    );
    assert_abs_diff_eq!(scene.lines[0].depth, -10.0);
    assert_eq!(scene.circles[0].depth, 10.0);
    assert_eq!(scene.lines[0].opacity, 0.4);
    assert_eq!(scene.circles[0].opacity, 0.8);
    assert_eq!(scene.lines[0].stroke_width, 1.0);
  }

  #[test]
  fn test_palettes_differ_per_lattice() {
    let scenes = calculate_scenes(&ViewParams::default(), &Config::default());
    let style = RenderStyle::default();
    assert_eq!(scenes.real.circles[0].fill, style.real_atom_color);
    assert_eq!(scenes.reciprocal.circles[0].fill, style.reciprocal_atom_color);
    assert_eq!(scenes.real.lines[0].stroke, style.real_bond_color);
    assert_eq!(scenes.reciprocal.lines[0].stroke, style.reciprocal_bond_color);
  }

  #[test]
  fn test_own_spacing_threshold_limits_reciprocal_bonds() {
    let mut config = Config::default();
    config.threshold_source = ThresholdSource::OwnSpacing;
    let scene = calculate_scene(LatticeKind::Reciprocal, &ViewParams::default(), &config);
    assert_eq!(scene.lines.len(), 300);
  }

  #[test]
  fn test_viewport_fit() {
    let vp = Viewport::fit(800.0, 400.0);
    assert_eq!(vp.scale, 1.0);
    assert_eq!((vp.center_x, vp.center_y), (400.0, 200.0));
    assert_eq!(Viewport::fit(200.0, 300.0).scale, 0.5);
  }
}
