// src/rendering/primitives.rs

/// Linear RGB, each channel in `[0, 1]`.
pub type Rgb = (f64, f64, f64);

/// Filled atom disc in logical viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub cx: f64,
  pub cy: f64,
  pub r: f64,
  pub fill: Rgb,
  pub opacity: f64,
  pub depth: f64,
}

/// Bond segment in logical viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
  pub x1: f64,
  pub y1: f64,
  pub x2: f64,
  pub y2: f64,
  pub stroke: Rgb,
  pub stroke_width: f64,
  pub opacity: f64,
  pub depth: f64,
}

pub enum Primitive<'a> {
  Circle(&'a Circle),
  Line(&'a Line),
}
