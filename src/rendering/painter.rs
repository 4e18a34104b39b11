// src/rendering/painter.rs

use super::primitives::{Circle, Line, Primitive, Rgb};
use super::scene::{Scene, Viewport};
use std::f64::consts::PI;

/// Paint one lattice scene onto a `width x height` surface.
///
/// The scene is in logical viewport units; the context is scaled so the
/// 400x400 box fits the surface. Line widths scale along with it.
pub fn draw_scene(
  cr: &cairo::Context,
  scene: &Scene,
  background: Rgb,
  width: f64,
  height: f64,
) -> Result<(), cairo::Error> {
  let (bg_r, bg_g, bg_b) = background;
  cr.set_source_rgb(bg_r, bg_g, bg_b);
  cr.paint()?;

  let vp = Viewport::fit(width, height);
  cr.save()?;
  cr.translate(vp.center_x, vp.center_y);
  cr.scale(vp.scale, vp.scale);

  for primitive in scene.primitives() {
    match primitive {
      Primitive::Line(line) => draw_line(cr, line)?,
      Primitive::Circle(circle) => draw_circle(cr, circle)?,
    }
  }

  cr.restore()
}

fn draw_line(cr: &cairo::Context, line: &Line) -> Result<(), cairo::Error> {
  // A non-finite coordinate would put the context into an error state.
  if ![line.x1, line.y1, line.x2, line.y2].iter().all(|v| v.is_finite()) {
    return Ok(());
  }
  let (r, g, b) = line.stroke;
  cr.set_source_rgba(r, g, b, line.opacity);
  cr.set_line_width(line.stroke_width);
  cr.move_to(line.x1, line.y1);
  cr.line_to(line.x2, line.y2);
  cr.stroke()
}

fn draw_circle(cr: &cairo::Context, circle: &Circle) -> Result<(), cairo::Error> {
  if ![circle.cx, circle.cy, circle.r].iter().all(|v| v.is_finite()) || circle.r <= 0.0 {
    return Ok(());
  }
  let (r, g, b) = circle.fill;
  cr.set_source_rgba(r, g, b, circle.opacity);
  cr.new_sub_path();
  cr.arc(circle.cx, circle.cy, circle.r, 0.0, 2.0 * PI);
  cr.fill()
}
