// src/panels/viewports.rs

use crate::model::lattice::LatticeKind;
use crate::rendering::{painter, scene};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, DrawingArea, Frame, Label, Orientation, Overlay};
use std::cell::RefCell;
use std::rc::Rc;

const VIEW_PIXELS: i32 = 400;

/// The two side-by-side drawing areas. Cheap to clone (GObject refs).
#[derive(Clone)]
pub struct LatticeViews {
  pub real: DrawingArea,
  pub reciprocal: DrawingArea,
}

impl LatticeViews {
  pub fn new(state: &Rc<RefCell<AppState>>) -> Self {
    Self {
      real: build_view(LatticeKind::Real, state.clone()),
      reciprocal: build_view(LatticeKind::Reciprocal, state.clone()),
    }
  }

  pub fn queue_draw(&self) {
    self.real.queue_draw();
    self.reciprocal.queue_draw();
  }

  /// Horizontal box holding both views, each framed with its title.
  pub fn build_panel(&self) -> GtkBox {
    let hbox = GtkBox::new(Orientation::Horizontal, 16);
    hbox.set_margin_start(10);
    hbox.set_margin_end(10);
    hbox.set_margin_top(10);
    hbox.set_margin_bottom(10);
    hbox.set_homogeneous(true);
    hbox.append(&framed(&self.real, LatticeKind::Real));
    hbox.append(&framed(&self.reciprocal, LatticeKind::Reciprocal));
    hbox
  }
}

fn build_view(kind: LatticeKind, state: Rc<RefCell<AppState>>) -> DrawingArea {
  let area = DrawingArea::builder()
    .content_width(VIEW_PIXELS)
    .content_height(VIEW_PIXELS)
    .hexpand(true)
    .vexpand(true)
    .build();

  area.set_draw_func(move |_, cr, w, h| {
    let st = state.borrow();
    let scene = scene::calculate_scene(kind, &st.params, &st.config);
    if let Err(e) = painter::draw_scene(
      cr,
      &scene,
      st.config.style.background_color,
      w as f64,
      h as f64,
    ) {
      log::error!("Failed to draw {}: {}", kind.title(), e);
    }
  });

  area
}

fn framed(area: &DrawingArea, kind: LatticeKind) -> Frame {
  let overlay = Overlay::new();
  overlay.set_child(Some(area));

  let title = Label::builder()
    .label(kind.title())
    .halign(Align::Start)
    .valign(Align::Start)
    .margin_start(8)
    .margin_top(8)
    .build();
  title.add_css_class("heading");
  overlay.add_overlay(&title);

  let frame = Frame::new(None);
  frame.set_child(Some(&overlay));
  frame
}
