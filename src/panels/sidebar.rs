// src/panels/sidebar.rs

use crate::state::{ViewParams, RADIUS_MAX, RADIUS_MIN, SPACING_MAX, SPACING_MIN};
use crate::ui::controller::ViewerController;
use gdk4 as gdk;
use gtk4::prelude::*;
use gtk4::{
  Adjustment, Align, Box as GtkBox, Button, CssProvider, Expander, Label, Orientation, PolicyType,
  Scale, ScrolledWindow, STYLE_PROVIDER_PRIORITY_APPLICATION,
};

fn animation_label(is_animating: bool) -> &'static str {
  if is_animating {
    "Stop Animation"
  } else {
    "Start Animation"
  }
}

/// Slider with a left-aligned caption. Values snap to `step`.
fn create_slider(
  label: &str,
  min: f64,
  max: f64,
  step: f64,
  val: f64,
  callback: Box<dyn Fn(f64)>,
) -> (GtkBox, Adjustment) {
  let b = GtkBox::new(Orientation::Vertical, 2);
  b.append(&Label::builder().label(label).halign(Align::Start).build());

  let adj = Adjustment::new(val, min, max, step, step, 0.0);
  let scale = Scale::new(Orientation::Horizontal, Some(&adj));
  scale.add_css_class("thin-slider");
  scale.set_digits(0);
  scale.set_draw_value(true);
  scale.set_value_pos(gtk4::PositionType::Right);
  scale.set_width_request(256);

  scale.connect_value_changed(move |sc| {
    let raw = sc.value();
    let snapped = (raw / step).round() * step;
    if (raw - snapped).abs() > 0.0001 {
      sc.set_value(snapped);
      return;
    }
    callback(snapped);
  });
  b.append(&scale);
  (b, adj)
}

/// Leaves 360 on the slider when the state holds the equivalent 0.
fn sync_angle(adj: &Adjustment, degrees: f64) {
  if (adj.value().rem_euclid(360.0) - degrees).abs() > 1e-9 {
    adj.set_value(degrees);
  }
}

pub fn build(controller: &ViewerController) -> ScrolledWindow {
  let provider = CssProvider::new();
  provider.load_from_data(
    "
        scale.thin-slider slider {
            min-width: 6px;
            min-height: 18px;
            margin-top: -7px;
            margin-bottom: -7px;
            border-radius: 2px;
            background-color: #3182ce;
        }
        button.lattice-action {
            background: #4299e1;
            color: white;
        }
        button.lattice-action:hover {
            background: #3182ce;
        }
    ",
  );
  if let Some(display) = gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }

  let scroll = ScrolledWindow::builder()
    .hscrollbar_policy(PolicyType::Never)
    .vscrollbar_policy(PolicyType::Automatic)
    .min_content_width(300)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 10);
  root_vbox.set_margin_start(10);
  root_vbox.set_margin_end(10);
  root_vbox.set_margin_top(10);
  root_vbox.set_margin_bottom(10);
  scroll.set_child(Some(&root_vbox));

  let initial = controller.params();

  // --- Actions ---
  let button_row = GtkBox::new(Orientation::Horizontal, 12);

  let animate_btn = Button::with_label(animation_label(controller.is_animating()));
  animate_btn.add_css_class("lattice-action");
  let c = controller.clone();
  animate_btn.connect_clicked(move |_| c.toggle_animation());
  button_row.append(&animate_btn);

  let reset_btn = Button::with_label("Reset Rotation");
  reset_btn.add_css_class("lattice-action");
  let c = controller.clone();
  reset_btn.connect_clicked(move |_| c.reset_rotation());
  button_row.append(&reset_btn);

  root_vbox.append(&button_row);

  // --- Sliders ---
  let controls_expander = Expander::new(Some("Lattice Controls"));
  controls_expander.set_expanded(true);
  let controls_box = GtkBox::new(Orientation::Vertical, 15);
  controls_box.set_margin_top(10);
  controls_box.set_margin_start(5);

  let c = controller.clone();
  let (spacing_row, _) = create_slider(
    "Lattice Spacing",
    SPACING_MIN,
    SPACING_MAX,
    1.0,
    initial.lattice_spacing,
    Box::new(move |v| c.update(|p| p.set_lattice_spacing(v))),
  );
  controls_box.append(&spacing_row);

  let c = controller.clone();
  let (radius_row, _) = create_slider(
    "Atom Size",
    RADIUS_MIN,
    RADIUS_MAX,
    1.0,
    initial.atom_radius,
    Box::new(move |v| c.update(|p| p.set_atom_radius(v))),
  );
  controls_box.append(&radius_row);

  let c = controller.clone();
  let (rot_x_row, rot_x_adj) = create_slider(
    "X Rotation",
    0.0,
    360.0,
    1.0,
    initial.rotation_x,
    Box::new(move |v| c.update(|p| p.set_rotation_x(v))),
  );
  controls_box.append(&rot_x_row);

  let c = controller.clone();
  let (rot_y_row, rot_y_adj) = create_slider(
    "Y Rotation",
    0.0,
    360.0,
    1.0,
    initial.rotation_y,
    Box::new(move |v| c.update(|p| p.set_rotation_y(v))),
  );
  controls_box.append(&rot_y_row);

  controls_expander.set_child(Some(&controls_box));
  root_vbox.append(&controls_expander);

  // Mirror state changes that did not come from these widgets
  // (reset, animation toggled elsewhere). Weak refs avoid a cycle
  // through the controller.
  let btn_weak = animate_btn.downgrade();
  let x_weak = rot_x_adj.downgrade();
  let y_weak = rot_y_adj.downgrade();
  controller.connect_params_changed(move |p: &ViewParams| {
    if let Some(btn) = btn_weak.upgrade() {
      btn.set_label(animation_label(p.is_animating));
    }
    if let Some(adj) = x_weak.upgrade() {
      sync_angle(&adj, p.rotation_x);
    }
    if let Some(adj) = y_weak.upgrade() {
      sync_angle(&adj, p.rotation_y);
    }
  });

  scroll
}
