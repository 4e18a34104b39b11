use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{glib, Application, ApplicationWindow, Frame, Orientation, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

use latview::config::Config;
use latview::panels::sidebar;
use latview::panels::viewports::LatticeViews;
use latview::state::AppState;
use latview::ui::controller::ViewerController;
use latview::utils::logger;

fn main() -> glib::ExitCode {
  let app = Application::builder()
    .application_id("org.mavensgroup.latview")
    .build();

  app.connect_activate(build_ui);
  app.run()
}

fn build_ui(app: &Application) {
  // Console first, so config loading is already logged there.
  let console_view = TextView::builder()
    .editable(false)
    .cursor_visible(false)
    .monospace(true)
    .left_margin(10)
    .right_margin(10)
    .top_margin(10)
    .bottom_margin(10)
    .build();
  if let Err(e) = logger::init(&console_view) {
    eprintln!("Console logger unavailable: {}", e);
  }

  let state = Rc::new(RefCell::new(AppState::new(Config::load())));

  let window = ApplicationWindow::builder()
    .application(app)
    .title("Crystal Lattice & Reciprocal Lattice")
    .default_width(1200)
    .default_height(640)
    .build();

  // Sidebar | (Views over Console)
  let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

  let right_vbox = GtkBox::new(Orientation::Vertical, 0);
  right_vbox.set_hexpand(true);

  let views = LatticeViews::new(&state);
  right_vbox.append(&views.build_panel());

  let info_frame = Frame::new(None);
  let scroll_win = ScrolledWindow::builder()
    .min_content_height(120)
    .child(&console_view)
    .build();
  info_frame.set_child(Some(&scroll_win));
  right_vbox.append(&info_frame);

  let controller = ViewerController::new(state.clone(), views);
  let sidebar_widget = sidebar::build(&controller);

  main_hbox.append(&sidebar_widget);
  main_hbox.append(&right_vbox);
  window.set_child(Some(&main_hbox));

  // Release the frame callback before the widgets go away.
  let c = controller.clone();
  window.connect_close_request(move |_| {
    c.stop_animation();
    glib::Propagation::Proceed
  });

  let autostart = state.borrow().params.is_animating;
  if autostart {
    controller.start_animation();
  }

  window.present();
}
