// src/ui/frame_clock.rs

use crate::animation::FrameScheduler;
use gtk4::prelude::*;
use gtk4::{glib, TickCallbackId, Widget};
use std::cell::RefCell;

/// Frame callbacks driven by a widget's frame clock.
///
/// GTK only ticks while the widget is mapped, so hiding the window pauses
/// the spin without cancelling it.
pub struct TickScheduler {
  widget: Widget,
}

impl TickScheduler {
  pub fn new(widget: &impl IsA<Widget>) -> Self {
    Self {
      widget: widget.upcast_ref::<Widget>().clone(),
    }
  }
}

impl FrameScheduler for TickScheduler {
  type Handle = TickCallbackId;

  fn request_frames(&mut self, on_frame: Box<dyn FnMut()>) -> TickCallbackId {
    let on_frame = RefCell::new(on_frame);
    self.widget.add_tick_callback(move |_, _| {
      (on_frame.borrow_mut())();
      glib::ControlFlow::Continue
    })
  }

  fn cancel(&mut self, handle: TickCallbackId) {
    handle.remove();
  }
}
