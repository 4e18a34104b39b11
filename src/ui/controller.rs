// src/ui/controller.rs

use super::frame_clock::TickScheduler;
use crate::animation::AnimationDriver;
use crate::panels::viewports::LatticeViews;
use crate::state::{AppState, ViewParams};
use std::cell::RefCell;
use std::rc::Rc;

type ParamsListener = Box<dyn Fn(&ViewParams)>;

/// Single entry point for everything that mutates the view parameters.
///
/// Each change is applied to the state in full, then both views are
/// queued for redraw, then listeners (sidebar widgets) are told so they
/// can mirror the new values.
#[derive(Clone)]
pub struct ViewerController {
  inner: Rc<Inner>,
}

struct Inner {
  state: Rc<RefCell<AppState>>,
  views: LatticeViews,
  driver: RefCell<AnimationDriver<TickScheduler>>,
  listeners: RefCell<Vec<ParamsListener>>,
}

impl ViewerController {
  pub fn new(state: Rc<RefCell<AppState>>, views: LatticeViews) -> Self {
    let driver = AnimationDriver::new(TickScheduler::new(&views.real));
    Self {
      inner: Rc::new(Inner {
        state,
        views,
        driver: RefCell::new(driver),
        listeners: RefCell::new(Vec::new()),
      }),
    }
  }

  pub fn params(&self) -> ViewParams {
    self.inner.state.borrow().params.clone()
  }

  pub fn connect_params_changed<F: Fn(&ViewParams) + 'static>(&self, f: F) {
    self.inner.listeners.borrow_mut().push(Box::new(f));
  }

  pub fn update<F: FnOnce(&mut ViewParams)>(&self, f: F) {
    f(&mut self.inner.state.borrow_mut().params);
    self.inner.views.queue_draw();
    self.notify();
  }

  pub fn reset_rotation(&self) {
    self.update(ViewParams::reset_rotation);
    log::info!("Rotation reset");
  }

  pub fn is_animating(&self) -> bool {
    self.inner.driver.borrow().is_running()
  }

  pub fn start_animation(&self) {
    let state = self.inner.state.clone();
    let views = self.inner.views.clone();
    let started = self.inner.driver.borrow_mut().start(move || {
      state.borrow_mut().params.advance_animation();
      views.queue_draw();
    });
    if started {
      self.update(|p| p.is_animating = true);
      log::info!("Animation started");
    }
  }

  pub fn stop_animation(&self) {
    let stopped = self.inner.driver.borrow_mut().stop();
    if stopped {
      self.update(|p| p.is_animating = false);
      log::info!("Animation stopped at Z = {:.1}°", self.params().rotation_z);
    }
  }

  pub fn toggle_animation(&self) {
    if self.is_animating() {
      self.stop_animation();
    } else {
      self.start_animation();
    }
  }

  fn notify(&self) {
    let params = self.params();
    for listener in self.inner.listeners.borrow().iter() {
      listener(&params);
    }
  }
}
