// src/animation.rs

//! Frame-driven Z spin.
//!
//! The host supplies a [`FrameScheduler`]: something that calls back once
//! per displayed frame until the returned handle is cancelled. The
//! [`AnimationDriver`] owns at most one such handle and gives it back on
//! `stop`, and on drop, so no callback outlives the driver.

/// Degrees added to the Z rotation each frame.
pub const ROTATION_STEP_DEG: f64 = 0.5;

pub fn advance_angle(degrees: f64) -> f64 {
  (degrees + ROTATION_STEP_DEG).rem_euclid(360.0)
}

pub trait FrameScheduler {
  type Handle;

  /// Invoke `on_frame` once per frame until the handle is cancelled.
  fn request_frames(&mut self, on_frame: Box<dyn FnMut()>) -> Self::Handle;

  /// After this returns, `on_frame` must not run again.
  fn cancel(&mut self, handle: Self::Handle);
}

pub struct AnimationDriver<S: FrameScheduler> {
  scheduler: S,
  pending: Option<S::Handle>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
  pub fn new(scheduler: S) -> Self {
    Self {
      scheduler,
      pending: None,
    }
  }

  pub fn is_running(&self) -> bool {
    self.pending.is_some()
  }

  /// Returns false if already running; the existing callback is kept.
  pub fn start<F: FnMut() + 'static>(&mut self, on_frame: F) -> bool {
    if self.pending.is_some() {
      return false;
    }
    self.pending = Some(self.scheduler.request_frames(Box::new(on_frame)));
    true
  }

  /// Returns false if nothing was running.
  pub fn stop(&mut self) -> bool {
    match self.pending.take() {
      Some(handle) => {
        self.scheduler.cancel(handle);
        true
      }
      None => false,
    }
  }
}

impl<S: FrameScheduler> Drop for AnimationDriver<S> {
  fn drop(&mut self) {
    self.stop();
  }
}
