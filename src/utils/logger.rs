// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextTag, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// (tag name, foreground, bold)
const LEVEL_TAGS: [(&str, &str, bool); 4] = [
  ("error", "#e53e3e", true),
  ("warn", "#dd6b20", false),
  ("info", "#3182ce", false),
  ("debug", "#a0aec0", false),
];

/// Routes `log` records into the console pane.
struct ConsoleLogger;

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();
  for (name, color, bold) in LEVEL_TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = TextTag::builder()
        .name(name)
        .foreground(color)
        .weight(if bold { 700 } else { 400 })
        .build();
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

fn tag_for(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("✖", "error"),
    Level::Warn => ("▲", "warn"),
    Level::Info => ("●", "info"),
    Level::Debug | Level::Trace => ("·", "debug"),
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    // Our own debug output; only warnings from dependencies.
    if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
      metadata.level() <= Level::Debug
    } else {
      metadata.level() <= Level::Warn
    }
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (icon, tag_name) = tag_for(record.level());
    let msg = format!("{}  {}\n", icon, record.args());

    // Buffers may only be touched from the main loop.
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|weak| weak.upgrade()) else {
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
