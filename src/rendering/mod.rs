#[cfg(feature = "gui")]
pub mod painter;
pub mod primitives;
pub mod projection;
pub mod scene;
