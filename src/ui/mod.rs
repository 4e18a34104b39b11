pub mod controller;
pub mod frame_clock;
