pub mod sidebar;
pub mod viewports;
