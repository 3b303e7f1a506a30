//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod input_box;
pub mod logs;
pub mod results;
pub mod sidebar;
