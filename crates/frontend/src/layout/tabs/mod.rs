//! Tab module
//!
//! - `registry` - Selected View → View (the renderer entry point)
//! - `tab_labels` - button classes for the Navigation Strip

pub mod registry;
pub mod tab_labels;

pub use registry::render_view_content;
pub use tab_labels::tab_class;
