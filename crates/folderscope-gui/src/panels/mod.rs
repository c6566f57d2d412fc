/// Panels composing the FolderScope window.

pub mod details_panel;
pub mod summary_panel;
pub mod tree_panel;
