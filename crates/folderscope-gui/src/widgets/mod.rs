/// UI widgets for FolderScope.

pub mod alert;
pub mod status_bar;
pub mod toolbar;
pub mod tree_view;
