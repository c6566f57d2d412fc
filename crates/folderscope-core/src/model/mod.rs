/// Data model for the FolderScope scan results.
///
/// Re-exports the arena-allocated tree structure and supporting types.
pub mod file_node;
pub mod file_tree;
pub mod folder_info;
pub mod size;

pub use file_node::{FileNode, NodeIndex};
pub use file_tree::FileTree;
pub use folder_info::{FileRecord, FolderInfo};
