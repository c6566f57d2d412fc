/// A single node in the arena-allocated file tree.
///
/// Nodes are stored in a flat `Vec<FileNode>` for cache-friendly traversal.
/// Parent-child relationships use indices rather than pointers, which also
/// avoids reference-counting overhead.
use compact_str::CompactString;

/// Lightweight index into the arena `Vec<FileNode>`.
///
/// Uses `u32` to keep nodes small — supports up to ~4 billion nodes,
/// which is more than enough for any real filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`, panicking if it exceeds `u32::MAX`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single file or directory in the tree.
///
/// Stored in a flat arena (`Vec<FileNode>`). Children form a singly-linked
/// list via `first_child` / `next_sibling`; `last_child` is the append
/// point, so children stay in insertion order (subfolders first, then
/// files, as the builder inserts them).
#[derive(Debug, Clone)]
pub struct FileNode {
    /// File or directory name only (NOT the full path). The scan root is
    /// the exception: its label is the absolute root path.
    pub name: CompactString,

    /// Byte size. For directories this is the sum of all descendant file
    /// sizes, computed in a single bottom-up pass after the walk.
    pub size: u64,

    /// `true` if this node represents a directory.
    pub is_dir: bool,

    /// Index of the parent node. `None` for the scan root.
    pub parent: Option<NodeIndex>,

    /// First child (directories only).
    pub first_child: Option<NodeIndex>,

    /// Last child under this node — append point for ordered insertion.
    pub last_child: Option<NodeIndex>,

    /// Next sibling under the same parent.
    pub next_sibling: Option<NodeIndex>,

    /// Total number of descendant *files* (not directories).
    pub file_count: u64,

    /// `true` if this directory could not be listed (missing or access
    /// denied). The node stays in the tree so users can see where the
    /// failure occurred.
    pub is_error: bool,
}

impl FileNode {
    /// Create a new file node with the given name and size.
    pub fn new_file(name: CompactString, size: u64, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            size,
            is_dir: false,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            file_count: 0,
            is_error: false,
        }
    }

    /// Create a new directory node.
    pub fn new_dir(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            size: 0,
            is_dir: true,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            file_count: 0,
            is_error: false,
        }
    }
}
