/// Arena-backed file tree with O(n) bottom-up size aggregation.
///
/// All nodes live in a single `Vec<FileNode>`. Relationships between nodes
/// use `NodeIndex` (a thin `u32` wrapper) rather than heap pointers, giving
/// cache-friendly traversal. The arena doubles as the node-to-path side
/// table: `NodeIndex` is the stable row identifier and full paths are
/// reconstructed on demand by walking parent links. A new scan builds a
/// fresh tree, so the association is cleared wholesale with the old arena.
use super::file_node::{FileNode, NodeIndex};
use compact_str::CompactString;
use std::path::PathBuf;

/// The complete file tree produced by a scan.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Arena: every node in a flat, cache-friendly vector.
    pub nodes: Vec<FileNode>,

    /// The scan root, `None` only for an empty tree.
    pub root: Option<NodeIndex>,

    /// Total logical size under the root.
    pub total_size: u64,
}

impl FileTree {
    /// Create an empty tree with pre-allocated capacity.
    ///
    /// `estimated_nodes` should be a rough upper bound. The arena grows if
    /// needed, but pre-allocation avoids repeated re-allocation while the
    /// builder inserts nodes.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(estimated_nodes),
            root: None,
            total_size: 0,
        }
    }

    /// Allocate a new node in the arena and return its index.
    pub fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Add the root directory to the tree. Its label is the absolute
    /// scan-root path.
    pub fn add_root(&mut self, label: CompactString) -> NodeIndex {
        let node = FileNode::new_dir(label, None);
        let idx = self.add_node(node);
        self.root = Some(idx);
        idx
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// O(1) via the `last_child` append point; children are kept in the
    /// order they were inserted.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.nodes[child.idx()].parent = Some(parent);
        match self.nodes[parent.idx()].last_child {
            Some(prev) => self.nodes[prev.idx()].next_sibling = Some(child),
            None => self.nodes[parent.idx()].first_child = Some(child),
        }
        self.nodes[parent.idx()].last_child = Some(child);
    }

    /// Compute folder sizes and transitive file counts in a single
    /// bottom-up pass.
    ///
    /// Children are always inserted after their parent in the arena (the
    /// builder allocates a directory's children while visiting it), so
    /// iterating in *reverse* guarantees that every child is processed
    /// before its parent. This gives O(n) aggregation with no recursion
    /// and no stack.
    ///
    /// Safe to call repeatedly — directory totals are reset before each
    /// pass so values don't accumulate.
    pub fn aggregate_sizes(&mut self) {
        for node in self.nodes.iter_mut() {
            if node.is_dir {
                node.size = 0;
                node.file_count = 0;
            }
        }

        // Reverse pass: children before parents.
        for i in (0..self.nodes.len()).rev() {
            let node = &self.nodes[i];
            let (size, files) = if node.is_dir {
                (node.size, node.file_count)
            } else {
                (node.size, 1)
            };
            if let Some(parent_idx) = node.parent {
                self.nodes[parent_idx.idx()].size += size;
                self.nodes[parent_idx.idx()].file_count += files;
            }
        }

        self.total_size = self.root.map(|r| self.nodes[r.idx()].size).unwrap_or(0);
    }

    /// Reconstruct the full filesystem path for a node by walking up to
    /// the root, whose label is the absolute scan-root path.
    pub fn full_path(&self, index: NodeIndex) -> PathBuf {
        let mut segments = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            segments.push(self.nodes[idx.idx()].name.as_str());
            current = self.nodes[idx.idx()].parent;
        }

        let mut path = PathBuf::new();
        for segment in segments.iter().rev() {
            path.push(segment);
        }
        path
    }

    /// Direct children of a node, in insertion order.
    pub fn children(&self, parent: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        let mut child = self.nodes[parent.idx()].first_child;
        while let Some(idx) = child {
            children.push(idx);
            child = self.nodes[idx.idx()].next_sibling;
        }
        children
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_aggregation() {
        let mut tree = FileTree::with_capacity(10);

        // Build: root -> docs -> (a.txt: 100, b.txt: 200)
        let root = tree.add_root(CompactString::new("/data"));
        let dir = tree.add_node(FileNode::new_dir(CompactString::new("docs"), Some(root)));
        tree.add_child(root, dir);

        let file_a = tree.add_node(FileNode::new_file(
            CompactString::new("a.txt"),
            100,
            Some(dir),
        ));
        tree.add_child(dir, file_a);

        let file_b = tree.add_node(FileNode::new_file(
            CompactString::new("b.txt"),
            200,
            Some(dir),
        ));
        tree.add_child(dir, file_b);

        tree.aggregate_sizes();

        assert_eq!(tree.node(dir).size, 300);
        assert_eq!(tree.node(root).size, 300);
        assert_eq!(tree.node(dir).file_count, 2);
        assert_eq!(tree.node(root).file_count, 2);
        assert_eq!(tree.total_size, 300);
    }

    /// Aggregation must be repeatable: a second pass yields the same
    /// totals instead of doubling them.
    #[test]
    fn test_aggregation_is_idempotent() {
        let mut tree = FileTree::with_capacity(4);
        let root = tree.add_root(CompactString::new("/data"));
        let file = tree.add_node(FileNode::new_file(
            CompactString::new("a.bin"),
            500,
            Some(root),
        ));
        tree.add_child(root, file);

        tree.aggregate_sizes();
        tree.aggregate_sizes();

        assert_eq!(tree.node(root).size, 500);
        assert_eq!(tree.total_size, 500);
    }

    #[test]
    fn test_full_path() {
        let mut tree = FileTree::with_capacity(4);
        let root = tree.add_root(CompactString::new("/data"));
        let dir = tree.add_node(FileNode::new_dir(CompactString::new("docs"), Some(root)));
        tree.add_child(root, dir);
        let file = tree.add_node(FileNode::new_file(
            CompactString::new("test.txt"),
            50,
            Some(dir),
        ));
        tree.add_child(dir, file);

        assert_eq!(tree.full_path(file), PathBuf::from("/data/docs/test.txt"));
        assert_eq!(tree.full_path(root), PathBuf::from("/data"));
    }

    /// Children come back in the order they were attached.
    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = FileTree::with_capacity(5);
        let root = tree.add_root(CompactString::new("/data"));

        let dir = tree.add_node(FileNode::new_dir(CompactString::new("sub"), Some(root)));
        tree.add_child(root, dir);

        let first = tree.add_node(FileNode::new_file(
            CompactString::new("first.txt"),
            10,
            Some(root),
        ));
        tree.add_child(root, first);

        let second = tree.add_node(FileNode::new_file(
            CompactString::new("second.txt"),
            20,
            Some(root),
        ));
        tree.add_child(root, second);

        assert_eq!(tree.children(root), vec![dir, first, second]);
    }

    /// An empty tree aggregates to a zero total without panicking.
    #[test]
    fn test_empty_tree_aggregation() {
        let mut tree = FileTree::with_capacity(0);
        tree.aggregate_sizes();
        assert_eq!(tree.total_size, 0);
        assert!(tree.is_empty());
    }
}
