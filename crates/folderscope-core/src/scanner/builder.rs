/// Tree builder — explicit-stack traversal producing the display tree.
///
/// One pass over the filesystem builds the arena; a single bottom-up
/// aggregation pass then fills in every folder's recursive total, so no
/// directory is ever walked twice.
use crate::model::{FileNode, FileTree, NodeIndex};
use crate::scanner::{IssueKind, ScanError, ScanIssue};
use compact_str::CompactString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Arena pre-allocation for a typical scan root. The arena grows past
/// this without re-walking anything.
const ESTIMATED_NODES: usize = 4_096;

/// One directory's immediate entries, partitioned.
struct Listing {
    /// Subdirectories: (name, full path).
    dirs: Vec<(String, PathBuf)>,
    /// Regular files: (name, byte size).
    files: Vec<(String, u64)>,
}

/// A listing failure, split along the scanner's error policy.
enum ListError {
    /// Tolerated: reported to the user, branch traversal stops.
    Access(ScanIssue),
    /// Not tolerated: aborts the whole build.
    Fatal(ScanError),
}

/// Build the display tree for `path`.
///
/// The walk is iterative — an explicit stack instead of recursion, so
/// pathological directory depth cannot overflow the call stack. Each
/// directory's entries are partitioned into subdirectories and regular
/// files; subdirectory nodes are inserted first, then file leaves, both
/// in listing order. A directory that cannot be listed is marked as an
/// error node, recorded as an issue, and not descended into; siblings
/// already queued are unaffected.
///
/// Folder totals and transitive file counts are computed by one bottom-up
/// pass at the end ([`FileTree::aggregate_sizes`]).
pub fn build_tree(path: &Path) -> Result<(FileTree, Vec<ScanIssue>), ScanError> {
    let mut tree = FileTree::with_capacity(ESTIMATED_NODES);
    let mut issues = Vec::new();

    // The root is labelled with the path exactly as the user selected it.
    let root_idx = tree.add_root(CompactString::new(path.to_string_lossy().as_ref()));

    let mut stack: Vec<(NodeIndex, PathBuf)> = vec![(root_idx, path.to_path_buf())];

    while let Some((node_idx, dir_path)) = stack.pop() {
        let listing = match list_directory(&dir_path) {
            Ok(listing) => listing,
            Err(ListError::Access(issue)) => {
                warn!("cannot list {}: {}", issue.path.display(), issue.message);
                tree.nodes[node_idx.idx()].is_error = true;
                issues.push(issue);
                continue;
            }
            Err(ListError::Fatal(err)) => return Err(err),
        };

        // Subfolders first, then files. Within each partition the order is
        // whatever the OS listing returned.
        for (name, sub_path) in listing.dirs {
            let child = tree.add_node(FileNode::new_dir(CompactString::new(&name), Some(node_idx)));
            tree.add_child(node_idx, child);
            stack.push((child, sub_path));
        }
        for (name, size) in listing.files {
            let child = tree.add_node(FileNode::new_file(
                CompactString::new(&name),
                size,
                Some(node_idx),
            ));
            tree.add_child(node_idx, child);
        }
    }

    tree.aggregate_sizes();
    Ok((tree, issues))
}

/// Read one directory's immediate entries, partitioned into subdirectories
/// and regular files. Symlinks and special files belong to neither
/// partition and do not appear in the tree.
fn list_directory(dir: &Path) -> Result<Listing, ListError> {
    let read = fs::read_dir(dir).map_err(|err| access_or_fatal(dir, err))?;

    let mut listing = Listing {
        dirs: Vec::new(),
        files: Vec::new(),
    };

    for entry in read {
        let entry = entry.map_err(|err| access_or_fatal(dir, err))?;
        // DirEntry::metadata does not traverse symlinks, so a link to a
        // directory is classified as a link, never descended into.
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                // The entry vanished or cannot be inspected; it simply
                // does not appear in the tree.
                if IssueKind::classify(&err).is_some() {
                    continue;
                }
                return Err(ListError::Fatal(ScanError::Io {
                    path: entry.path(),
                    source: err,
                }));
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if meta.is_dir() {
            listing.dirs.push((name, entry.path()));
        } else if meta.is_file() {
            listing.files.push((name, meta.len()));
        }
    }

    Ok(listing)
}

/// Split a listing error along the tolerated / fatal boundary.
fn access_or_fatal(dir: &Path, err: io::Error) -> ListError {
    match IssueKind::classify(&err) {
        Some(kind) => ListError::Access(ScanIssue {
            path: dir.to_path_buf(),
            kind,
            message: err.to_string(),
        }),
        None => ListError::Fatal(ScanError::Io {
            path: dir.to_path_buf(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bytes(path: &Path, n: usize) {
        let mut f = File::create(path).unwrap();
        f.write_all(&vec![0u8; n]).unwrap();
    }

    /// The root label must be the absolute path the caller passed in.
    #[test]
    fn root_is_labelled_with_the_scan_path() {
        let tmp = TempDir::new().unwrap();
        let (tree, issues) = build_tree(tmp.path()).unwrap();

        assert!(issues.is_empty());
        let root = tree.root.expect("tree must have a root");
        assert_eq!(
            tree.node(root).name.as_str(),
            tmp.path().to_string_lossy().as_ref()
        );
    }

    /// Subdirectory children come before file children under every parent.
    #[test]
    fn subfolders_are_inserted_before_files() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("zz_file.txt"), 10);
        fs::create_dir(tmp.path().join("aa_dir")).unwrap();
        write_bytes(&tmp.path().join("another.bin"), 20);
        fs::create_dir(tmp.path().join("bb_dir")).unwrap();

        let (tree, _) = build_tree(tmp.path()).unwrap();
        let root = tree.root.unwrap();
        let children = tree.children(root);
        assert_eq!(children.len(), 4);

        let kinds: Vec<bool> = children.iter().map(|&c| tree.node(c).is_dir).collect();
        // All directories first, then all files.
        assert_eq!(kinds, vec![true, true, false, false]);
    }

    /// Folder totals are the recursive sum of contained file sizes.
    #[test]
    fn folder_totals_are_aggregated_bottom_up() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        let nested = sub.join("nested");
        fs::create_dir_all(&nested).unwrap();
        write_bytes(&tmp.path().join("top.bin"), 100);
        write_bytes(&sub.join("mid.bin"), 200);
        write_bytes(&nested.join("deep.bin"), 300);

        let (tree, issues) = build_tree(tmp.path()).unwrap();
        assert!(issues.is_empty());

        let root = tree.root.unwrap();
        assert_eq!(tree.node(root).size, 600);
        assert_eq!(tree.node(root).file_count, 3);
        assert_eq!(tree.total_size, 600);

        let sub_idx = *tree
            .children(root)
            .iter()
            .find(|&&c| tree.node(c).is_dir)
            .unwrap();
        assert_eq!(tree.node(sub_idx).size, 500);
        assert_eq!(tree.node(sub_idx).file_count, 2);
    }

    /// A missing root yields a single error-marked root node, an issue,
    /// and a zero total.
    #[test]
    fn missing_root_becomes_an_error_node() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("does_not_exist");

        let (tree, issues) = build_tree(&gone).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.total_size, 0);

        let root = tree.root.unwrap();
        assert!(tree.node(root).is_error);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NotFound);
        assert_eq!(issues[0].path, gone);
    }
}
