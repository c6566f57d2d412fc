/// Scanner module — synchronous filesystem traversal.
///
/// Three blocking operations:
/// - [`walk::folder_size`] — recursive byte total, with access errors
///   silently contributing 0.
/// - [`walk::folder_info`] — one walk collecting the total, per-extension
///   counts, and the per-file list, surfacing access failures to the caller.
/// - [`builder::build_tree`] — explicit-stack walk producing the display
///   tree with bottom-up folder totals.
///
/// [`scan_folder`] runs the collector and the builder back to back; it is
/// what the GUI calls for a scan request. There is no background thread,
/// no progress reporting, and no cancellation: the caller blocks for the
/// duration of the walk.
pub mod builder;
pub mod walk;

use crate::model::{FileTree, FolderInfo};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The two access-failure conditions the scanner tolerates.
///
/// Anything else is out of the taxonomy and aborts the operation that hit
/// it (see [`ScanError`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The entry vanished between listing and inspection, or never existed.
    NotFound,
    /// The entry exists but the process may not read it.
    PermissionDenied,
}

impl IssueKind {
    /// Classify an I/O error into the tolerated taxonomy, or `None` for
    /// everything else.
    pub fn classify(err: &io::Error) -> Option<Self> {
        match err.kind() {
            io::ErrorKind::NotFound => Some(Self::NotFound),
            io::ErrorKind::PermissionDenied => Some(Self::PermissionDenied),
            _ => None,
        }
    }
}

/// A user-visible access failure: the walk continued, but this path's
/// contents are missing from the results.
#[derive(Debug, Clone)]
pub struct ScanIssue {
    /// The path that could not be accessed.
    pub path: PathBuf,
    pub kind: IssueKind,
    /// Human-readable description taken from the underlying error.
    pub message: String,
}

/// Unrecoverable scanner failure.
///
/// Any I/O error outside the NotFound / PermissionDenied taxonomy aborts
/// the operation that encountered it.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Results of one complete scan request.
#[derive(Debug)]
pub struct Scan {
    /// The scan root as the user selected it.
    pub root: PathBuf,
    /// Flat aggregate: total size, extension counts, file list.
    pub info: FolderInfo,
    /// Hierarchical tree for display, folder totals already aggregated.
    pub tree: FileTree,
    /// Access failures encountered by either walk, one entry per path.
    pub issues: Vec<ScanIssue>,
    /// Wall-clock time for both walks.
    pub duration: Duration,
}

/// Run a full scan: info collection plus tree building.
///
/// The two walks observe the filesystem independently, so an unreadable
/// directory can be seen by both; it is reported once (first observation
/// wins).
pub fn scan_folder(path: &Path) -> Result<Scan, ScanError> {
    let start = Instant::now();
    info!("scanning {}", path.display());

    let (info, info_issues) = walk::folder_info(path)?;
    let (tree, tree_issues) = builder::build_tree(path)?;

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut issues = Vec::new();
    for issue in info_issues.into_iter().chain(tree_issues) {
        if seen.insert(issue.path.clone()) {
            issues.push(issue);
        }
    }

    let duration = start.elapsed();
    debug!(
        "scan of {} complete: {} files, {} bytes, {} issue(s) in {:?}",
        path.display(),
        info.files.len(),
        info.total_size,
        issues.len(),
        duration
    );

    Ok(Scan {
        root: path.to_path_buf(),
        info,
        tree,
        issues,
        duration,
    })
}
