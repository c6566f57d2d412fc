/// Application state management.
///
/// Centralises all mutable state the UI reads and writes. A scan runs
/// synchronously inside [`AppState::start_scan`]: the UI thread blocks
/// for the duration of the walk (there is no progress reporting, no
/// cancellation, no timeout) and every result field below is rebuilt
/// from scratch when it returns.
use folderscope_core::model::{FileTree, FolderInfo, NodeIndex};
use folderscope_core::scanner::{self, Scan};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No scan has produced results yet.
    Idle,
    /// A scan finished — results (possibly partial) are on display.
    Results,
}

/// A row in the flattened visible-rows list for the virtualised tree view.
#[derive(Clone, Debug)]
pub struct VisibleRow {
    /// Index into the `FileTree` arena.
    pub node_index: NodeIndex,
    /// Nesting depth (0 = root).
    pub depth: u16,
    /// Whether this directory is currently expanded (meaningless for files).
    pub is_expanded: bool,
}

/// Maximum rows in the virtualised tree-view visible-rows list.
///
/// Prevents runaway growth on fully-expanded very large trees. Users can
/// collapse nodes to explore deeper subtrees.
const MAX_VISIBLE_ROWS: usize = 500_000;

/// Maximum individual failure alerts queued per scan.
///
/// Each alert is a modal dialog the user must dismiss; past this many the
/// remainder collapse into a single summary alert instead of flooding the
/// queue.
pub const MAX_ALERTS: usize = 25;

/// All application state.
pub struct AppState {
    // ── Scan input ─────────────────────────────────────
    /// Contents of the editable path field in the toolbar.
    pub path_input: String,

    // ── Results ────────────────────────────────────────
    pub phase: AppPhase,
    pub scan_root: Option<PathBuf>,
    pub tree: Option<FileTree>,
    pub info: Option<FolderInfo>,
    pub issue_count: usize,
    pub scan_duration: Option<Duration>,
    pub scanned_at: Option<chrono::DateTime<chrono::Local>>,

    // ── Tree view ──────────────────────────────────────
    pub visible_rows: Vec<VisibleRow>,
    pub selected_node: Option<NodeIndex>,

    // ── UI state ───────────────────────────────────────
    /// Pending modal failure alerts, oldest first.
    pub alerts: VecDeque<String>,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self {
            path_input: String::new(),
            phase: AppPhase::Idle,
            scan_root: None,
            tree: None,
            info: None,
            issue_count: 0,
            scan_duration: None,
            scanned_at: None,
            visible_rows: Vec::new(),
            selected_node: None,
            alerts: VecDeque::new(),
            show_about: false,
            dark_mode: true,
        }
    }

    /// Scan `path`, replacing any previous results wholesale.
    ///
    /// Blocks until the walk completes. Access failures are queued as
    /// modal alerts; any I/O error outside the tolerated taxonomy aborts
    /// the scan and is itself alerted.
    pub fn start_scan(&mut self, path: PathBuf) {
        // Discard the previous scan entirely before touching the filesystem.
        self.phase = AppPhase::Idle;
        self.scan_root = None;
        self.tree = None;
        self.info = None;
        self.issue_count = 0;
        self.scan_duration = None;
        self.scanned_at = None;
        self.visible_rows.clear();
        self.selected_node = None;
        self.alerts.clear();

        match scanner::scan_folder(&path) {
            Ok(scan) => self.apply_scan(scan),
            Err(err) => {
                tracing::error!("scan of {} aborted: {err}", path.display());
                self.push_alert(format!("Scan of {} aborted: {err}", path.display()));
            }
        }
    }

    /// Install completed scan results and queue its failure alerts.
    fn apply_scan(&mut self, scan: Scan) {
        for issue in scan.issues.iter().take(MAX_ALERTS) {
            self.push_alert(format!(
                "Failed to access {}: {}",
                issue.path.display(),
                issue.message
            ));
        }
        if scan.issues.len() > MAX_ALERTS {
            self.push_alert(format!(
                "{} more entries could not be accessed.",
                scan.issues.len() - MAX_ALERTS
            ));
        }

        self.issue_count = scan.issues.len();
        self.build_initial_visible_rows(&scan.tree);
        self.scan_root = Some(scan.root);
        self.tree = Some(scan.tree);
        self.info = Some(scan.info);
        self.scan_duration = Some(scan.duration);
        self.scanned_at = Some(chrono::Local::now());
        self.phase = AppPhase::Results;
    }

    /// Queue a failure alert for modal display.
    pub fn push_alert(&mut self, message: String) {
        self.alerts.push_back(message);
    }

    /// The alert currently on display, if any.
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Dismiss the alert on display, revealing the next queued one.
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Get a reference to the completed scan tree, if any.
    pub fn current_tree(&self) -> Option<&FileTree> {
        self.tree.as_ref()
    }

    /// Build the initial visible rows: the root expanded, its immediate
    /// children collapsed. Respects [`MAX_VISIBLE_ROWS`] so a root with
    /// a pathological number of direct entries cannot allocate an
    /// unbounded Vec.
    fn build_initial_visible_rows(&mut self, tree: &FileTree) {
        self.visible_rows.clear();

        let Some(root_idx) = tree.root else {
            return;
        };

        self.visible_rows.push(VisibleRow {
            node_index: root_idx,
            depth: 0,
            is_expanded: true,
        });

        for child_idx in tree.children(root_idx) {
            if self.visible_rows.len() >= MAX_VISIBLE_ROWS {
                break;
            }
            self.visible_rows.push(VisibleRow {
                node_index: child_idx,
                depth: 1,
                is_expanded: false,
            });
        }
    }

    /// Toggle expansion of the node at the given row index in
    /// `visible_rows`.
    pub fn toggle_expand(&mut self, row_index: usize) {
        // Disjoint field borrows: tree immutable, visible_rows mutable.
        if let Some(ref tree) = self.tree {
            toggle_expand_inner(&mut self.visible_rows, row_index, tree);
        }
    }
}

/// Toggle-expand implementation operating on the visible_rows vec directly.
///
/// Free function to avoid `&mut self` / `&self.tree` borrow conflict.
fn toggle_expand_inner(visible_rows: &mut Vec<VisibleRow>, row_index: usize, tree: &FileTree) {
    if row_index >= visible_rows.len() {
        return;
    }
    let row = &visible_rows[row_index];
    let node = tree.node(row.node_index);

    if !node.is_dir {
        return; // files can't be expanded
    }

    if row.is_expanded {
        // COLLAPSE: remove all descendants (rows with depth > this row's
        // depth) that follow consecutively.
        let parent_depth = row.depth;
        let remove_start = row_index + 1;
        let mut remove_end = remove_start;
        while remove_end < visible_rows.len() && visible_rows[remove_end].depth > parent_depth {
            remove_end += 1;
        }
        visible_rows.drain(remove_start..remove_end);
        visible_rows[row_index].is_expanded = false;
    } else {
        // EXPAND: insert children immediately after this row, respecting
        // the MAX_VISIBLE_ROWS headroom.
        let node_idx = row.node_index;
        let child_depth = row.depth + 1;
        let children = tree.children(node_idx);
        let insert_pos = row_index + 1;
        let headroom = MAX_VISIBLE_ROWS.saturating_sub(visible_rows.len());

        let new_rows: Vec<VisibleRow> = children
            .into_iter()
            .take(headroom)
            .map(|child_idx| VisibleRow {
                node_index: child_idx,
                depth: child_depth,
                is_expanded: false,
            })
            .collect();

        visible_rows.splice(insert_pos..insert_pos, new_rows);
        visible_rows[row_index].is_expanded = true;
    }
}
