/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState`
/// without spinning up an egui window, keeping them fast and
/// deterministic. The scan is synchronous, so every test observes its
/// results immediately after `start_scan` returns.
///
/// **Scope:** all user-visible state transitions:
///   - Scan lifecycle (start, results, wholesale reset on re-scan)
///   - Failure-alert queueing and dismissal
///   - Tree-view expansion and collapse row accounting
use folderscope_gui::state::{AppPhase, AppState};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Build a minimal temp directory and return the `TempDir` guard.
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.txt"), 100);
    write_bytes(&tmp.path().join("b.bin"), 200);
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("c.rs"), 300);
    tmp
}

// ── AppState construction ─────────────────────────────────────────────────────

/// A freshly created `AppState` must start in the `Idle` phase with no
/// results and no alerts.
#[test]
fn new_state_is_idle() {
    let state = AppState::new();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.current_tree().is_none());
    assert!(state.current_alert().is_none());
    assert!(state.visible_rows.is_empty());
}

/// Default state must start in dark mode.
#[test]
fn default_state_is_dark_mode() {
    let state = AppState::new();
    assert!(state.dark_mode, "dark mode must be the default");
}

// ── Scan lifecycle ─────────────────────────────────────────────────────────────

/// `start_scan` blocks until the walk completes, so results are available
/// the moment it returns.
#[test]
fn scan_completes_synchronously() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());

    assert_eq!(state.phase, AppPhase::Results);
    let tree = state.current_tree().expect("tree must be populated");
    // root + "sub" dir + 3 files
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.total_size, 600);

    let info = state.info.as_ref().expect("info must be populated");
    assert_eq!(info.total_size, 600);
    assert_eq!(info.file_total(), 3);
    assert!(state.scan_duration.is_some());
    assert!(state.scanned_at.is_some());
}

/// A clean scan must not queue any alerts.
#[test]
fn clean_scan_queues_no_alerts() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    assert!(state.current_alert().is_none());
    assert_eq!(state.issue_count, 0);
}

/// Starting a second scan discards every trace of the first.
#[test]
fn start_scan_resets_previous_results() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();

    state.start_scan(tmp.path().to_path_buf());
    assert_eq!(state.phase, AppPhase::Results);
    state.selected_node = state.visible_rows.first().map(|r| r.node_index);

    // Scan a different (empty) root: old tree, info, and selection must
    // be replaced, not merged.
    let empty = TempDir::new().unwrap();
    state.start_scan(empty.path().to_path_buf());

    assert_eq!(state.phase, AppPhase::Results);
    let tree = state.current_tree().expect("tree");
    assert_eq!(tree.len(), 1, "only the new root node");
    assert_eq!(tree.total_size, 0);
    assert!(state.selected_node.is_none(), "selection must be cleared");
    assert_eq!(state.info.as_ref().unwrap().file_total(), 0);
}

/// Scanning an empty directory yields a single expanded root row.
#[test]
fn empty_directory_shows_single_root_row() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());

    assert_eq!(state.visible_rows.len(), 1);
    assert!(state.visible_rows[0].is_expanded);
    assert_eq!(state.visible_rows[0].depth, 0);
}

// ── Failure alerts ────────────────────────────────────────────────────────────

/// A missing scan root is a reported failure: results stay (empty), and
/// an alert lands in the queue.
#[test]
fn missing_root_queues_an_alert() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("does_not_exist");

    let mut state = AppState::new();
    state.start_scan(gone.clone());

    assert_eq!(state.phase, AppPhase::Results);
    assert_eq!(state.issue_count, 1);
    let alert = state.current_alert().expect("an alert must be queued");
    assert!(
        alert.contains("Failed to access"),
        "unexpected alert text: {alert}"
    );
    assert!(alert.contains(&gone.display().to_string()));
}

/// Dismissing the frontmost alert reveals the next queued one.
#[test]
fn dismiss_alert_advances_the_queue() {
    let mut state = AppState::new();
    state.push_alert("first".to_string());
    state.push_alert("second".to_string());

    assert_eq!(state.current_alert(), Some("first"));
    state.dismiss_alert();
    assert_eq!(state.current_alert(), Some("second"));
    state.dismiss_alert();
    assert!(state.current_alert().is_none());

    // Dismissing with an empty queue is a no-op.
    state.dismiss_alert();
    assert!(state.current_alert().is_none());
}

/// A new scan clears alerts left over from the previous one.
#[test]
fn start_scan_clears_stale_alerts() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.push_alert("stale".to_string());

    state.start_scan(tmp.path().to_path_buf());
    assert!(state.current_alert().is_none());
}

// ── Tree-view expansion ────────────────────────────────────────────────────────

/// After a scan the root row is expanded and its immediate children are
/// visible, collapsed.
#[test]
fn initial_rows_are_root_plus_children() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());

    // root + 3 direct children ("sub", a.txt, b.bin)
    assert_eq!(state.visible_rows.len(), 4);
    assert!(state.visible_rows[0].is_expanded);
    assert!(state.visible_rows[1..].iter().all(|r| !r.is_expanded));
    assert!(state.visible_rows[1..].iter().all(|r| r.depth == 1));
}

/// Expanding a directory adds exactly its children; collapsing removes
/// them again.
#[test]
fn toggle_expand_round_trips() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());

    let dir_row = state
        .visible_rows
        .iter()
        .enumerate()
        .find(|(_, r)| {
            !r.is_expanded
                && state
                    .current_tree()
                    .map(|t| t.node(r.node_index).is_dir)
                    .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .expect("a collapsed directory row must exist");

    let rows_before = state.visible_rows.len();
    state.toggle_expand(dir_row);

    let tree = state.current_tree().expect("tree");
    let child_count = tree.children(state.visible_rows[dir_row].node_index).len();
    assert_eq!(state.visible_rows.len(), rows_before + child_count);
    assert!(state.visible_rows[dir_row].is_expanded);

    state.toggle_expand(dir_row);
    assert_eq!(state.visible_rows.len(), rows_before);
    assert!(!state.visible_rows[dir_row].is_expanded);
}

/// Files cannot be expanded.
#[test]
fn toggle_expand_on_file_is_noop() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());

    let file_row = state
        .visible_rows
        .iter()
        .enumerate()
        .find(|(_, r)| {
            state
                .current_tree()
                .map(|t| !t.node(r.node_index).is_dir)
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .expect("a file row must exist");

    let rows_before = state.visible_rows.len();
    state.toggle_expand(file_row);
    assert_eq!(state.visible_rows.len(), rows_before);
}

/// An out-of-range row index must not panic.
#[test]
fn toggle_expand_out_of_range_is_noop() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    state.toggle_expand(9_999);
}
