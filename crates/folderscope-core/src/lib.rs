/// FolderScope Core — scanning and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Arena-allocated file tree, per-scan folder statistics,
///   and display formatting.
/// - [`scanner`] — Synchronous filesystem traversal: size aggregation,
///   folder statistics collection, and tree building.
pub mod model;
pub mod scanner;
