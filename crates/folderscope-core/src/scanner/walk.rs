/// Sequential walks — the size aggregator and the folder info collector.
///
/// Both delegate traversal to `walkdir`'s iterative walker (symbolic links
/// are never followed) and differ only in what they accumulate and in
/// their failure policy: [`folder_size`] skips access errors silently,
/// [`folder_info`] hands them back as [`ScanIssue`]s for the caller to
/// surface.
use crate::model::FolderInfo;
use crate::scanner::{IssueKind, ScanError, ScanIssue};
use std::io;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Recursive byte total of all regular files under `path`.
///
/// Missing or permission-denied entries contribute 0 and are skipped
/// without any report; the partial sum accumulated so far is still
/// returned. Any other I/O error aborts the walk.
pub fn folder_size(path: &Path) -> Result<u64, ScanError> {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tolerate(err)?;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(meta) => total += meta.len(),
            Err(err) => tolerate(err)?,
        }
    }

    Ok(total)
}

/// One recursive walk collecting the byte total, per-extension file
/// counts, and the flat file list.
///
/// Access failures on the root or any subdirectory come back as issues
/// alongside the partial results gathered so far; the caller is expected
/// to surface them to the user. Any other I/O error aborts the walk.
pub fn folder_info(path: &Path) -> Result<(FolderInfo, Vec<ScanIssue>), ScanError> {
    let mut info = FolderInfo::default();
    let mut issues = Vec::new();

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                issues.push(to_issue(err)?);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                issues.push(to_issue(err)?);
                continue;
            }
        };
        info.record_file(&entry.file_name().to_string_lossy(), size);
    }

    Ok((info, issues))
}

/// Convert a tolerated walk error into an issue, or propagate it.
fn to_issue(err: walkdir::Error) -> Result<ScanIssue, ScanError> {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.io_error().and_then(IssueKind::classify) {
        Some(kind) => {
            warn!("cannot access {}: {}", path.display(), err);
            Ok(ScanIssue {
                path,
                kind,
                message: err.to_string(),
            })
        }
        None => Err(into_scan_error(err)),
    }
}

/// Swallow a tolerated walk error, or propagate it.
fn tolerate(err: walkdir::Error) -> Result<(), ScanError> {
    if err.io_error().and_then(IssueKind::classify).is_some() {
        return Ok(());
    }
    Err(into_scan_error(err))
}

fn into_scan_error(err: walkdir::Error) -> ScanError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("directory walk failed"));
    ScanError::Io { path, source }
}
