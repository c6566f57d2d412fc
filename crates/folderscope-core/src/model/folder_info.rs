/// Flat per-scan folder statistics produced by the info collector walk.
use std::collections::HashMap;
use std::path::Path;

/// One regular file seen during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name only, not the full path.
    pub name: String,
    /// Byte size.
    pub size: u64,
}

/// Aggregate statistics for a scan root.
///
/// Produced once per scan, immutable afterwards, and discarded wholesale
/// when the next scan starts.
#[derive(Debug, Clone, Default)]
pub struct FolderInfo {
    /// Sum of byte sizes of every regular file under the root.
    pub total_size: u64,

    /// File count per extension. Keys are lowercased, include the leading
    /// dot, and the empty string buckets extension-less files.
    pub file_type_counts: HashMap<String, u64>,

    /// Every file seen, in traversal order. The order is whatever the
    /// directory listing produced and is not guaranteed across runs.
    pub files: Vec<FileRecord>,
}

impl FolderInfo {
    /// Record one regular file: running total, extension bucket, file list.
    pub fn record_file(&mut self, name: &str, size: u64) {
        self.total_size += size;
        *self
            .file_type_counts
            .entry(extension_key(name))
            .or_insert(0) += 1;
        self.files.push(FileRecord {
            name: name.to_owned(),
            size,
        });
    }

    /// Total number of files recorded.
    pub fn file_total(&self) -> u64 {
        self.files.len() as u64
    }
}

/// Extension bucket for a file name: the lowercased suffix including the
/// leading dot, or the empty string when the name has no extension.
///
/// Follows standard path splitting: "Photo.JPG" -> ".jpg",
/// "archive.tar.gz" -> ".gz", "README" and ".bashrc" -> "".
pub fn extension_key(name: &str) -> String {
    match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

/// Render the extension-count mapping for the summary line, largest bucket
/// first with ties broken by key: `{".txt": 3, ".rs": 2, "": 1}`.
pub fn format_file_types(counts: &HashMap<String, u64>) -> String {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut out = String::from("{");
    for (i, (ext, count)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{ext:?}: {count}"));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extension_key ────────────────────────────────────────────────────

    #[test]
    fn extension_is_lowercased_with_leading_dot() {
        assert_eq!(extension_key("Photo.JPG"), ".jpg");
        assert_eq!(extension_key("main.rs"), ".rs");
        assert_eq!(extension_key("ARCHIVE.ZIP"), ".zip");
    }

    #[test]
    fn only_the_last_suffix_counts() {
        assert_eq!(extension_key("archive.tar.gz"), ".gz");
    }

    #[test]
    fn no_extension_maps_to_empty_key() {
        assert_eq!(extension_key("README"), "");
        assert_eq!(extension_key("Makefile"), "");
    }

    /// Dotfiles have no extension under standard path splitting.
    #[test]
    fn leading_dot_names_have_no_extension() {
        assert_eq!(extension_key(".bashrc"), "");
        assert_eq!(extension_key(".gitignore"), "");
    }

    // ── record_file ──────────────────────────────────────────────────────

    #[test]
    fn record_file_accumulates_everything() {
        let mut info = FolderInfo::default();
        info.record_file("a.txt", 100);
        info.record_file("b.TXT", 200);
        info.record_file("notes", 50);

        assert_eq!(info.total_size, 350);
        assert_eq!(info.file_total(), 3);
        assert_eq!(info.file_type_counts.get(".txt"), Some(&2));
        assert_eq!(info.file_type_counts.get(""), Some(&1));
        assert_eq!(
            info.files[0],
            FileRecord {
                name: "a.txt".to_string(),
                size: 100
            }
        );
    }

    /// Bucket counts must always sum to the number of recorded files.
    #[test]
    fn bucket_counts_sum_to_file_total() {
        let mut info = FolderInfo::default();
        for name in ["a.rs", "b.rs", "c.txt", "README", "d.Toml"] {
            info.record_file(name, 1);
        }
        let bucket_sum: u64 = info.file_type_counts.values().sum();
        assert_eq!(bucket_sum, info.file_total());
    }

    // ── format_file_types ────────────────────────────────────────────────

    #[test]
    fn format_orders_by_count_then_key() {
        let mut counts = HashMap::new();
        counts.insert(".txt".to_string(), 3);
        counts.insert(".rs".to_string(), 2);
        counts.insert("".to_string(), 2);

        assert_eq!(
            format_file_types(&counts),
            r#"{".txt": 3, "": 2, ".rs": 2}"#
        );
    }

    #[test]
    fn format_empty_mapping() {
        assert_eq!(format_file_types(&HashMap::new()), "{}");
    }
}
