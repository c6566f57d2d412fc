/// Bottom status bar — the textual scan summary.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use folderscope_core::model::folder_info::format_file_types;
use folderscope_core::model::size::{format_count, format_mb};

/// Longest extension-mapping string shown inline; the full rendering is
/// available as a hover tooltip.
const MAX_TYPES_INLINE: usize = 80;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(
                    egui::RichText::new("Ready. Select a folder to scan.")
                        .size(12.0)
                        .color(color_weak),
                );
            }
            AppPhase::Results => {
                let Some(ref info) = state.info else {
                    return;
                };

                ui.label(
                    egui::RichText::new(format!(
                        "Total size (with subfolders): {}",
                        format_mb(info.total_size)
                    ))
                    .size(12.0)
                    .color(color_accent),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("{} files", format_count(info.file_total())))
                        .size(12.0)
                        .color(color_normal),
                );

                ui.separator();

                let types = format_file_types(&info.file_type_counts);
                let inline = truncate_middle(&types, MAX_TYPES_INLINE);
                ui.label(
                    egui::RichText::new(format!("File types: {inline}"))
                        .size(12.0)
                        .color(color_normal),
                )
                .on_hover_text(types);

                if state.issue_count > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} skipped", state.issue_count))
                            .size(12.0)
                            .color(color_warning),
                    );
                }

                if let Some(duration) = state.scan_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(color_weak),
                    );
                }

                if let Some(at) = state.scanned_at {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("scanned at {}", at.format("%H:%M:%S")))
                            .size(12.0)
                            .color(color_weak),
                    );
                }
            }
        }
    });
}

/// Truncate a string to fit within `max_len` characters, replacing the
/// middle with "..." if needed. Operates on characters, not bytes, so
/// unusual extensions cannot split a UTF-8 sequence.
fn truncate_middle(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = s.chars().take(half).collect();
    let tail: String = s.chars().skip(char_count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_middle("abc", 10), "abc");
    }

    #[test]
    fn truncate_shortens_long_strings() {
        let long = "a".repeat(100);
        let out = truncate_middle(&long, 21);
        assert_eq!(out.chars().count(), 21);
        assert!(out.contains("..."));
    }
}
