/// Summary panel — file-type breakdown of the completed scan.
use crate::state::AppState;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use folderscope_core::model::size::format_count;

/// Draw the file-type summary table.
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("File Types");
    ui.add_space(4.0);

    let Some(ref info) = state.info else {
        ui.label(
            egui::RichText::new("Available after a scan completes.")
                .color(color_muted)
                .size(12.0),
        );
        return;
    };

    if info.file_type_counts.is_empty() {
        ui.label(
            egui::RichText::new("No files found.")
                .color(color_muted)
                .size(12.0),
        );
        return;
    }

    // Largest bucket first, ties broken by key for a stable display.
    let mut entries: Vec<(&str, u64)> = info
        .file_type_counts
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.label(
                    egui::RichText::new("Extension")
                        .size(12.0)
                        .color(color_muted),
                );
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Files").size(12.0).color(color_muted));
            });
        })
        .body(|mut body| {
            for (ext, count) in entries {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let label = if ext.is_empty() { "(no extension)" } else { ext };
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(format_count(count));
                    });
                });
            }
        });
}
