/// Details panel — information about the currently selected node.
use crate::state::AppState;
use egui::Ui;
use folderscope_core::model::size::{format_count, format_mb};

/// Draw the details panel for the currently selected node.
pub fn details_panel(ui: &mut Ui, state: &AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    let Some(selected) = state.selected_node else {
        ui.label(
            egui::RichText::new("Select an item to see details")
                .color(color_muted)
                .italics(),
        );
        return;
    };

    let Some(tree) = state.current_tree() else {
        return;
    };

    // Guard against stale indices pointing beyond the current tree.
    if selected.idx() >= tree.len() {
        return;
    }

    let node = tree.node(selected);
    let full_path = tree.full_path(selected);

    ui.heading(
        egui::RichText::new(if node.is_error {
            "⚠"
        } else if node.is_dir {
            "📁"
        } else {
            "📄"
        })
        .size(16.0),
    );
    ui.add_space(2.0);

    // Error badge.
    if node.is_error {
        ui.label(
            egui::RichText::new("Access failed: contents could not be read")
                .size(11.0)
                .color(color_warning)
                .italics(),
        );
        ui.add_space(2.0);
    }

    // Name.
    ui.label(
        egui::RichText::new(node.name.as_str())
            .size(14.0)
            .strong()
            .color(color_normal),
    );

    ui.add_space(4.0);

    // Path.
    ui.label(
        egui::RichText::new(full_path.display().to_string())
            .size(11.0)
            .color(color_muted),
    );

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    // Stats grid.
    egui::Grid::new("details_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            if node.is_dir {
                ui.label(egui::RichText::new("Total size:").color(color_muted));
                ui.label(
                    egui::RichText::new(format_mb(node.size))
                        .color(color_accent)
                        .strong(),
                );
                ui.end_row();

                ui.label(egui::RichText::new("Files:").color(color_muted));
                ui.label(egui::RichText::new(format_count(node.file_count)).color(color_normal));
                ui.end_row();
            } else {
                ui.label(egui::RichText::new("Direct size:").color(color_muted));
                ui.label(
                    egui::RichText::new(format_mb(node.size))
                        .color(color_accent)
                        .strong(),
                );
                ui.end_row();
            }
        });

    ui.add_space(8.0);

    if ui.button("📋 Copy Path").clicked() {
        ui.ctx().copy_text(full_path.display().to_string());
    }
}
