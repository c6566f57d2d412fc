/// Central results panel: column headers plus the tree view.
use crate::state::AppState;
use crate::widgets;
use crate::widgets::tree_view::{SIZE_COLS_WIDTH, TOTAL_COL_OFFSET};
use egui::Ui;

/// Draw the tree panel (centre content area).
pub fn tree_panel(ui: &mut Ui, state: &mut AppState) {
    // Column headers.
    ui.horizontal(|ui| {
        let header_height = 20.0;
        let rect = egui::Rect::from_min_size(
            ui.cursor().min,
            egui::vec2(ui.available_width(), header_height),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, ui.visuals().faint_bg_color);

        ui.allocate_exact_size(
            egui::vec2(ui.available_width(), header_height),
            egui::Sense::hover(),
        );

        let muted = ui.visuals().weak_text_color();
        painter.text(
            egui::pos2(rect.left() + 8.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            "Folder / File Name",
            egui::FontId::proportional(12.0),
            muted,
        );

        let right_start = rect.right() - SIZE_COLS_WIDTH;
        painter.text(
            egui::pos2(right_start, rect.center().y),
            egui::Align2::LEFT_CENTER,
            "Direct Size",
            egui::FontId::proportional(12.0),
            muted,
        );

        painter.text(
            egui::pos2(right_start + TOTAL_COL_OFFSET, rect.center().y),
            egui::Align2::LEFT_CENTER,
            "Total Size",
            egui::FontId::proportional(12.0),
            muted,
        );
    });

    ui.separator();

    // Tree view.
    widgets::tree_view::tree_view(ui, state);
}
