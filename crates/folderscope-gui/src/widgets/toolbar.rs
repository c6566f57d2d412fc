/// Top action bar -- folder selection, scan trigger, theme toggle, about.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🗂 FolderScope")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Browse: native folder picker. Blocks until the dialog closes,
        // then scans immediately -- the same gesture as the original
        // "Scan Folders" flow.
        if ui
            .button("📁 Browse")
            .on_hover_text("Select a folder to scan")
            .clicked()
        {
            if let Some(folder) = rfd::FileDialog::new()
                .set_title("Select a folder to scan")
                .pick_folder()
            {
                state.path_input = folder.to_string_lossy().into_owned();
                state.start_scan(folder);
            }
        }

        // Editable path field for typing or pasting a folder directly.
        let path_edit = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("Folder to scan")
                .desired_width(320.0),
        );

        let can_scan = !state.path_input.trim().is_empty();
        let scan_btn = ui.add_enabled(
            can_scan,
            egui::Button::new("▶ Scan").min_size(egui::vec2(70.0, 28.0)),
        );
        let submitted =
            path_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (scan_btn.clicked() || submitted) && can_scan {
            let path = std::path::PathBuf::from(state.path_input.trim());
            state.start_scan(path);
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About FolderScope").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
