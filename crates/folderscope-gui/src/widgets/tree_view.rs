/// Virtualised tree view — the core UI component.
///
/// Only renders rows visible in the viewport, giving O(1) rendering cost
/// regardless of tree size. Uses the flat `visible_rows` list maintained
/// by `AppState`. Two value columns per the scan display rules: files
/// show their direct size and "N/A" as the total; folders show a blank
/// direct size and their recursive total.
use crate::state::AppState;
use egui::{Rect, Response, Sense, Ui, Vec2};
use folderscope_core::model::size::{format_count, format_mb};
use folderscope_core::model::FileTree;

/// Height of each row in pixels.
const ROW_HEIGHT: f32 = 24.0;

/// Indentation per depth level in pixels.
const INDENT_PX: f32 = 20.0;

/// Width reserved at the right edge for the two size columns.
pub const SIZE_COLS_WIDTH: f32 = 240.0;

/// Offset of the "Total Size" column within the reserved area.
pub const TOTAL_COL_OFFSET: f32 = 120.0;

/// Draw the virtualised tree view.
///
/// Returns the response for the outer area so callers can detect
/// interactions (e.g. deselect on background click).
pub fn tree_view(ui: &mut Ui, state: &mut AppState) -> Response {
    let Some(tree) = state.tree.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No scan results. Choose a folder and click Scan.")
                    .color(ui.visuals().weak_text_color()),
            );
        });
        return ui.interact(ui.max_rect(), ui.id().with("empty_tree"), Sense::click());
    };

    // ── Render the tree and collect deferred actions ────────────
    // Mutations are deferred until the tree borrow ends.
    let (toggle_row, new_selection) = render_tree_rows(ui, state, tree);

    // Apply deferred state mutations.
    if let Some(row_idx) = new_selection {
        if row_idx < state.visible_rows.len() {
            state.selected_node = Some(state.visible_rows[row_idx].node_index);
        }
    }
    if let Some(row_idx) = toggle_row {
        state.toggle_expand(row_idx);
    }

    ui.interact(ui.max_rect(), ui.id().with("tree_bg"), Sense::hover())
}

/// Render the virtualised tree rows. Returns (toggle_row, new_selection)
/// indices for deferred state mutation.
fn render_tree_rows(
    ui: &mut Ui,
    state: &AppState,
    tree: &FileTree,
) -> (Option<usize>, Option<usize>) {
    // ── Extract theme-adaptive colours once ─────────────────────────────
    let is_dark = ui.visuals().dark_mode;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_selection = ui.visuals().selection.bg_fill;
    // Hover: slightly opaque tint that works on both light and dark.
    let color_hover = if is_dark {
        egui::Color32::from_rgb(0x35, 0x35, 0x4a)
    } else {
        egui::Color32::from_rgba_unmultiplied(
            color_selection.r(),
            color_selection.g(),
            color_selection.b(),
            40,
        )
    };
    // Icon colours are kept vivid (they read fine on both themes).
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_folder = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    let color_file = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);

    let total_rows = state.visible_rows.len();
    let total_height = total_rows as f32 * ROW_HEIGHT;

    let mut toggle_row: Option<usize> = None;
    let mut new_selection: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Reserve the full virtual height so the scrollbar is correct.
            let (response, mut painter) = ui.allocate_painter(
                Vec2::new(ui.available_width(), total_height),
                Sense::click(),
            );

            let viewport = ui.clip_rect();
            let top_y = response.rect.top();

            // Determine visible range.
            let first_visible = ((viewport.top() - top_y) / ROW_HEIGHT).floor().max(0.0) as usize;
            let last_visible = ((viewport.bottom() - top_y) / ROW_HEIGHT)
                .ceil()
                .min(total_rows as f32) as usize;

            // Render only visible rows.
            for row_idx in first_visible..last_visible {
                if row_idx >= state.visible_rows.len() {
                    break;
                }

                let row = &state.visible_rows[row_idx];
                let node = tree.node(row.node_index);

                let row_rect = Rect::from_min_size(
                    egui::pos2(response.rect.left(), top_y + row_idx as f32 * ROW_HEIGHT),
                    Vec2::new(response.rect.width(), ROW_HEIGHT),
                );

                // Skip if completely outside viewport.
                if !viewport.intersects(row_rect) {
                    continue;
                }

                // Selection highlight.
                let is_selected = state.selected_node == Some(row.node_index);
                if is_selected {
                    painter.rect_filled(row_rect, 0.0, color_selection);
                }

                // Hover highlight.
                let row_response = ui.interact(
                    row_rect,
                    ui.id().with(("tree_row", row_idx)),
                    Sense::click(),
                );

                if row_response.hovered() && !is_selected {
                    painter.rect_filled(row_rect, 0.0, color_hover);
                }

                // Click handling.
                if row_response.clicked() {
                    new_selection = Some(row_idx);
                }
                if row_response.double_clicked() && node.is_dir {
                    toggle_row = Some(row_idx);
                }

                // Context menu.
                row_response.context_menu(|ui| {
                    context_menu(ui, tree, row.node_index);
                });

                // Tooltip with the full path when hovered (useful for
                // truncated names).
                if row_response.hovered() {
                    let tip_text = if node.is_error {
                        format!("{}\n⚠ Could not be read", tree.full_path(row.node_index).display())
                    } else if node.is_dir {
                        format!(
                            "{}\n{} in {} files",
                            tree.full_path(row.node_index).display(),
                            format_mb(node.size),
                            format_count(node.file_count),
                        )
                    } else {
                        format!(
                            "{}\n{}",
                            tree.full_path(row.node_index).display(),
                            format_mb(node.size),
                        )
                    };
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        ui.id().with(("tree_tip", row_idx)),
                        |ui| {
                            ui.label(tip_text);
                        },
                    );
                }

                // Draw row content.
                let indent = INDENT_PX * row.depth as f32;
                let text_x = row_rect.left() + indent + 4.0;
                let text_y = row_rect.center().y;

                // Expand/collapse arrow for directories.
                if node.is_dir {
                    let arrow_text = if row.is_expanded { "▼" } else { "▶" };
                    let arrow_rect = Rect::from_min_size(
                        egui::pos2(row_rect.left() + indent - 14.0, row_rect.top()),
                        Vec2::new(16.0, ROW_HEIGHT),
                    );
                    let arrow_response =
                        ui.interact(arrow_rect, ui.id().with(("arrow", row_idx)), Sense::click());
                    if arrow_response.clicked() {
                        toggle_row = Some(row_idx);
                    }
                    painter.text(
                        egui::pos2(row_rect.left() + indent - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        arrow_text,
                        egui::FontId::proportional(11.0),
                        color_weak,
                    );
                }

                // Icon — error nodes get a warning icon.
                let (icon, icon_color) = if node.is_error {
                    ("⚠", color_warning)
                } else if node.is_dir {
                    ("📁", color_folder)
                } else {
                    ("📄", color_file)
                };
                painter.text(
                    egui::pos2(text_x, text_y),
                    egui::Align2::LEFT_CENTER,
                    icon,
                    egui::FontId::proportional(13.0),
                    icon_color,
                );

                // File/directory name — rendered with text clipping.
                // Error nodes display in muted colour.
                let name_x = text_x + 20.0;
                let right_area_start = row_rect.right() - SIZE_COLS_WIDTH;
                let max_name_w = (right_area_start - name_x - 4.0).max(20.0);
                let name_str = node.name.as_str();

                let name_font = egui::FontId::proportional(13.0);
                let name_color = if node.is_error {
                    color_weak
                } else {
                    color_normal
                };
                let name_galley =
                    painter.layout_no_wrap(name_str.to_string(), name_font, name_color);

                // If the text fits, draw it directly. Otherwise, clip and add ellipsis.
                let text_width = name_galley.size().x;
                if text_width <= max_name_w {
                    painter.galley(
                        egui::pos2(name_x, text_y - name_galley.size().y / 2.0),
                        name_galley,
                        name_color,
                    );
                } else {
                    let clip = Rect::from_min_size(
                        egui::pos2(name_x, row_rect.top()),
                        Vec2::new(max_name_w - 12.0, ROW_HEIGHT),
                    );
                    let prev_clip = painter.clip_rect();
                    painter.set_clip_rect(prev_clip.intersect(clip));
                    painter.galley(
                        egui::pos2(name_x, text_y - name_galley.size().y / 2.0),
                        name_galley,
                        name_color,
                    );
                    painter.set_clip_rect(prev_clip);

                    painter.text(
                        egui::pos2(name_x + max_name_w - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        "…",
                        egui::FontId::proportional(13.0),
                        color_weak,
                    );
                }

                // Direct Size column: a file's own size; blank for folders.
                if !node.is_dir {
                    painter.text(
                        egui::pos2(right_area_start, text_y),
                        egui::Align2::LEFT_CENTER,
                        format_mb(node.size),
                        egui::FontId::proportional(12.0),
                        color_weak,
                    );
                }

                // Total Size column: recursive total for folders; "N/A"
                // for files.
                let total_text = if node.is_dir {
                    format_mb(node.size)
                } else {
                    "N/A".to_string()
                };
                painter.text(
                    egui::pos2(right_area_start + TOTAL_COL_OFFSET, text_y),
                    egui::Align2::LEFT_CENTER,
                    &total_text,
                    egui::FontId::proportional(12.0),
                    if node.is_dir { color_normal } else { color_weak },
                );
            }

            response
        });

    (toggle_row, new_selection)
}

/// Right-click context menu for a tree node.
fn context_menu(ui: &mut Ui, tree: &FileTree, node_index: folderscope_core::model::NodeIndex) {
    let full_path = tree.full_path(node_index);
    let node = tree.node(node_index);

    if ui.button("📋 Copy Path").clicked() {
        ui.ctx().copy_text(full_path.display().to_string());
        ui.close_menu();
    }

    ui.separator();

    if node.is_dir {
        ui.label(format!("Total: {}", format_mb(node.size)));
        ui.label(format!("Files: {}", format_count(node.file_count)));
    } else {
        ui.label(format!("Size: {}", format_mb(node.size)));
    }
}
