//! FolderScope — folder size scanner.
//!
//! Thin binary entry point. All logic lives in the `folderscope-core`
//! and `folderscope-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FolderScope starting");

    let icon = folderscope_gui::icon::generate_icon(64);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FolderScope -- Folder Size Scanner")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([560.0, 400.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FolderScope",
        options,
        Box::new(|cc| Ok(Box::new(folderscope_gui::FolderScopeApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
