//! Options-Handler: Dialog-Flag und Übernahme geänderter Optionen.

use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Öffnet den Options-Dialog über das UI-Flag.
pub fn request_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt geänderte Optionen, persistiert sie und markiert den
/// Kachel-Layer als neu aufzubauen.
pub fn apply(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    let tiles_changed = options.tile_url_template != state.options.tile_url_template
        || options.tile_access_token != state.options.tile_access_token;

    state.options = options;
    if tiles_changed {
        state.ui.tiles_dirty = true;
    }

    state.options.save_to_file(&ViewerOptions::config_path())?;
    Ok(())
}
