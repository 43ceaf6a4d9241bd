use tracing::warn;

use crate::app::App;
use crate::catalog::Catalog;
use crate::config::{self, ThemeSetting};
use crate::cover::CoverStore;
use crate::theme::ThemeName;
use crate::transport::Transport;

pub fn theme_name(setting: ThemeSetting) -> ThemeName {
    match setting {
        ThemeSetting::Light => ThemeName::Light,
        ThemeSetting::Dark => ThemeName::Dark,
    }
}

/// Build the initial `App` from the catalog and the ui/playback/cover settings.
pub fn build_app(catalog: Catalog, settings: &config::Settings) -> App {
    let mut transport = Transport::new(catalog);

    if let Some(id) = settings.playback.start_track.as_deref() {
        if !transport.cue(id) {
            warn!(id, "start_track is not in the catalog, starting at the first track");
        }
    }
    if settings.playback.autoplay {
        transport.play();
    }

    let mut app = App::new(transport, CoverStore::new(&settings.cover));
    app.theme = theme_name(settings.ui.theme);
    app.follow_playback = settings.ui.follow_playback;
    app.show_cover = settings.ui.show_cover;
    app
}
