use super::App;
use crate::catalog::remote;
use crate::playback::{self, PlaybackEvent};

impl App {
    /// Start the ambient sound of the focused entry. The playing flag is
    /// set immediately and cleared when the player process exits.
    pub fn play_selected_sound(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        if entry.sound.is_empty() {
            self.set_status_info(format!("'{}' has no sound", entry.name));
            return;
        }
        if !self.sound.is_available() {
            self.set_status_error("No audio player found (tried mpv, ffplay)".to_string());
            return;
        }

        let url = remote::asset_url(&self.config.api.base_url, &entry.sound);
        match self.sound.play(&entry.id, &url) {
            Ok(()) => {
                self.entries = playback::start_playback(&self.entries, &entry.id);
                self.add_debug(format!("Playing sound for: {}", entry.name));
            }
            Err(e) => {
                self.set_status_error(format!("Could not play sound: {}", e));
            }
        }
    }

    /// Drain playback completion events and clear the playing flags.
    pub fn handle_playback_events(&mut self) {
        while let Ok(event) = self.playback_rx.try_recv() {
            match event {
                PlaybackEvent::Finished { entry_id } => {
                    self.entries = playback::complete_playback(&self.entries, &entry_id);
                }
            }
        }
    }
}
