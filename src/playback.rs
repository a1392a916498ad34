//! Transient sound playback.
//!
//! The "is playing" flag is a display overlay over the entry list, never
//! persisted. The pure overlay functions here are reconciled against
//! [`PlaybackEvent`]s emitted when the external player process exits.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::sync::mpsc;

use crate::entry::Entry;

/// Emitted by the player task when a sound finishes (or the player dies).
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    Finished { entry_id: String },
}

/// New entry list with the matching entry's flag set to `true`. Unknown ids
/// are silently ignored; starting an already-playing entry re-confirms the
/// flag rather than erroring.
pub fn start_playback(entries: &[Entry], id: &str) -> Vec<Entry> {
    with_flag(entries, id, true)
}

/// Symmetric to [`start_playback`]; clears the flag.
pub fn complete_playback(entries: &[Entry], id: &str) -> Vec<Entry> {
    with_flag(entries, id, false)
}

fn with_flag(entries: &[Entry], id: &str, playing: bool) -> Vec<Entry> {
    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if entry.id == id {
                entry.is_playing_sound = playing;
            }
            entry
        })
        .collect()
}

/// Arguments for the supported player binaries. Both play audio-only and
/// exit when the file ends, which is what drives the completion event.
fn player_args(player_name: &str, url: &str) -> Vec<String> {
    if player_name.starts_with("ffplay") {
        vec![
            "-nodisp".to_string(),
            "-autoexit".to_string(),
            "-loglevel".to_string(),
            "quiet".to_string(),
            url.to_string(),
        ]
    } else {
        vec![
            "--no-video".to_string(),
            "--really-quiet".to_string(),
            url.to_string(),
        ]
    }
}

/// Plays entry sounds through an external audio player.
pub struct SoundPlayer {
    player_bin: Option<PathBuf>,
    event_tx: mpsc::UnboundedSender<PlaybackEvent>,
}

impl SoundPlayer {
    /// Probe for a player binary and create the completion event channel.
    /// The receiver is polled from the main event loop.
    pub fn new(preferred: &str) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let mut candidates = vec![preferred.to_string()];
        for fallback in ["mpv", "ffplay"] {
            if fallback != preferred {
                candidates.push(fallback.to_string());
            }
        }
        let player_bin = candidates.iter().find_map(|name| which::which(name).ok());

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (
            Self {
                player_bin,
                event_tx,
            },
            event_rx,
        )
    }

    pub fn is_available(&self) -> bool {
        self.player_bin.is_some()
    }

    pub fn player_name(&self) -> Option<String> {
        self.player_bin
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Spawn the player for one sound. The spawned task sends
    /// `PlaybackEvent::Finished` when the process exits, however it exits.
    pub fn play(&self, entry_id: &str, url: &str) -> Result<()> {
        let bin = self
            .player_bin
            .clone()
            .ok_or_else(|| anyhow!("No audio player found (tried mpv, ffplay)"))?;
        let name = bin
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut child = tokio::process::Command::new(&bin)
            .args(player_args(&name, url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let tx = self.event_tx.clone();
        let entry_id = entry_id.to_string();
        tokio::spawn(async move {
            let _ = child.wait().await;
            let _ = tx.send(PlaybackEvent::Finished { entry_id });
        });

        Ok(())
    }
}
