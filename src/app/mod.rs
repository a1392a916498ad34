pub mod state;
mod navigation;
mod sound;

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::catalog::local::LocalStore;
use crate::catalog::remote::RemoteStore;
use crate::catalog::CatalogService;
use crate::config::Config;
use crate::entry::{CategoryFilter, Entry};
use crate::playback::{PlaybackEvent, SoundPlayer};
use crate::views::{self, SHOWCASE_SIZE};

pub use state::{
    DetailState, DialogMode, LibraryState, ShowcaseState, StatusMessage, ViewMode,
};

pub struct App {
    // View state
    pub view_mode: ViewMode,
    pub library: LibraryState,
    pub showcase: ShowcaseState,
    pub detail: DetailState,
    pub dialog: DialogMode,

    // Catalog data, in store order
    pub entries: Vec<Entry>,

    // Core components
    pub catalog: CatalogService,
    pub sound: SoundPlayer,
    pub playback_rx: mpsc::UnboundedReceiver<PlaybackEvent>,

    pub debug_log: VecDeque<String>,
    pub show_debug: bool,
    pub status_message: Option<StatusMessage>,

    // Configuration
    pub config: Config,
}

impl App {
    pub async fn new() -> Result<Self> {
        let mut debug_log = VecDeque::new();
        debug_log.push_back("Starting mobdex...".to_string());

        // Load configuration
        let config = match Config::load() {
            Ok(cfg) => {
                debug_log.push_back("Configuration loaded".to_string());
                debug_log.push_back(format!("  Backend: {}", cfg.catalog.backend));
                debug_log.push_back(format!("  API: {}", cfg.api.base_url));
                cfg
            }
            Err(e) => {
                debug_log.push_back(format!("Failed to load config: {}, using defaults", e));
                Config::default()
            }
        };

        // Build the catalog backend
        let catalog = if config.catalog.backend == "local" {
            let store = LocalStore::new()?;
            let service = CatalogService::new(Box::new(store));
            if config.catalog.seed_local {
                match service.seed_if_empty().await {
                    Ok(0) => {}
                    Ok(n) => debug_log.push_back(format!("Seeded local store with {} entries", n)),
                    Err(e) => debug_log.push_back(format!("Could not seed local store: {}", e)),
                }
            }
            service
        } else {
            let store = RemoteStore::new(&config.api)?;
            CatalogService::new(Box::new(store))
        };
        debug_log.push_back(format!("Catalog backend: {}", catalog.backend_name()));

        // Load the catalog, falling back to the bundled dataset offline
        let entries = catalog.load_all().await;
        debug_log.push_back(format!("Loaded {} creatures", entries.len()));

        // Probe for an audio player
        let (sound, playback_rx) = SoundPlayer::new(&config.sound.player);
        match sound.player_name() {
            Some(name) => debug_log.push_back(format!("Sound player: {}", name)),
            None => debug_log.push_back("No audio player found, sound disabled".to_string()),
        }

        Ok(Self {
            view_mode: ViewMode::Library,
            library: LibraryState::default(),
            showcase: ShowcaseState::default(),
            detail: DetailState::default(),
            dialog: DialogMode::None,
            entries,
            catalog,
            sound,
            playback_rx,
            debug_log,
            show_debug: false,
            status_message: None,
            config,
        })
    }

    pub fn add_debug(&mut self, msg: String) {
        tracing::debug!("{}", msg);
        self.debug_log.push_back(msg);
        while self.debug_log.len() > 100 {
            self.debug_log.pop_front();
        }
    }

    pub fn set_status_error(&mut self, msg: String) {
        self.add_debug(msg.clone());
        self.status_message = Some(StatusMessage::error(msg));
    }

    pub fn set_status_info(&mut self, msg: String) {
        self.status_message = Some(StatusMessage::info(msg));
    }

    pub fn clear_expired_status(&mut self) {
        if let Some(ref msg) = self.status_message {
            if msg.shown_at.elapsed() > Duration::from_secs(5) {
                self.status_message = None;
            }
        }
    }

    /// Category filters for the library sidebar, derived from the data.
    pub fn filters(&self) -> Vec<CategoryFilter> {
        views::distinct_categories(&self.entries)
    }

    pub fn current_filter(&self) -> CategoryFilter {
        let filters = self.filters();
        filters
            .get(self.library.selected_filter)
            .copied()
            .unwrap_or(CategoryFilter::All)
    }

    /// Entries matching the current category filter, in store order.
    pub fn filtered_entries(&self) -> Vec<Entry> {
        views::filter_by_category(&self.entries, &self.current_filter())
    }

    /// The latest additions, oldest first, for the showcase rotation.
    pub fn showcase_slides(&self) -> Vec<Entry> {
        views::recent_for_showcase(&self.entries, SHOWCASE_SIZE)
    }

    /// The entry the current view is focused on, if any.
    pub fn selected_entry(&self) -> Option<Entry> {
        match self.view_mode {
            ViewMode::Library => {
                let filtered = self.filtered_entries();
                filtered.get(self.library.selected_entry).cloned()
            }
            ViewMode::Showcase => {
                let slides = self.showcase_slides();
                slides.get(self.showcase.current_slide).cloned()
            }
            ViewMode::Detail => self.detail_entry(),
        }
    }

    pub fn detail_entry(&self) -> Option<Entry> {
        let id = self.detail.entry_id.as_deref()?;
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    /// Re-fetch the catalog from the backend.
    pub async fn reload(&mut self) {
        match self.catalog.load_remote().await {
            Ok(entries) => {
                self.set_status_info(format!("Reloaded {} creatures", entries.len()));
                self.entries = entries;
            }
            Err(e) => {
                self.set_status_error(format!("Reload failed: {}", e));
            }
        }
        self.clamp_selection();
    }

    /// Keep selections inside bounds after the data changes.
    pub fn clamp_selection(&mut self) {
        let filters = self.filters();
        if self.library.selected_filter >= filters.len() {
            self.library.selected_filter = filters.len().saturating_sub(1);
        }
        let filtered = self.filtered_entries();
        if self.library.selected_entry >= filtered.len() {
            self.library.selected_entry = filtered.len().saturating_sub(1);
        }
        let slides = self.showcase_slides();
        if self.showcase.current_slide >= slides.len() {
            self.showcase.current_slide = 0;
        }
    }

    /// Periodic work: showcase auto-advance and status expiry.
    pub fn tick(&mut self) {
        self.clear_expired_status();

        if self.view_mode == ViewMode::Showcase {
            let slides = self.showcase_slides();
            let interval = Duration::from_secs(self.config.ui.slide_interval_secs);
            if slides.len() > 1 && self.showcase.last_advance.elapsed() >= interval {
                self.showcase.current_slide = (self.showcase.current_slide + 1) % slides.len();
                self.showcase.last_advance = std::time::Instant::now();
            }
        }
    }

    // ========== Delete dialog ==========

    pub fn open_delete_dialog(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        self.add_debug(format!("Delete dialog for: {}", entry.name));
        self.dialog = DialogMode::ConfirmDelete {
            entry_id: entry.id,
            entry_name: entry.name,
        };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogMode::None;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Delete the entry after confirmation.
    pub async fn delete_from_dialog(&mut self) {
        let (entry_id, entry_name) = match &self.dialog {
            DialogMode::ConfirmDelete {
                entry_id,
                entry_name,
            } => (entry_id.clone(), entry_name.clone()),
            DialogMode::None => return,
        };

        match self.catalog.delete(&entry_id).await {
            Ok(()) => {
                self.entries.retain(|e| e.id != entry_id);
                if self.detail.entry_id.as_deref() == Some(entry_id.as_str()) {
                    self.detail.entry_id = None;
                    if self.view_mode == ViewMode::Detail {
                        self.view_mode = ViewMode::Library;
                    }
                }
                self.clamp_selection();
                self.set_status_info(format!("Deleted '{}'", entry_name));
            }
            Err(e) => {
                self.set_status_error(format!("Failed to delete '{}': {}", entry_name, e));
            }
        }
        self.close_dialog();
    }
}
