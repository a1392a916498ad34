use std::time::Instant;

use super::state::ViewMode;
use super::App;

impl App {
    pub fn move_down(&mut self) {
        match self.view_mode {
            ViewMode::Library => {
                if self.library.selected_tab == 0 {
                    let filters = self.filters();
                    if !filters.is_empty() {
                        self.library.selected_filter =
                            (self.library.selected_filter + 1).min(filters.len() - 1);
                        self.library.selected_entry = 0;
                    }
                } else {
                    let filtered = self.filtered_entries();
                    if !filtered.is_empty() {
                        self.library.selected_entry =
                            (self.library.selected_entry + 1).min(filtered.len() - 1);
                    }
                }
            }
            ViewMode::Showcase => self.next_slide(),
            ViewMode::Detail => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.view_mode {
            ViewMode::Library => {
                if self.library.selected_tab == 0 {
                    if self.library.selected_filter > 0 {
                        self.library.selected_filter -= 1;
                        self.library.selected_entry = 0;
                    }
                } else if self.library.selected_entry > 0 {
                    self.library.selected_entry -= 1;
                }
            }
            ViewMode::Showcase => self.prev_slide(),
            ViewMode::Detail => {}
        }
    }

    pub fn focus_left(&mut self) {
        if self.view_mode == ViewMode::Library {
            self.library.selected_tab = 0;
        } else if self.view_mode == ViewMode::Showcase {
            self.prev_slide();
        }
    }

    pub fn focus_right(&mut self) {
        if self.view_mode == ViewMode::Library {
            self.library.selected_tab = 1;
        } else if self.view_mode == ViewMode::Showcase {
            self.next_slide();
        }
    }

    /// Manual slide changes restart the auto-advance timer.
    pub fn next_slide(&mut self) {
        let slides = self.showcase_slides();
        if !slides.is_empty() {
            self.showcase.current_slide = (self.showcase.current_slide + 1) % slides.len();
            self.showcase.last_advance = Instant::now();
        }
    }

    pub fn prev_slide(&mut self) {
        let slides = self.showcase_slides();
        if !slides.is_empty() {
            self.showcase.current_slide = self
                .showcase
                .current_slide
                .checked_sub(1)
                .unwrap_or(slides.len() - 1);
            self.showcase.last_advance = Instant::now();
        }
    }

    /// Open the detail view for the focused entry.
    pub fn open_detail(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.detail.entry_id = Some(entry.id);
            self.view_mode = ViewMode::Detail;
        }
    }

    pub fn back_to_library(&mut self) {
        self.view_mode = ViewMode::Library;
    }

    pub fn switch_view(&mut self, mode: ViewMode) {
        if mode == ViewMode::Showcase && self.view_mode != ViewMode::Showcase {
            self.showcase.last_advance = Instant::now();
        }
        self.view_mode = mode;
    }
}
