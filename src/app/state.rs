use std::time::Instant;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewMode {
    Library,
    Showcase,
    Detail,
}

/// Library view state
#[derive(Default)]
pub struct LibraryState {
    pub selected_filter: usize,
    pub selected_entry: usize,
    pub selected_tab: usize,
}

/// Showcase view state
pub struct ShowcaseState {
    pub current_slide: usize,
    pub last_advance: Instant,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            current_slide: 0,
            last_advance: Instant::now(),
        }
    }
}

/// Detail view state
#[derive(Default)]
pub struct DetailState {
    /// Id of the entry being inspected
    pub entry_id: Option<String>,
}

/// Modal dialog state
#[derive(Default)]
pub enum DialogMode {
    #[default]
    None,
    ConfirmDelete {
        entry_id: String,
        entry_name: String,
    },
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::None)
    }
}

/// Transient status bar message
pub struct StatusMessage {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }
}
