pub mod detail;
pub mod dialog;
pub mod library;
pub mod showcase;
pub mod status_bar;
pub mod theme;

pub use detail::{render_detail_view, DetailViewState};
pub use dialog::{render_dialog, DialogRenderState};
pub use library::{render_library_view, LibraryViewState};
pub use showcase::{render_showcase_view, ShowcaseViewState};
pub use status_bar::{render_status_bar, StatusBarState};
pub use theme::Theme;
