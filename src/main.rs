use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, time::Duration};

use mobdex::app::{App, ViewMode};
use mobdex::handlers::{handle_key_event, KeyAction};
use mobdex::ui::{
    render_detail_view, render_dialog, render_library_view, render_showcase_view,
    render_status_bar, DetailViewState, DialogRenderState, LibraryViewState, ShowcaseViewState,
    StatusBarState,
};

#[tokio::main]
async fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            eprintln!("Failed to initialize app: {}", e);
            return Err(e);
        }
    };

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let tick = Duration::from_millis(app.config.ui.tick_ms);

    loop {
        app.handle_playback_events();
        app.tick();

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                match handle_key_event(app, key).await {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Continue => {}
                }
            }
        }
    }
}

fn render_ui(f: &mut Frame, app: &mut App) {
    let theme = app.config.theme.clone();

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
    ];
    if app.show_debug {
        constraints.push(Constraint::Length(8)); // Debug panel
    }
    constraints.push(Constraint::Length(3)); // Status bar

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    // Header
    let header_text = format!(
        "Mobdex - {}",
        match app.view_mode {
            ViewMode::Library => "Library",
            ViewMode::Showcase => "Showcase",
            ViewMode::Detail => "Detail",
        }
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    // Main content
    let content_area = main_chunks[1];
    match app.view_mode {
        ViewMode::Library => {
            let filters = app.filters();
            let entries = app.filtered_entries();
            let library_state = LibraryViewState {
                filters: &filters,
                entries: &entries,
                selected_filter: app.library.selected_filter,
                selected_entry: app.library.selected_entry,
                selected_tab: app.library.selected_tab,
                total_count: app.entries.len(),
            };
            render_library_view(f, &library_state, content_area, &theme);
        }
        ViewMode::Showcase => {
            let slides = app.showcase_slides();
            let showcase_state = ShowcaseViewState {
                slides: &slides,
                current_slide: app.showcase.current_slide,
            };
            render_showcase_view(f, &showcase_state, content_area, &theme);
        }
        ViewMode::Detail => {
            let entry = app.detail_entry();
            let detail_state = DetailViewState {
                entry: entry.as_ref(),
            };
            render_detail_view(f, &detail_state, content_area, &theme);
        }
    }

    // Debug panel (only shown when enabled)
    let mut chunk_index = 2;
    if app.show_debug {
        let debug_text: String = app
            .debug_log
            .iter()
            .rev()
            .take(6)
            .rev()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let debug_panel = Paragraph::new(debug_text)
            .style(Style::default().fg(theme.text_muted()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Debug Log [D: hide]")
                    .border_style(Style::default().fg(theme.border_normal())),
            );
        f.render_widget(debug_panel, main_chunks[chunk_index]);
        chunk_index += 1;
    }

    // Status bar
    let status_state = StatusBarState {
        backend_name: app.catalog.backend_name(),
        entry_count: app.entries.len(),
        status_message: app
            .status_message
            .as_ref()
            .map(|m| (m.message.clone(), m.is_error)),
    };
    render_status_bar(f, &status_state, main_chunks[chunk_index], &theme);

    // Render dialog as topmost overlay
    if app.is_dialog_open() {
        let dialog_state = DialogRenderState { mode: &app.dialog };
        render_dialog(f, &dialog_state, f.area());
    }
}
