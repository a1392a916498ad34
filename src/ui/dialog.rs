use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::DialogMode;

pub struct DialogRenderState<'a> {
    pub mode: &'a DialogMode,
}

pub fn render_dialog(f: &mut Frame, state: &DialogRenderState, area: Rect) {
    match state.mode {
        DialogMode::None => {}
        DialogMode::ConfirmDelete { entry_name, .. } => {
            render_confirm_dialog(
                f,
                "Delete Creature",
                &format!("Are you sure you want to delete '{}'?", entry_name),
                area,
            );
        }
    }
}

fn render_confirm_dialog(f: &mut Frame, title: &str, message: &str, area: Rect) {
    let popup_width = 50.min(area.width.saturating_sub(4));
    let popup_height = 7;
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    f.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let msg = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(msg, chunks[0]);

    let help_text = Paragraph::new("Enter/y: confirm | Esc/n: cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help_text, chunks[1]);
}
