use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

pub struct StatusBarState<'a> {
    pub backend_name: &'a str,
    pub entry_count: usize,
    pub status_message: Option<(String, bool)>, // (message, is_error)
}

pub fn render_status_bar(
    f: &mut Frame,
    state: &StatusBarState,
    area: ratatui::layout::Rect,
    theme: &Theme,
) {
    let status_bar = if let Some((ref msg, is_error)) = state.status_message {
        let color = if is_error { theme.error() } else { theme.warning() };
        Paragraph::new(Line::from(vec![
            Span::styled(
                if is_error { "ERROR" } else { "INFO" },
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(msg.as_str(), Style::default().fg(color)),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(
                state.backend_name,
                Style::default()
                    .fg(theme.success())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {} creatures | ", state.entry_count)),
            Span::styled("1/2/3", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": views | "),
            Span::styled("hjkl", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": move | "),
            Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": sound | "),
            Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": delete | "),
            Span::styled("R", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": reload | "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": quit"),
        ]))
    };

    let status_bar = status_bar.block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status_bar, area);
}
