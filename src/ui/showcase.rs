use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::entry::Entry;
use super::theme::{category_color, rarity_color, Theme};

pub struct ShowcaseViewState<'a> {
    pub slides: &'a [Entry],
    pub current_slide: usize,
}

/// Full-width rotating showcase of the latest additions, one entry per
/// slide with position dots along the bottom.
pub fn render_showcase_view(f: &mut Frame, state: &ShowcaseViewState, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Latest Additions ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true));

    if state.slides.is_empty() {
        let empty = Paragraph::new("No creatures in the catalog yet")
            .style(Style::default().fg(theme.text_muted()))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let slide = state.current_slide.min(state.slides.len() - 1);
    let entry = &state.slides[slide];

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    // Headline: name with category badge
    let headline = Paragraph::new(Line::from(vec![
        Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", entry.category),
            Style::default()
                .fg(category_color(entry.category))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            entry.rarity.to_string(),
            Style::default().fg(rarity_color(entry.rarity)),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(headline, chunks[0]);

    // Stat line
    let stats = Paragraph::new(Line::from(vec![
        Span::styled("Health: ", Style::default().fg(theme.text_muted())),
        Span::styled(format!("{}", entry.health), Style::default().fg(theme.text())),
        Span::raw("   "),
        Span::styled("Damage: ", Style::default().fg(theme.text_muted())),
        Span::styled(entry.damage.clone(), Style::default().fg(theme.text())),
        Span::raw("   "),
        Span::styled("Habitat: ", Style::default().fg(theme.text_muted())),
        Span::styled(entry.habitat.clone(), Style::default().fg(theme.text())),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    // Description
    let description = Paragraph::new(entry.description.clone())
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[2]);

    // Position dots
    let dots: Vec<Span> = (0..state.slides.len())
        .map(|i| {
            if i == slide {
                Span::styled("o", Style::default().fg(theme.primary()))
            } else {
                Span::styled(".", Style::default().fg(theme.text_muted()))
            }
        })
        .collect();
    let mut dot_line = Vec::new();
    for (i, dot) in dots.into_iter().enumerate() {
        if i > 0 {
            dot_line.push(Span::raw(" "));
        }
        dot_line.push(dot);
    }
    let dots_widget = Paragraph::new(Line::from(dot_line)).alignment(Alignment::Center);
    f.render_widget(dots_widget, chunks[3]);
}
