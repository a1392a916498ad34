use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::entry::{CategoryFilter, Entry};
use super::theme::{category_color, rarity_color, Theme};

pub struct LibraryViewState<'a> {
    pub filters: &'a [CategoryFilter],
    pub entries: &'a [Entry],
    pub selected_filter: usize,
    pub selected_entry: usize,
    pub selected_tab: usize,
    pub total_count: usize,
}

/// Two-panel library: category filters on the left, matching entries on
/// the right. Returns the panel rects for mouse hit testing.
pub fn render_library_view(
    f: &mut Frame,
    state: &LibraryViewState,
    area: Rect,
    theme: &Theme,
) -> (Rect, Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(area);

    let left_area = content_chunks[0];
    let right_area = content_chunks[1];

    // Left panel - Categories
    let filters: Vec<ListItem> = state
        .filters
        .iter()
        .map(|filter| {
            let line = match filter {
                CategoryFilter::All => Line::from(format!("All ({})", state.total_count)),
                CategoryFilter::Only(category) => Line::from(Span::styled(
                    category.to_string(),
                    Style::default().fg(category_color(*category)),
                )),
            };
            ListItem::new(line)
        })
        .collect();

    let filters_widget = List::new(filters)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Categories [h/l: switch panel]")
                .border_style(if state.selected_tab == 0 {
                    Style::default().fg(theme.warning())
                } else {
                    Style::default().fg(theme.border_normal())
                }),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    let selected_filter = if state.selected_tab == 0 {
        Some(state.selected_filter)
    } else {
        None
    };
    f.render_stateful_widget(
        filters_widget,
        left_area,
        &mut ListState::default().with_selected(selected_filter),
    );

    // Right panel - Entries
    let entries: Vec<ListItem> = state
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = state.selected_tab == 1 && i == state.selected_entry;
            let style = theme.entry_style(is_selected, entry.is_playing_sound);

            let mut spans = vec![
                Span::styled(
                    format!("[{}] ", entry.category),
                    Style::default().fg(category_color(entry.category)),
                ),
                Span::styled(entry.name.clone(), style),
                Span::styled(
                    format!("  {} HP", entry.health),
                    Style::default().fg(theme.text_muted()),
                ),
                Span::styled(
                    format!("  {}", entry.rarity),
                    Style::default().fg(rarity_color(entry.rarity)),
                ),
            ];
            if entry.is_playing_sound {
                spans.push(Span::styled(
                    " [playing]",
                    Style::default().fg(theme.success()),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let entries_widget = List::new(entries)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Creatures [Enter: detail | s: sound | d: delete]")
                .border_style(if state.selected_tab == 1 {
                    Style::default().fg(theme.warning())
                } else {
                    Style::default().fg(theme.border_normal())
                }),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    let selected_entry = if state.selected_tab == 1 {
        Some(state.selected_entry)
    } else {
        None
    };
    f.render_stateful_widget(
        entries_widget,
        right_area,
        &mut ListState::default().with_selected(selected_entry),
    );

    (left_area, right_area)
}
