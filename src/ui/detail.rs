use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::entry::Entry;
use super::theme::{category_color, rarity_color, Theme};

pub struct DetailViewState<'a> {
    pub entry: Option<&'a Entry>,
}

/// Full readout of one catalog entry: stats, lore lists, asset refs and
/// viewer placement.
pub fn render_detail_view(f: &mut Frame, state: &DetailViewState, area: Rect, theme: &Theme) {
    let Some(entry) = state.entry else {
        let empty = Paragraph::new("No creature selected")
            .style(Style::default().fg(theme.text_muted()))
            .block(
                Block::default()
                    .title("Detail")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(empty, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", entry.name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(category_color(entry.category)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(inner);

    let mut left = vec![
        Line::from(vec![
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
        ]),
        Line::from(""),
        stat_line("Health", format!("{}", entry.health), theme),
        stat_line("Damage", entry.damage.clone(), theme),
        stat_line("Behavior", entry.behavior.clone(), theme),
        stat_line("Habitat", entry.habitat.clone(), theme),
        Line::from(""),
    ];

    if !entry.drops.is_empty() {
        left.push(section_header("Drops", theme));
        for drop in &entry.drops {
            left.push(item_line(drop, theme));
        }
        left.push(Line::from(""));
    }
    if !entry.weaknesses.is_empty() {
        left.push(section_header("Weaknesses", theme));
        for weakness in &entry.weaknesses {
            left.push(item_line(weakness, theme));
        }
        left.push(Line::from(""));
    }
    if !entry.abilities.is_empty() {
        left.push(section_header("Abilities", theme));
        for ability in &entry.abilities {
            left.push(item_line(ability, theme));
        }
    }

    let left_widget = Paragraph::new(left).wrap(Wrap { trim: true });
    f.render_widget(left_widget, chunks[0]);

    let mut right = vec![
        section_header("Description", theme),
        Line::from(Span::styled(
            entry.description.clone(),
            Style::default().fg(theme.text()),
        )),
        Line::from(""),
        section_header("Assets", theme),
        stat_line("Model", entry.model.clone(), theme),
        stat_line("Image", entry.image.clone(), theme),
        stat_line("Banner", entry.banner.clone(), theme),
        stat_line("Sound", entry.sound.clone(), theme),
        Line::from(""),
        section_header("Viewer placement", theme),
        stat_line("Scale", format!("{}", entry.scale), theme),
        stat_line(
            "Position",
            format!(
                "({}, {}, {})",
                entry.position.x, entry.position.y, entry.position.z
            ),
            theme,
        ),
        stat_line(
            "Rotation",
            format!(
                "({}, {}, {})",
                entry.rotation.x, entry.rotation.y, entry.rotation.z
            ),
            theme,
        ),
    ];

    if let Some(created) = entry.created_at {
        right.push(Line::from(""));
        right.push(stat_line(
            "Added",
            created.format("%Y-%m-%d %H:%M UTC").to_string(),
            theme,
        ));
    }
    if entry.is_playing_sound {
        right.push(Line::from(""));
        right.push(Line::from(Span::styled(
            "Sound playing...",
            Style::default()
                .fg(theme.success())
                .add_modifier(Modifier::BOLD),
        )));
    }

    let right_widget = Paragraph::new(right).wrap(Wrap { trim: true });
    f.render_widget(right_widget, chunks[1]);
}

fn stat_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", format!("{}:", label)),
            Style::default().fg(theme.text_muted()),
        ),
        Span::styled(value, Style::default().fg(theme.text())),
    ])
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.primary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn item_line(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("  - "),
        Span::styled(text.to_string(), Style::default().fg(theme.text())),
    ])
}
