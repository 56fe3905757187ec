use crate::app::App;
use career_ladder::domain::MAX_LEVEL;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn level_bar(level: u8) -> String {
    (1..=MAX_LEVEL)
        .map(|step| if step <= level { '■' } else { '□' })
        .collect()
}

pub fn render_define_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Define your role ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label_style = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();

    if app.editing_name {
        let cursor = if app.animation_counter.sin() > 0.0 { "_" } else { " " };
        lines.push(TextLine::from(vec![
            Span::styled("Name: ", label_style),
            Span::styled(
                format!("{}{cursor}", app.name_input),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    } else {
        lines.push(TextLine::from(vec![
            Span::styled("Name: ", label_style),
            Span::styled(
                app.session.custom_role.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(TextLine::from(""));

    for (index, dimension) in app.catalog.dimensions().iter().enumerate() {
        let highlighted = index == app.dimension_index;
        let level = app.session.custom_role.levels.get(&dimension.id).unwrap_or(1);
        let descriptor = dimension.level(level).ok();

        let name_style = if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if highlighted { ">" } else { " " };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{prefix} {:<22}", dimension.name), name_style),
            Span::styled(format!(" {} ", level_bar(level)), Style::default().fg(Color::Cyan)),
            Span::styled(
                descriptor.map_or("", |d| d.label.as_str()),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        if highlighted {
            if let Some(descriptor) = descriptor {
                lines.push(TextLine::from(Span::styled(
                    format!("    {}", descriptor.description),
                    label_style,
                )));
            }
        }
    }

    lines.push(TextLine::from(""));
    match app.session.nearest_role(&app.catalog) {
        Ok(Some(found)) => {
            lines.push(TextLine::from(vec![
                Span::styled("Nearest role: ", label_style),
                Span::styled(
                    found.role.name.as_str(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" (distance {})", found.distance), label_style),
            ]));
            lines.push(TextLine::from(Span::styled(
                format!("{} | {}", found.role.track, found.role.experience.as_deref().unwrap_or("-")),
                label_style,
            )));
        }
        Ok(None) => lines.push(TextLine::from(Span::styled("No roles in catalog", label_style))),
        Err(err) => lines.push(TextLine::from(Span::styled(
            format!("Cannot match: {err}"),
            Style::default().fg(Color::Red),
        ))),
    }

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bar_fills_up_to_level() {
        assert_eq!(level_bar(1), "■□□□");
        assert_eq!(level_bar(4), "■■■■");
    }
}
