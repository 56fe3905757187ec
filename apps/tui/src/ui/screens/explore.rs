use crate::app::{App, RoleRow};
use career_ladder::matcher;
use career_ladder::Role;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_explore_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [list_area, details_area] =
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    render_role_list(app, f, list_area);
    render_role_details(app, f, details_area);
}

fn render_role_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = if app.filtering || !app.role_filter.is_empty() {
        let cursor = if app.filtering { "_" } else { "" };
        format!(" Roles /{}{cursor} ", app.role_filter)
    } else {
        " Roles ".to_string()
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = app.role_rows();
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No roles match the filter",
                Style::default().fg(Color::Gray),
            ))
            .block(block),
            area,
        );
        return;
    }

    let highlighted_id = app.highlighted_role().map(|role| role.id.as_str());
    let selected_id = app.session.selected_role_id.as_deref();
    let highlighted_row = rows.iter().position(|row| match row {
        RoleRow::Role(role) => Some(role.id.as_str()) == highlighted_id,
        RoleRow::Track(_) => false,
    });

    let items = rows
        .iter()
        .map(|row| match row {
            RoleRow::Track(track) => ListItem::new(Span::styled(
                *track,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            RoleRow::Role(role) => {
                let marker = if Some(role.id.as_str()) == selected_id { "●" } else { " " };
                ListItem::new(TextLine::from(vec![
                    Span::styled(format!("  {marker} "), Style::default().fg(Color::Yellow)),
                    Span::raw(role.name.as_str()),
                ]))
            }
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(highlighted_row);
    f.render_stateful_widget(list, area, &mut state);
}

fn role_detail_lines<'a>(app: &'a App, role: &'a Role) -> Vec<TextLine<'a>> {
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White);
    let heading_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(Span::styled(
            role.name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![
            Span::styled("Track: ", label_style),
            Span::styled(role.track.as_str(), value_style),
        ]),
    ];

    if let Some(experience) = &role.experience {
        lines.push(TextLine::from(vec![
            Span::styled("Experience: ", label_style),
            Span::styled(experience.as_str(), value_style),
        ]));
    }
    if let Some(salary) = &role.salary {
        lines.push(TextLine::from(vec![
            Span::styled("Salary: ", label_style),
            Span::styled(salary.as_str(), value_style),
        ]));
    }
    if let Ok(distance) = matcher::distance(
        &app.session.custom_role.levels,
        role,
        app.catalog.dimensions(),
    ) {
        lines.push(TextLine::from(vec![
            Span::styled("Distance from your role: ", label_style),
            Span::styled(distance.to_string(), value_style),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("Levels", heading_style)));
    for dimension in app.catalog.dimensions() {
        let label = role
            .levels
            .get(&dimension.id)
            .and_then(|level| dimension.level(level).ok().map(|d| (level, d.label.as_str())));
        if let Some((level, label)) = label {
            lines.push(TextLine::from(vec![
                Span::styled(format!("  {:<22}", dimension.name), label_style),
                Span::styled(format!("{level} {label}"), value_style),
            ]));
        }
    }

    for (heading, items) in [
        ("Responsibilities", &role.responsibilities),
        ("Skills", &role.skills),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(heading, heading_style)));
        lines.extend(
            items
                .iter()
                .map(|item| TextLine::from(format!("  - {item}"))),
        );
    }

    let next_roles = app.catalog.next_roles(role).collect::<Vec<_>>();
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("Next roles", heading_style)));
    if next_roles.is_empty() {
        lines.push(TextLine::from(Span::styled("  (top of this ladder)", label_style)));
    }
    for next in next_roles {
        lines.push(TextLine::from(vec![
            Span::styled("  → ", Style::default().fg(Color::Green)),
            Span::styled(next.name.as_str(), value_style),
        ]));
    }

    lines
}

fn render_role_details(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Role details ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = app.highlighted_role().map_or_else(
        || {
            vec![TextLine::from(Span::styled(
                "Highlight a role to see its details",
                Style::default().fg(Color::Gray),
            ))]
        },
        |role| role_detail_lines(app, role),
    );

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
