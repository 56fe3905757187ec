use crate::app::App;
use crate::ui::widgets::radar::layer_color;
use career_ladder::domain::MAX_LEVEL;
use career_ladder::radar::LayerColor;
use career_ladder::{CompareSlot, Dimension, Role};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};
use ratatui::Frame;

const SLOTS: [(CompareSlot, &str, LayerColor); 2] = [
    (CompareSlot::First, "First", LayerColor::CompareFirst),
    (CompareSlot::Second, "Second", LayerColor::CompareSecond),
];

pub fn render_compare_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Compare roles ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [pickers_area, gauges_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    render_pickers(app, f, pickers_area);
    render_gauges(app, f, gauges_area);
}

fn render_pickers(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines = SLOTS
        .iter()
        .map(|&(slot, label, color)| {
            let active = slot == app.compare_slot;
            let name = app
                .session
                .compared_role(&app.catalog, slot)
                .map_or("(empty)", |role| role.name.as_str());
            let name_style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(layer_color(color))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(layer_color(color))
            };

            TextLine::from(vec![
                Span::styled(if active { "> " } else { "  " }, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{label:<7}"), Style::default().fg(Color::Gray)),
                Span::styled(format!(" {name} "), name_style),
            ])
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(lines), area);
}

fn gauge_for<'a>(role: &'a Role, dimension: &'a Dimension, color: LayerColor) -> LineGauge<'a> {
    let level = role.levels.get(&dimension.id).unwrap_or(0);
    let label = dimension
        .level(level)
        .map_or_else(|_| "?".to_string(), |descriptor| format!("{level} {}", descriptor.label));

    LineGauge::default()
        .ratio(f64::from(level) / f64::from(MAX_LEVEL))
        .label(format!("{label:<14}"))
        .filled_style(Style::default().fg(layer_color(color)))
        .unfilled_style(Style::default().fg(Color::DarkGray))
}

fn render_gauges(app: &App, f: &mut Frame<'_>, area: Rect) {
    let roles: Vec<(Option<&Role>, LayerColor)> = SLOTS
        .iter()
        .map(|&(slot, _, color)| (app.session.compared_role(&app.catalog, slot), color))
        .collect();

    if roles.iter().all(|(role, _)| role.is_none()) {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Use ↑/↓ to pick a role for each slot",
                Style::default().fg(Color::Gray),
            )),
            area,
        );
        return;
    }

    let dimensions = app.catalog.dimensions();
    let rows_per_dimension = 1 + roles.len();
    let constraints = std::iter::repeat(Constraint::Length(1))
        .take(dimensions.len() * rows_per_dimension)
        .chain(std::iter::once(Constraint::Min(0)));
    let rows = Layout::vertical(constraints).split(area);

    for (index, dimension) in dimensions.iter().enumerate() {
        let base = index * rows_per_dimension;
        f.render_widget(
            Paragraph::new(Span::styled(
                dimension.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            rows[base],
        );

        for (offset, (role, color)) in roles.iter().enumerate() {
            let row = rows[base + 1 + offset];
            match role {
                Some(role) => f.render_widget(gauge_for(role, dimension, *color), row),
                None => f.render_widget(
                    Paragraph::new(Span::styled("  -", Style::default().fg(Color::DarkGray))),
                    row,
                ),
            }
        }
    }
}
