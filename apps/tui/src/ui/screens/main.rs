use crate::app::App;
use crate::ui::screens::{compare, define, explore, help};
use crate::ui::widgets::radar::{layer_color, render_level_radar, render_mini_radar};
use crate::ui::{content_columns, main_layout, radar_panel_areas};
use career_ladder::radar::{self, Layer};
use career_ladder::ActiveTab;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let [title, content, status, shortcuts] = main_layout(f.area());

    render_title_section(app, f, title);

    let [left, right] = content_columns(content);
    match app.session.active_tab {
        ActiveTab::Define => define::render_define_panel(app, f, left),
        ActiveTab::Explore => explore::render_explore_panel(app, f, left),
        ActiveTab::Compare => compare::render_compare_panel(app, f, left),
    }
    render_radar_panel(app, f, right);

    render_status_section(app, f, status);
    render_shortcuts(app, f, shortcuts);

    if app.show_help {
        help::render_help_popup(f, f.area());
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Career Ladder ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(title_block, area);

    let [text_area, sweep_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(8)])
            .areas(area.inner(Margin::new(1, 1)));
    let [subtitle_area, tabs_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).areas(text_area);

    let subtitle = TextLine::from(vec![
        Span::styled(
            "Career Ladder ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} roles across {} dimensions",
                app.catalog.roles().len(),
                app.catalog.dimensions().len()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(subtitle), subtitle_area);

    let tabs = Tabs::new(
        ActiveTab::ALL
            .iter()
            .map(|tab| format!("{} {}", tab.index() + 1, tab.label())),
    )
    .select(app.session.active_tab.index())
    .style(Style::default().fg(Color::Gray))
    .highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .divider("|");
    f.render_widget(tabs, tabs_area);

    render_mini_radar(f, sweep_area, app.animation_counter);
}

fn render_radar_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Radar ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);

    let [canvas_area, legend_area] = radar_panel_areas(area);
    let dimensions = app.catalog.dimensions();
    let radius = app.config.canvas_radius;

    let drawn = app.layers().and_then(|layers| {
        radar::layout(&layers, dimensions, radius)
            .map(|layout| (layers, layout))
            .map_err(Into::into)
    });

    match drawn {
        Ok((layers, layout)) => {
            render_level_radar(
                f,
                canvas_area,
                &layout,
                &layers,
                dimensions,
                radius,
                app.animation_counter,
            );
            f.render_widget(legend(app, &layers), legend_area);
        }
        Err(err) => {
            let message = Paragraph::new(format!("Cannot draw radar: {err}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(message, canvas_area);
        }
    }
}

fn legend<'a>(app: &App, layers: &'a [Layer]) -> Paragraph<'a> {
    if layers.is_empty() {
        let hint = match app.session.active_tab {
            ActiveTab::Compare => "Pick roles with ↑/↓ to compare them",
            _ => "All layers hidden (n/c to show)",
        };
        return Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center);
    }

    let spans = layers
        .iter()
        .flat_map(|layer| {
            [
                Span::styled("■ ", Style::default().fg(layer_color(layer.color))),
                Span::styled(layer.label.as_str(), Style::default().fg(Color::White)),
                Span::raw("  "),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(TextLine::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Span::styled("Ready", Style::default().fg(Color::Gray))
    } else {
        Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::White),
        )
    };

    f.render_widget(
        Paragraph::new(TextLine::from(status_text)).block(status_block),
        area,
    );
}

fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(": {action}  "), Style::default().fg(Color::Gray)),
    ]
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let tab_hints: &[(&'static str, &'static str)] = match app.session.active_tab {
        ActiveTab::Define if app.editing_name => &[("Enter", "Save name"), ("Esc", "Cancel")],
        ActiveTab::Define => &[
            ("↑/↓", "Dimension"),
            ("←/→", "Level"),
            ("e", "Rename"),
            ("Enter", "Select nearest"),
        ],
        ActiveTab::Explore if app.filtering => &[("Enter", "Keep filter"), ("Esc", "Clear")],
        ActiveTab::Explore => &[
            ("↑/↓", "Role"),
            ("Enter", "Select"),
            ("→", "Next role"),
            ("/", "Filter"),
        ],
        ActiveTab::Compare => &[("←/→", "Slot"), ("↑/↓", "Role"), ("x", "Clear")],
    };
    let global_hints = [
        ("Tab", "Switch"),
        ("s", "Share"),
        ("n/c", "Layers"),
        ("r", "Reset"),
        ("F1/?", "Help"),
        ("q", "Quit"),
    ];

    let spans = tab_hints
        .iter()
        .chain(global_hints.iter())
        .flat_map(|&(key, action)| key_hint(key, action))
        .collect::<Vec<_>>();

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
