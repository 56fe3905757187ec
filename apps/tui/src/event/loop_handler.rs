use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;
use tracing::debug;

use crate::app::{handle_input, App};
use crate::ui;
use crate::ui::widgets::radar::{cell_to_chart, chart_bound};
use career_ladder::radar::{self, Layer, RadarLayout};
use career_ladder::session::{share_url, CustomRole};
use career_ladder::{matcher, ActiveTab};

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let report = build_report(app)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report_text(&report);
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlessReport<'a> {
    dimensions: Vec<&'a str>,
    tracks: Vec<&'a str>,
    role_count: usize,
    custom_role: &'a CustomRole,
    active_tab: ActiveTab,
    selected_role_id: Option<&'a str>,
    nearest: Option<RankedRole<'a>>,
    ranking: Vec<RankedRole<'a>>,
    share_url: String,
    layers: Vec<Layer>,
    layout: RadarLayout,
}

#[derive(Serialize, Clone, Copy)]
struct RankedRole<'a> {
    id: &'a str,
    name: &'a str,
    track: &'a str,
    distance: u32,
}

impl<'a> From<matcher::Match<'a>> for RankedRole<'a> {
    fn from(found: matcher::Match<'a>) -> Self {
        Self {
            id: &found.role.id,
            name: &found.role.name,
            track: &found.role.track,
            distance: found.distance,
        }
    }
}

fn build_report(app: &App) -> Result<HeadlessReport<'_>> {
    let catalog = &app.catalog;
    let dimensions = catalog.dimensions();
    let levels = &app.session.custom_role.levels;

    let ranking = matcher::rank(levels, catalog.roles(), dimensions)?
        .into_iter()
        .map(RankedRole::from)
        .collect::<Vec<_>>();
    let nearest = matcher::find_nearest(levels, catalog.roles(), dimensions)?.map(RankedRole::from);
    let layers = app.layers()?;
    let layout = radar::layout(&layers, dimensions, app.config.canvas_radius)?;

    Ok(HeadlessReport {
        dimensions: dimensions.iter().map(|d| d.id.as_str()).collect(),
        tracks: catalog.tracks(),
        role_count: catalog.roles().len(),
        custom_role: &app.session.custom_role,
        active_tab: app.session.active_tab,
        selected_role_id: app.session.selected_role_id.as_deref(),
        nearest,
        ranking,
        share_url: share_url(&app.config.share_base_url, &app.session),
        layers,
        layout,
    })
}

fn render_report_text(report: &HeadlessReport<'_>) {
    println!("\nCareer Ladder");
    println!("=============");
    println!(
        "Catalog: {} roles, {} dimensions, tracks: {}",
        report.role_count,
        report.dimensions.len(),
        report.tracks.join(", ")
    );

    println!("\n{}:", report.custom_role.name);
    for dimension_id in &report.dimensions {
        let level = report
            .custom_role
            .levels
            .get(dimension_id)
            .map_or_else(|| "-".to_string(), |level| level.to_string());
        println!("- {dimension_id}: {level}");
    }

    match report.nearest {
        Some(nearest) => println!(
            "\nNearest role: {} ({}), distance {}",
            nearest.name, nearest.track, nearest.distance
        ),
        None => println!("\nNearest role: none (empty catalog)"),
    }

    println!("\nClosest roles:");
    for ranked in &report.ranking {
        println!("- {:>3} | {} | {}", ranked.distance, ranked.name, ranked.track);
    }

    println!("\nShare link: {}", report.share_url);
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, frame: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left)
        || app.show_help
        || app.session.active_tab == ActiveTab::Compare
    {
        return;
    }

    let canvas = ui::radar_canvas_area(frame);
    let bound = chart_bound(app.config.canvas_radius);
    if let Some((x, y, tolerance)) = cell_to_chart(canvas, bound, mouse.column, mouse.row) {
        if app.click_level(x, y, tolerance) {
            debug!(x, y, "level set from radar click");
        }
    }
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        app.update();

        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            // resizes are picked up by the next draw
            _ => {}
        }
    }

    Ok(())
}
