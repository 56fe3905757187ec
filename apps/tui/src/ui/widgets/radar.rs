use career_ladder::radar::{Layer, LayerColor, RadarLayout};
use career_ladder::Dimension;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::Frame;

/// Chart bounds relative to the level-4 radius; leaves room for axis labels.
const BOUNDS_SCALE: f64 = 1.3;

pub const fn layer_color(color: LayerColor) -> Color {
    match color {
        LayerColor::Primary => Color::Cyan,
        LayerColor::Muted => Color::DarkGray,
        LayerColor::Accent => Color::Yellow,
        LayerColor::CompareFirst => Color::Magenta,
        LayerColor::CompareSecond => Color::Green,
    }
}

pub fn chart_bound(canvas_radius: f64) -> f64 {
    canvas_radius * BOUNDS_SCALE
}

/// Largest rect inside `area` that looks square, assuming cells twice as tall as wide.
pub fn square_canvas(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height.saturating_mul(2);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a terminal cell inside `canvas` to chart coordinates (y down) plus a
/// hit tolerance of one cell.
pub fn cell_to_chart(canvas: Rect, bound: f64, column: u16, row: u16) -> Option<(f64, f64, f64)> {
    if canvas.width == 0 || canvas.height == 0 || !canvas.contains(Position::new(column, row)) {
        return None;
    }

    let cell_width = 2.0 * bound / f64::from(canvas.width);
    let cell_height = 2.0 * bound / f64::from(canvas.height);
    let x = (f64::from(column - canvas.x) + 0.5).mul_add(cell_width, -bound);
    let y_up = (f64::from(row - canvas.y) + 0.5).mul_add(-cell_height, bound);

    Some((x, -y_up, cell_width.max(cell_height)))
}

/// Small animated sweep shown next to the title.
pub fn render_mini_radar(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let square = square_canvas(area);
    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for ring in 1..=2 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: f64::from(ring) / 2.0,
                        color: Color::DarkGray,
                    });
                }
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: animation.cos(),
                    y2: animation.sin(),
                    color: Color::Cyan,
                });
            })
            .x_bounds([-1.1, 1.1])
            .y_bounds([-1.1, 1.1]),
        square,
    );
}

/// Grid, axes, labels, sweep, layer polygons and level markers.
pub fn render_level_radar(
    f: &mut Frame<'_>,
    area: Rect,
    layout: &RadarLayout,
    layers: &[Layer],
    dimensions: &[Dimension],
    canvas_radius: f64,
    animation: f64,
) {
    let canvas = square_canvas(area);
    if canvas.width < 4 || canvas.height < 2 {
        return;
    }
    let bound = chart_bound(canvas_radius);

    let colors: Vec<Color> = layers
        .iter()
        .filter(|layer| layer.visible)
        .map(|layer| layer_color(layer.color))
        .collect();

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                draw_grid(ctx, layout, dimensions, canvas_radius, animation);
                ctx.layer();

                for (polygon, color) in layout.vertices.iter().zip(&colors) {
                    let closed = polygon.iter().zip(polygon.iter().cycle().skip(1));
                    for (from, to) in closed {
                        ctx.draw(&CanvasLine {
                            x1: from.x,
                            y1: -from.y,
                            x2: to.x,
                            y2: -to.y,
                            color: *color,
                        });
                    }
                }
                ctx.layer();

                let markers: Vec<(f64, f64)> =
                    layout.markers.iter().map(|m| (m.x, -m.y)).collect();
                ctx.draw(&Points {
                    coords: &markers,
                    color: Color::Gray,
                });
                for (polygon, color) in layout.vertices.iter().zip(&colors) {
                    let vertices: Vec<(f64, f64)> = polygon.iter().map(|v| (v.x, -v.y)).collect();
                    ctx.draw(&Points {
                        coords: &vertices,
                        color: *color,
                    });
                }
            })
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound]),
        canvas,
    );
}

fn draw_grid(
    ctx: &mut Context<'_>,
    layout: &RadarLayout,
    dimensions: &[Dimension],
    canvas_radius: f64,
    animation: f64,
) {
    for radius in layout.grid_circles {
        ctx.draw(&Circle {
            x: 0.0,
            y: 0.0,
            radius,
            color: Color::DarkGray,
        });
    }

    for axis in &layout.axes {
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: 0.0,
            x2: axis.x2,
            y2: -axis.y2,
            color: Color::DarkGray,
        });
    }

    // sweep runs clockwise like the axes
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: animation.cos() * canvas_radius,
        y2: -animation.sin() * canvas_radius,
        color: Color::Rgb(40, 70, 90),
    });

    for (axis, dimension) in layout.axes.iter().zip(dimensions) {
        let angle = axis.angle_degrees.to_radians();
        let label_radius = canvas_radius * 1.12;
        let x = angle.cos() * label_radius;
        let y = -angle.sin() * label_radius;
        // keep left-side labels inside the canvas
        let x = if x < 0.0 {
            x - canvas_radius * 0.05 * dimension.name.len() as f64
        } else {
            x
        };
        ctx.print(
            x,
            y,
            Span::styled(dimension.name.clone(), Style::default().fg(Color::Gray)),
        );
    }
}
