use crate::cli::CliArgs;
use crate::ui::widgets::popup::{centered_rect, render_popup};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    render_popup(f, popup_area, "== Help & Keyboard Shortcuts ==", build_help_lines());
}

fn heading(text: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Career Ladder",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Describe a role on five dimensions, see which ladder role it is closest to, and compare roles side by side.",
        ),
        TextLine::from(""),
        heading("Everywhere:"),
        shortcut("Tab/1-3", "Switch between Define, Explore and Compare"),
        shortcut("s", "Show a share link for the current session"),
        shortcut("n", "Show/hide the nearest role layer"),
        shortcut("c", "Show/hide the custom role layer"),
        shortcut("r", "Reset the session"),
        shortcut("p", "Pause/resume the radar sweep"),
        shortcut("F1/?", "Toggle this help (Esc or q closes)"),
        shortcut("q", "Quit"),
        TextLine::from(""),
        heading("Define:"),
        shortcut("↑/↓", "Choose a dimension"),
        shortcut("←/→", "Lower/raise its level"),
        shortcut("e", "Rename the custom role"),
        shortcut("Enter", "Select the nearest role"),
        shortcut("Mouse", "Click a level dot on the radar to set it"),
        TextLine::from(""),
        heading("Explore:"),
        shortcut("↑/↓", "Move through roles"),
        shortcut("Enter", "Select the highlighted role"),
        shortcut("→/g", "Jump to the next role on the ladder"),
        shortcut("/", "Fuzzy filter by name or track"),
        shortcut("x", "Clear the selection"),
        TextLine::from(""),
        heading("Compare:"),
        shortcut("←/→", "Choose the first or second slot"),
        shortcut("↑/↓", "Cycle the role in that slot"),
        shortcut("x", "Empty the slot"),
        TextLine::from(""),
        heading("CLI Options:"),
    ];

    let help_text = CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
