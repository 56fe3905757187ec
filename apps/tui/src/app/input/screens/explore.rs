use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use career_ladder::SessionEvent;
use crossterm::event::KeyCode;

pub fn handle_explore_input(app: &mut App, key: KeyCode) {
    let role_count = app.visible_roles().len();

    match key {
        KeyCode::Up => app.role_index = wrap_decrement(app.role_index, role_count),
        KeyCode::Down => app.role_index = wrap_increment(app.role_index, role_count),
        KeyCode::Enter => app.select_highlighted_role(),
        KeyCode::Right | KeyCode::Char('g') => app.follow_next_role(),
        KeyCode::Char('/') => app.filtering = true,
        KeyCode::Char('x') | KeyCode::Delete => {
            app.dispatch(SessionEvent::SelectRole(None));
        }
        KeyCode::Esc => {
            app.role_filter.clear();
            app.role_index = 0;
        }
        _ => {}
    }
}

pub fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => {
            app.role_filter.push(c);
            app.role_index = 0;
        }
        KeyCode::Backspace => {
            app.role_filter.pop();
            app.role_index = 0;
        }
        KeyCode::Enter => app.filtering = false,
        KeyCode::Esc => {
            app.filtering = false;
            app.role_filter.clear();
            app.role_index = 0;
        }
        _ => {}
    }
}
