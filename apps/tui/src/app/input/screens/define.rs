use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_define_input(app: &mut App, key: KeyCode) {
    let dimension_count = app.catalog.dimensions().len();

    match key {
        KeyCode::Up => {
            app.dimension_index = wrap_decrement(app.dimension_index, dimension_count);
        }
        KeyCode::Down => {
            app.dimension_index = wrap_increment(app.dimension_index, dimension_count);
        }
        KeyCode::Left => app.step_selected_level(-1),
        KeyCode::Right => app.step_selected_level(1),
        KeyCode::Char('e') => app.start_name_edit(),
        KeyCode::Enter => app.select_nearest(),
        _ => {}
    }
}

pub fn handle_name_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.name_input.push(c),
        KeyCode::Backspace => {
            app.name_input.pop();
        }
        KeyCode::Enter => app.commit_name_edit(),
        KeyCode::Esc => {
            app.editing_name = false;
            app.name_input.clear();
        }
        _ => {}
    }
}
