use crate::app::state::App;
use career_ladder::{CompareSlot, SessionEvent};
use crossterm::event::KeyCode;

pub fn handle_compare_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left => app.compare_slot = CompareSlot::First,
        KeyCode::Right => app.compare_slot = CompareSlot::Second,
        KeyCode::Up => app.cycle_compare_role(false),
        KeyCode::Down => app.cycle_compare_role(true),
        KeyCode::Char('x') | KeyCode::Delete => {
            app.dispatch(SessionEvent::SetCompare {
                slot: app.compare_slot,
                role_id: None,
            });
        }
        _ => {}
    }
}
