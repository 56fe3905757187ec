use crate::app::state::App;
use crossterm::event::KeyCode;

const PAUSE_SWEEP: KeyCode = KeyCode::Char('p');

/// Help popup keys. While the popup is open it swallows everything; Esc or
/// `q` close it rather than quitting.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    match (app.show_help, key) {
        (_, KeyCode::F(1)) => app.show_help = !app.show_help,
        (false, KeyCode::Char('?')) if !app.editing_name && !app.filtering => app.show_help = true,
        (true, KeyCode::Esc | KeyCode::Char('q' | '?')) => app.show_help = false,
        (true, _) => {}
        (false, _) => return false,
    }

    true
}

/// Freezes the radar sweep; layers and markers keep drawing.
pub fn handle_animation_toggle(app: &mut App, key: KeyCode) -> bool {
    let pressed = key == PAUSE_SWEEP;
    if pressed {
        app.toggle_animation_pause();
    }
    pressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_ladder::config::AppConfig;
    use career_ladder::Catalog;

    fn app() -> App {
        App::new(Catalog::builtin(), AppConfig::default())
    }

    #[test]
    fn question_mark_opens_and_q_closes_without_quitting() {
        let mut app = app();

        assert!(handle_help_toggle(&mut app, KeyCode::Char('?')));
        assert!(app.show_help);

        assert!(handle_help_toggle(&mut app, KeyCode::Char('s')));
        assert!(app.show_help);

        assert!(handle_help_toggle(&mut app, KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);

        assert!(!handle_help_toggle(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn question_mark_is_text_while_filtering() {
        let mut app = app();
        app.filtering = true;

        assert!(!handle_help_toggle(&mut app, KeyCode::Char('?')));
        assert!(!app.show_help);
    }

    #[test]
    fn pause_key_toggles_the_sweep() {
        let mut app = app();

        assert!(!handle_animation_toggle(&mut app, KeyCode::Char(' ')));
        assert!(handle_animation_toggle(&mut app, PAUSE_SWEEP));
        assert!(app.animation_paused);
        assert_eq!(app.status_message, "Animation paused");
    }
}
