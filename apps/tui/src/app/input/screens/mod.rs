use crate::app::state::App;
use career_ladder::{ActiveTab, SessionEvent};
use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

mod compare;
mod define;
mod explore;
mod help;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    // text entry owns the keyboard
    if app.editing_name {
        define::handle_name_input(app, key);
        return;
    }
    if app.filtering {
        explore::handle_filter_input(app, key);
        return;
    }

    if help::handle_animation_toggle(app, key) || handle_global_input(app, key) {
        return;
    }

    match app.session.active_tab {
        ActiveTab::Define => define::handle_define_input(app, key),
        ActiveTab::Explore => explore::handle_explore_input(app, key),
        ActiveTab::Compare => compare::handle_compare_input(app, key),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    let tab_count = ActiveTab::ALL.len();
    let current = app.session.active_tab.index();

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab => {
            if let Some(tab) = ActiveTab::from_index(wrap_increment(current, tab_count)) {
                app.set_tab(tab);
            }
        }
        KeyCode::BackTab => {
            if let Some(tab) = ActiveTab::from_index(wrap_decrement(current, tab_count)) {
                app.set_tab(tab);
            }
        }
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            if let Some(tab) = ActiveTab::from_index(index) {
                app.set_tab(tab);
            }
        }
        KeyCode::Char('s') => app.share(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('n') => {
            app.dispatch(SessionEvent::ToggleNearest);
        }
        KeyCode::Char('c') => {
            app.dispatch(SessionEvent::ToggleCustom);
        }
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_ladder::config::AppConfig;
    use career_ladder::{Catalog, CompareSlot};

    fn app() -> App {
        App::new(Catalog::builtin(), AppConfig::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.session.active_tab, ActiveTab::Compare);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.session.active_tab, ActiveTab::Define);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.session.active_tab, ActiveTab::Compare);
        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.session.active_tab, ActiveTab::Explore);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, &[KeyCode::F(1), KeyCode::Char('1')]);
        assert!(app.show_help);
        assert_eq!(app.session.active_tab, ActiveTab::Explore);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.show_help);
        assert!(app.running);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }

    #[test]
    fn define_keys_edit_levels_and_name() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Down,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Char('e'),
                KeyCode::Backspace,
                KeyCode::Backspace,
                KeyCode::Backspace,
                KeyCode::Backspace,
                KeyCode::Char('Q'),
                KeyCode::Char('A'),
                KeyCode::Enter,
            ],
        );

        assert_eq!(app.session.custom_role.levels.get("work_scope"), Some(3));
        assert_eq!(app.session.custom_role.name, "Custom QA");
        assert!(app.running, "typing q while editing must not quit");
    }

    #[test]
    fn enter_on_define_selects_nearest() {
        let mut app = app();
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Enter],
        );
        assert_eq!(app.session.selected_role_id.as_deref(), Some("software-engineer"));
        assert!(app.status_message.starts_with("Selected nearest role"));
    }

    #[test]
    fn explore_filter_and_select() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('l'),
                KeyCode::Char('e'),
                KeyCode::Char('a'),
                KeyCode::Char('d'),
                KeyCode::Enter,
                KeyCode::Enter,
            ],
        );

        assert!(!app.filtering);
        assert_eq!(app.session.selected_role_id.as_deref(), Some("tech-lead"));

        press(&mut app, &[KeyCode::Char('/'), KeyCode::Esc]);
        assert!(app.role_filter.is_empty());
        press(&mut app, &[KeyCode::Char('x')]);
        assert_eq!(app.session.selected_role_id, None);
    }

    #[test]
    fn compare_keys_fill_both_slots() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('3'),
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Right,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Down,
            ],
        );

        assert_eq!(app.compare_slot, CompareSlot::Second);
        assert_eq!(
            app.session.compare_role_ids,
            [
                Some("software-engineer".to_string()),
                Some("senior-engineer".to_string())
            ]
        );

        press(&mut app, &[KeyCode::Char('x')]);
        assert_eq!(app.session.compare_role_ids[1], None);
    }

    #[test]
    fn toggles_and_reset() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('n'), KeyCode::Char('c'), KeyCode::Char('p')]);
        assert!(!app.session.show_nearest_role);
        assert!(!app.session.show_custom_role);
        assert!(app.animation_paused);

        press(&mut app, &[KeyCode::Char('r')]);
        assert!(app.session.show_nearest_role && app.session.show_custom_role);
        assert_eq!(app.status_message, "Session reset");
    }
}
