// Keyboard dispatch
//
// Layered: hard globals (Ctrl-C, F1-F4) → suggestion popup → active screen
// → soft globals (q, d, 1-4). A screen that is capturing text consumes
// plain characters, so the soft globals never fire while typing.

use super::app::App;
use crate::catalog::SettingsTab;
use crate::controller::{FormField, Nav, Screen, SidebarItem};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether a layer consumed the key or it should bubble up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Layer 1: always available
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    if let KeyCode::F(n @ 1..=4) = key.code {
        app.open(SidebarItem::ALL[usize::from(n - 1)]);
        return;
    }

    // Layer 2: suggestion popup is modal
    if app.screen() == Screen::CreateIncident && app.controller.create.form.popup.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.controller.create.form.dismiss_popup();
        }
        return;
    }

    // Layer 3: screen
    let handled = match app.screen() {
        Screen::Dashboard => Handled::No,
        Screen::IncidentsList => incidents_key(app, key),
        Screen::CreateIncident => create_key(app, key),
        Screen::IncidentDetail(_) => detail_key(app, key),
        Screen::Solutions => solutions_key(app, key),
        Screen::Settings => settings_key(app, key),
    };
    if handled == Handled::Yes {
        return;
    }

    // Layer 4: soft globals
    if app.is_typing() {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.open(SidebarItem::ALL[idx]);
        }
        _ => {}
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Incidents
// ─────────────────────────────────────────────────────────────────────────────

fn incidents_key(app: &mut App, key: KeyEvent) -> Handled {
    if app.search_editing {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.search_editing = false,
            KeyCode::Backspace => {
                let mut query = app.controller.list.query.clone();
                query.pop();
                app.controller.set_query(query);
            }
            KeyCode::Char(c) => {
                let query = format!("{}{}", app.controller.list.query, c);
                app.controller.set_query(query);
            }
            _ => {}
        }
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Char('/') => app.search_editing = true,
        KeyCode::Char('n') => {
            let _ = app.controller.navigate(Nav::CreateNew);
        }
        KeyCode::Char('r') => app.controller.load_list(),
        KeyCode::Enter => {
            let _ = app.controller.open_selected();
        }
        KeyCode::Down | KeyCode::Char('j') => app.controller.list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.controller.list.select_prev(),
        KeyCode::Esc if !app.controller.list.query.is_empty() => {
            app.controller.set_query(String::new())
        }
        _ => return Handled::No,
    }
    Handled::Yes
}

// ─────────────────────────────────────────────────────────────────────────────
// Create
// ─────────────────────────────────────────────────────────────────────────────

fn create_key(app: &mut App, key: KeyEvent) -> Handled {
    let focus = app.controller.create.form.focus;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        app.controller.submit_create();
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Esc => {
            let _ = app.controller.navigate(Nav::Cancel);
        }
        KeyCode::Tab | KeyCode::Down => app.controller.focus_form_next(),
        KeyCode::BackTab | KeyCode::Up => app.controller.focus_form_prev(),
        KeyCode::Enter if focus == FormField::Department => app.controller.submit_create(),
        KeyCode::Enter => app.controller.focus_form_next(),
        KeyCode::Backspace => app.controller.create.form.backspace(),
        KeyCode::Left if focus == FormField::Department => {
            app.controller.create.form.prev_department()
        }
        KeyCode::Right if focus == FormField::Department => {
            app.controller.create.form.next_department()
        }
        KeyCode::Char(c) if focus != FormField::Department => {
            app.controller.create.form.insert_char(c)
        }
        _ => return Handled::No,
    }
    Handled::Yes
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail
// ─────────────────────────────────────────────────────────────────────────────

fn detail_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            let _ = app.controller.navigate(Nav::Back);
            Handled::Yes
        }
        _ => Handled::No,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Solutions
// ─────────────────────────────────────────────────────────────────────────────

fn solutions_key(app: &mut App, key: KeyEvent) -> Handled {
    let s = &mut app.solutions;
    if s.editing {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => s.editing = false,
            KeyCode::Backspace => s.pop_query(),
            KeyCode::Char(c) => s.push_query(c),
            _ => {}
        }
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Char('/') => s.editing = true,
        KeyCode::Tab | KeyCode::Right => s.set_category(s.category.next()),
        KeyCode::BackTab | KeyCode::Left => s.set_category(s.category.prev()),
        KeyCode::Down | KeyCode::Char('j') => {
            if s.selected + 1 < s.visible().len() {
                s.selected += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => s.selected = s.selected.saturating_sub(1),
        _ => return Handled::No,
    }
    Handled::Yes
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

fn settings_key(app: &mut App, key: KeyEvent) -> Handled {
    let s = &mut app.settings;
    match key.code {
        KeyCode::Tab | KeyCode::Right => s.set_tab(s.tab.next()),
        KeyCode::BackTab | KeyCode::Left => s.set_tab(s.tab.prev()),
        KeyCode::Down | KeyCode::Char('j') if s.tab == SettingsTab::Notifications => {
            if s.selected + 1 < s.notifications.len() {
                s.selected += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') if s.tab == SettingsTab::Notifications => {
            s.selected = s.selected.saturating_sub(1)
        }
        KeyCode::Enter | KeyCode::Char(' ') if s.tab == SettingsTab::Notifications => {
            s.toggle_selected()
        }
        _ => return Handled::No,
    }
    Handled::Yes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::dead_backend;
    use crate::config::Config;
    use crate::controller::Controller;
    use crate::logging::LogBuffer;
    use std::sync::Arc;

    async fn app() -> App {
        let client = dead_backend().await;
        let (controller, _rx) = Controller::new(Arc::new(client));
        App::new(controller, Config::default(), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn number_keys_switch_screens() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::IncidentsList);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen(), Screen::Solutions);
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.screen(), Screen::Settings);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[tokio::test]
    async fn search_captures_soft_globals() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "dq1");
        assert_eq!(app.controller.list.query, "dq1");
        assert!(!app.dark_mode);
        assert!(!app.should_quit);
        assert_eq!(app.screen(), Screen::IncidentsList);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.list.query, "dq");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.dark_mode);
    }

    #[tokio::test]
    async fn create_form_typing_and_cancel() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::CreateIncident);
        assert!(app.is_typing());

        type_str(&mut app, "DB down");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "q");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.controller.create.form.focus, FormField::Department);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);

        let form = &app.controller.create.form;
        assert_eq!(form.title, "DB down");
        assert_eq!(form.description, "q");
        assert_eq!(form.department, Some(2));
        // leaving the description asked for a suggestion
        assert!(app.controller.create.is_suggesting());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::IncidentsList);
    }

    #[tokio::test]
    async fn soft_globals_only_outside_text_fields() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "q1");
        assert_eq!(app.screen(), Screen::CreateIncident);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert!(!app.is_typing());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen(), Screen::Solutions);
    }

    #[tokio::test]
    async fn popup_absorbs_keys_until_dismissed() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        app.controller.create.form.popup = Some("Hệ thống gợi ý phòng: X".into());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.controller.create.form.title.is_empty());
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.create.form.popup.is_none());
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.controller.create.form.title, "x");
    }

    #[tokio::test]
    async fn settings_tabs_and_toggles() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.settings.tab, SettingsTab::Notifications);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.settings.notifications, vec![true, true, true, true]);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.settings.tab, SettingsTab::Users);
    }

    #[tokio::test]
    async fn ctrl_c_quits_even_while_typing() {
        let mut app = app().await;
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert!(app.solutions.query.is_empty());
    }
}
