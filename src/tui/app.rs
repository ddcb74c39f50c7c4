// TUI application state
//
// Wraps the controller (incident screens) with the purely presentational
// state: theme, toast, solutions search, settings tabs, and the spinner.

use super::components::Toast;
use super::theme::Theme;
use crate::catalog::settings::NOTIFICATION_RULES;
use crate::catalog::{filter_solutions, Category, SettingsTab, Solution};
use crate::config::Config;
use crate::controller::{Completion, Controller, FormField, Nav, Screen, SidebarItem};
use crate::logging::LogBuffer;
use std::time::Instant;

/// Braille spinner frames
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Solutions screen state
#[derive(Debug, Default)]
pub struct SolutionsState {
    pub query: String,
    pub category: Category,
    /// Search box has input focus
    pub editing: bool,
    pub selected: usize,
}

impl SolutionsState {
    pub fn visible(&self) -> Vec<&'static Solution> {
        filter_solutions(&self.query, self.category)
    }

    /// Keep the highlight on a visible row after the filter changes
    fn clamp(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.clamp();
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.clamp();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp();
    }
}

/// Settings screen state
#[derive(Debug)]
pub struct SettingsState {
    pub tab: SettingsTab,
    /// Notification toggles, same order as the rule table
    pub notifications: Vec<bool>,
    pub selected: usize,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            tab: SettingsTab::default(),
            notifications: NOTIFICATION_RULES.iter().map(|r| r.enabled).collect(),
            selected: 0,
        }
    }
}

impl SettingsState {
    pub fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.selected = 0;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(flag) = self.notifications.get_mut(self.selected) {
            *flag = !*flag;
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub controller: Controller,

    /// Effective configuration, shown on the System tab
    pub config: Config,

    pub dark_mode: bool,

    /// Derived from `dark_mode`; rebuilt on toggle
    pub theme: Theme,

    /// Incident list search box has input focus
    pub search_editing: bool,

    pub solutions: SolutionsState,
    pub settings: SettingsState,

    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,

    pub should_quit: bool,
    pub animation_frame: usize,
    pub start_time: Instant,
}

impl App {
    pub fn new(controller: Controller, config: Config, log_buffer: LogBuffer) -> Self {
        let dark_mode = config.dark_mode;
        Self {
            controller,
            config,
            dark_mode,
            theme: Theme::for_mode(dark_mode),
            search_editing: false,
            solutions: SolutionsState::default(),
            settings: SettingsState::default(),
            log_buffer,
            toast: None,
            should_quit: false,
            animation_frame: 0,
            start_time: Instant::now(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
        tracing::debug!("Theme switched to {}", self.theme.name);
    }

    /// Switch screens from the sidebar; always allowed
    pub fn open(&mut self, item: SidebarItem) {
        self.search_editing = false;
        self.solutions.editing = false;
        let _ = self.controller.navigate(Nav::Sidebar(item));
    }

    /// Feed a finished backend call to the controller, surfacing its notice
    pub fn apply(&mut self, completion: Completion) {
        self.controller.apply(completion);
        if let Some(notice) = self.controller.take_notice() {
            self.show_toast(notice);
        }
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_typing(&self) -> bool {
        match self.screen() {
            Screen::IncidentsList => self.search_editing,
            Screen::Solutions => self.solutions.editing,
            Screen::CreateIncident => {
                self.controller.create.form.popup.is_none()
                    && self.controller.create.form.focus != FormField::Department
            }
            _ => false,
        }
    }

    // ─── Toast ────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─── Animation ────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Uptime as `HH:MM:SS`
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
