//! View-state router
//!
//! Which screen is showing, and which incident is open. Transitions are
//! synchronous and user-triggered; anything outside the table below is
//! rejected and leaves the state untouched.
//!
//! ```text
//! any ──sidebar──▶ Dashboard | IncidentsList | Solutions | Settings
//! IncidentsList ──create──▶ CreateIncident ──cancel/created──▶ IncidentsList
//! IncidentsList ──select(id)──▶ IncidentDetail(id) ──back──▶ IncidentsList
//! ```

use std::fmt;
use thiserror::Error;

/// Screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Dashboard,
    Incidents,
    Solutions,
    Settings,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 4] = [
        SidebarItem::Dashboard,
        SidebarItem::Incidents,
        SidebarItem::Solutions,
        SidebarItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Incidents => "Incidents",
            Self::Solutions => "Solutions",
            Self::Settings => "Settings",
        }
    }

    fn target(self) -> Screen {
        match self {
            Self::Dashboard => Screen::Dashboard,
            Self::Incidents => Screen::IncidentsList,
            Self::Solutions => Screen::Solutions,
            Self::Settings => Screen::Settings,
        }
    }
}

/// The active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    IncidentsList,
    CreateIncident,
    IncidentDetail(i64),
    Solutions,
    Settings,
}

impl Screen {
    /// Sidebar entry highlighted while this screen is active
    pub fn sidebar_item(&self) -> SidebarItem {
        match self {
            Self::Dashboard => SidebarItem::Dashboard,
            Self::IncidentsList | Self::CreateIncident | Self::IncidentDetail(_) => {
                SidebarItem::Incidents
            }
            Self::Solutions => SidebarItem::Solutions,
            Self::Settings => SidebarItem::Settings,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::IncidentsList => "Incidents",
            Self::CreateIncident => "New Incident",
            Self::IncidentDetail(_) => "Incident Detail",
            Self::Solutions => "Solutions & Runbooks",
            Self::Settings => "Settings",
        }
    }
}

/// User navigation intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Sidebar(SidebarItem),
    CreateNew,
    Select(i64),
    Cancel,
    Created,
    Back,
}

impl fmt::Display for Nav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nav::Sidebar(item) => write!(f, "sidebar({})", item.label()),
            Nav::CreateNew => f.write_str("create"),
            Nav::Select(id) => write!(f, "select({id})"),
            Nav::Cancel => f.write_str("cancel"),
            Nav::Created => f.write_str("created"),
            Nav::Back => f.write_str("back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{nav} is not allowed from {from:?}")]
pub struct RejectedTransition {
    pub from: Screen,
    pub nav: Nav,
}

/// Holds the active screen; starts on the dashboard
#[derive(Debug, Default, Clone)]
pub struct Router {
    screen: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Apply a navigation intent, returning the new screen
    pub fn navigate(&mut self, nav: Nav) -> Result<Screen, RejectedTransition> {
        let next = match (self.screen, nav) {
            (_, Nav::Sidebar(item)) => item.target(),
            (Screen::IncidentsList, Nav::CreateNew) => Screen::CreateIncident,
            (Screen::IncidentsList, Nav::Select(id)) => Screen::IncidentDetail(id),
            (Screen::CreateIncident, Nav::Cancel | Nav::Created) => Screen::IncidentsList,
            (Screen::IncidentDetail(_), Nav::Back) => Screen::IncidentsList,
            (from, nav) => return Err(RejectedTransition { from, nav }),
        };

        tracing::debug!("Navigate {:?} --{}--> {:?}", self.screen, nav, next);
        self.screen = next;
        Ok(next)
    }
}
