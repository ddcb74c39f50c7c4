//! Create-incident form state
//!
//! Plain field editing plus the department suggestion hook: moving focus off
//! the description field is the commit point that asks the backend for a
//! department, and the answer is resolved against the local catalog.

use crate::incidents::{departments, Department, NewIncident};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Department,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Department,
            Self::Department => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Department,
            Self::Description => Self::Title,
            Self::Department => Self::Description,
        }
    }
}

/// What a suggestion answer did to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// Catalog hit: selector moved to this department
    Matched(&'static Department),
    /// Backend named something the catalog doesn't know
    Unmatched(String),
    /// Call failed; nothing shown
    Nothing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
    pub department: Option<u32>,
    pub focus: FormField,
    /// Inline error from the last failed submit
    pub error: Option<String>,
    /// Suggestion popup, dismissed by the user
    pub popup: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus; returns true when this blurs the description field
    pub fn set_focus(&mut self, field: FormField) -> bool {
        let blurred = self.focus == FormField::Description && field != FormField::Description;
        self.focus = field;
        blurred
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Department => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Department => self.department = None,
        }
    }

    pub fn next_department(&mut self) {
        self.department = departments::next_id(self.department);
    }

    pub fn prev_department(&mut self) {
        self.department = departments::prev_id(self.department);
    }

    pub fn selected_department(&self) -> Option<&'static Department> {
        self.department.and_then(departments::by_id)
    }

    /// Title to send for a suggestion, if there is one worth asking about
    pub fn suggestion_title(&self) -> Option<&str> {
        if self.title.trim().is_empty() {
            None
        } else {
            Some(&self.title)
        }
    }

    /// Resolve a suggestion answer against the catalog and update the form
    pub fn apply_suggestion(&mut self, suggestion: Option<String>) -> SuggestionOutcome {
        let Some(name) = suggestion else {
            return SuggestionOutcome::Nothing;
        };

        match departments::by_name(&name) {
            Some(department) => {
                self.department = Some(department.id);
                self.popup = Some(format!("Hệ thống gợi ý phòng: {}", department.name));
                SuggestionOutcome::Matched(department)
            }
            None => {
                self.popup = Some(format!("Không tìm thấy phòng phù hợp cho: \"{}\"", name));
                SuggestionOutcome::Unmatched(name)
            }
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    /// Build the creation request from the current input
    pub fn to_request(&self) -> NewIncident {
        NewIncident::from_form(&self.title, &self.description, self.department)
    }
}
