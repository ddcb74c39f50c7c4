//! Incident view-state controller
//!
//! Owns the router and the per-view data (list, detail, create form), turns
//! user intents into router transitions and backend calls, and applies the
//! results when they come back.
//!
//! Backend calls run in spawned tasks and report through an mpsc channel as
//! [`Completion`]s, which the UI loop feeds back into [`Controller::apply`].
//! Each completion carries the [`Ticket`] it was issued with; anything that is
//! no longer the newest ticket of its slot is dropped.

pub mod form;
pub mod router;
pub mod sequence;

pub use form::{CreateForm, FormField, SuggestionOutcome};
pub use router::{Nav, RejectedTransition, Router, Screen, SidebarItem};
pub use sequence::{RequestSequence, Ticket};

use crate::client::{list_query, ClientError, IncidentRepository};
use crate::incidents::{
    duplicate_ids, normalize, CreatedIncident, Incident, IncidentDetail, IncidentStatus, Severity,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion channel capacity
pub const COMPLETION_BUFFER: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Completions
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a spawned backend call, tagged with its ticket
#[derive(Debug)]
pub enum Completion {
    List {
        ticket: Ticket,
        result: Result<Vec<Incident>, ClientError>,
    },
    Detail {
        ticket: Ticket,
        detail: IncidentDetail,
        fallback: Option<FallbackReason>,
    },
    Created {
        ticket: Ticket,
        result: Result<CreatedIncident, ClientError>,
    },
    Suggestion {
        ticket: Ticket,
        suggestion: Option<String>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail fallback
// ─────────────────────────────────────────────────────────────────────────────

/// Why the detail view is showing the placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Server answered with a non-2xx status
    Status(u16),
    /// Request never got an answer
    Network,
    /// Answer didn't decode as a detail payload
    Malformed,
}

impl From<&ClientError> for FallbackReason {
    fn from(err: &ClientError) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status);
        }
        match err {
            ClientError::Decode(_) => Self::Malformed,
            _ => Self::Network,
        }
    }
}

/// Fetch a detail payload, substituting the placeholder on any failure
///
/// The failure is logged with its kind but never surfaced to the user.
pub async fn detail_or_placeholder(
    repo: &dyn IncidentRepository,
    id: i64,
) -> (IncidentDetail, Option<FallbackReason>) {
    match repo.get_incident_detail(id).await {
        Ok(detail) => (detail, None),
        Err(e) => {
            let reason = FallbackReason::from(&e);
            tracing::warn!(
                "Detail for incident {} unavailable ({:?}: {}), showing placeholder",
                id,
                reason,
                e
            );
            (IncidentDetail::placeholder(), Some(reason))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View states
// ─────────────────────────────────────────────────────────────────────────────

/// Incident list screen
#[derive(Debug, Default)]
pub struct ListState {
    /// Raw search box text (trimmed when sent)
    pub query: String,
    pub items: Vec<Incident>,
    pub error: Option<String>,
    /// Highlighted row
    pub selected: usize,
    seq: RequestSequence,
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        self.seq.is_pending()
    }

    pub fn selected_incident(&self) -> Option<&Incident> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }
}

/// Incident detail screen
#[derive(Debug, Default)]
pub struct DetailState {
    pub detail: Option<IncidentDetail>,
    pub fallback: Option<FallbackReason>,
    /// Status of the list row that was opened, when known
    pub status: Option<IncidentStatus>,
    seq: RequestSequence,
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        self.seq.is_pending()
    }

    /// Severity badge for the open incident; critical when unknown
    pub fn severity(&self) -> Severity {
        self.status
            .as_ref()
            .map(Severity::from_status)
            .unwrap_or(Severity::S1)
    }
}

/// Create-incident screen
#[derive(Debug, Default)]
pub struct CreateState {
    pub form: CreateForm,
    submit: RequestSequence,
    suggest: RequestSequence,
}

impl CreateState {
    pub fn is_submitting(&self) -> bool {
        self.submit.is_pending()
    }

    pub fn is_suggesting(&self) -> bool {
        self.suggest.is_pending()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controller
// ─────────────────────────────────────────────────────────────────────────────

pub struct Controller {
    repo: Arc<dyn IncidentRepository>,
    completions: mpsc::Sender<Completion>,
    router: Router,
    pub list: ListState,
    pub detail: DetailState,
    pub create: CreateState,
    /// One-shot message for the UI (toast)
    notice: Option<String>,
}

impl Controller {
    /// Create a controller and the receiving end of its completion channel
    pub fn new(repo: Arc<dyn IncidentRepository>) -> (Self, mpsc::Receiver<Completion>) {
        let (tx, rx) = mpsc::channel(COMPLETION_BUFFER);
        let controller = Self {
            repo,
            completions: tx,
            router: Router::new(),
            list: ListState::default(),
            detail: DetailState::default(),
            create: CreateState::default(),
            notice: None,
        };
        (controller, rx)
    }

    pub fn screen(&self) -> Screen {
        self.router.screen()
    }

    /// Whether any backend call is in flight (drives the spinner)
    pub fn is_busy(&self) -> bool {
        self.list.is_loading()
            || self.detail.is_loading()
            || self.create.is_submitting()
            || self.create.is_suggesting()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Apply a navigation intent and run the enter/leave side effects
    pub fn navigate(&mut self, nav: Nav) -> Result<Screen, RejectedTransition> {
        let from = self.router.screen();
        let to = self.router.navigate(nav).inspect_err(|e| {
            tracing::debug!("Ignored navigation: {}", e);
        })?;

        if from != to {
            self.leave(from);
        }
        self.enter(to);
        Ok(to)
    }

    fn leave(&mut self, screen: Screen) {
        match screen {
            Screen::IncidentsList => self.list.seq.invalidate(),
            Screen::IncidentDetail(_) => {
                self.detail.seq.invalidate();
                self.detail.detail = None;
                self.detail.fallback = None;
            }
            Screen::CreateIncident => {
                self.create.submit.invalidate();
                self.create.suggest.invalidate();
            }
            _ => {}
        }
    }

    fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::IncidentsList => self.load_list(),
            Screen::IncidentDetail(id) => self.load_detail(id),
            Screen::CreateIncident => self.create.form = CreateForm::new(),
            _ => {}
        }
    }

    // ─── List ─────────────────────────────────────────────────────────────

    /// Replace the search text and refetch
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.list.query = query.into();
        self.load_list();
    }

    /// Fetch the list for the current query; supersedes any fetch in flight
    pub fn load_list(&mut self) {
        let ticket = self.list.seq.issue();
        self.list.error = None;
        let query = list_query(&self.list.query).map(str::to_string);
        let repo = self.repo.clone();
        let tx = self.completions.clone();

        tokio::spawn(async move {
            let result = repo
                .list_incidents(query.as_deref())
                .await
                .map(normalize);
            let _ = tx.send(Completion::List { ticket, result }).await;
        });
    }

    /// Open the highlighted row
    pub fn open_selected(&mut self) -> Result<Screen, RejectedTransition> {
        match self.list.selected_incident() {
            Some(incident) => {
                let id = incident.id;
                self.navigate(Nav::Select(id))
            }
            None => Err(RejectedTransition {
                from: self.screen(),
                nav: Nav::Select(-1),
            }),
        }
    }

    // ─── Detail ───────────────────────────────────────────────────────────

    fn load_detail(&mut self, id: i64) {
        let ticket = self.detail.seq.issue();
        self.detail.detail = None;
        self.detail.fallback = None;
        self.detail.status = self
            .list
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.status.clone());

        let repo = self.repo.clone();
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let (detail, fallback) = detail_or_placeholder(repo.as_ref(), id).await;
            let _ = tx
                .send(Completion::Detail {
                    ticket,
                    detail,
                    fallback,
                })
                .await;
        });
    }

    // ─── Create ───────────────────────────────────────────────────────────

    /// Submit the create form; ignored while a submit is in flight
    pub fn submit_create(&mut self) {
        if self.create.is_submitting() {
            return;
        }
        let ticket = self.create.submit.issue();
        self.create.form.error = None;
        let request = self.create.form.to_request();
        let repo = self.repo.clone();
        let tx = self.completions.clone();

        tokio::spawn(async move {
            let result = repo.create_incident(&request).await;
            let _ = tx.send(Completion::Created { ticket, result }).await;
        });
    }

    /// Move focus within the form, asking for a suggestion when the
    /// description field loses focus
    pub fn focus_form(&mut self, field: FormField) {
        if self.create.form.set_focus(field) {
            self.request_suggestion();
        }
    }

    pub fn focus_form_next(&mut self) {
        let next = self.create.form.focus.next();
        self.focus_form(next);
    }

    pub fn focus_form_prev(&mut self) {
        let prev = self.create.form.focus.prev();
        self.focus_form(prev);
    }

    fn request_suggestion(&mut self) {
        let Some(title) = self.create.form.suggestion_title().map(str::to_string) else {
            return;
        };
        let ticket = self.create.suggest.issue();
        let repo = self.repo.clone();
        let tx = self.completions.clone();

        tokio::spawn(async move {
            let suggestion = repo.suggest_department(&title).await;
            let _ = tx.send(Completion::Suggestion { ticket, suggestion }).await;
        });
    }

    // ─── Completions ──────────────────────────────────────────────────────

    /// Apply a finished call; returns false when it was stale and dropped
    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::List { ticket, result } => {
                if !self.list.seq.complete(ticket) {
                    tracing::debug!("Dropped stale list response (ticket {})", ticket.value());
                    return false;
                }
                match result {
                    Ok(items) => {
                        let dups = duplicate_ids(&items);
                        if !dups.is_empty() {
                            tracing::warn!("Incident list has repeated ids: {:?}", dups);
                        }
                        tracing::debug!("Loaded {} incidents", items.len());
                        self.list.items = items;
                        self.list.error = None;
                        self.list.clamp_selection();
                    }
                    Err(e) => {
                        tracing::error!("Incident list failed: {}", e);
                        self.list.items.clear();
                        self.list.selected = 0;
                        self.list.error = Some(format!("Không tải được danh sách sự cố: {}", e));
                    }
                }
            }
            Completion::Detail {
                ticket,
                detail,
                fallback,
            } => {
                if !self.detail.seq.complete(ticket) {
                    tracing::debug!("Dropped stale detail response (ticket {})", ticket.value());
                    return false;
                }
                self.detail.detail = Some(detail);
                self.detail.fallback = fallback;
            }
            Completion::Created { ticket, result } => {
                if !self.create.submit.complete(ticket) {
                    tracing::debug!("Dropped stale create response (ticket {})", ticket.value());
                    return false;
                }
                match result {
                    Ok(created) => {
                        self.notice = Some(match created.id() {
                            Some(id) => format!("Đã tạo sự cố #{}", id),
                            None => "Đã tạo sự cố".to_string(),
                        });
                        let _ = self.navigate(Nav::Created);
                    }
                    Err(e) => {
                        tracing::error!("Create incident failed: {}", e);
                        self.create.form.error = Some(e.to_string());
                    }
                }
            }
            Completion::Suggestion { ticket, suggestion } => {
                if !self.create.suggest.complete(ticket) {
                    tracing::debug!("Dropped stale suggestion (ticket {})", ticket.value());
                    return false;
                }
                match self.create.form.apply_suggestion(suggestion) {
                    SuggestionOutcome::Matched(d) => {
                        tracing::info!("Department suggested: {} ({})", d.name, d.code)
                    }
                    SuggestionOutcome::Unmatched(name) => {
                        tracing::info!("Suggested department not in catalog: {:?}", name)
                    }
                    SuggestionOutcome::Nothing => {}
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{canned, dead_backend, spawn_backend};
    use crate::incidents::{NewIncident, RawIncident};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Scripted repository: answers depend on the request, calls are recorded
    #[derive(Default)]
    struct FakeRepo {
        fail_list: bool,
        fail_detail: Option<u16>,
        reject_create: Option<u16>,
        suggestion: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRepo {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IncidentRepository for FakeRepo {
        async fn list_incidents(
            &self,
            query: Option<&str>,
        ) -> Result<Vec<RawIncident>, ClientError> {
            self.calls.lock().unwrap().push(format!("list:{:?}", query));
            if self.fail_list {
                return Err(ClientError::Server { status: 500 });
            }
            let name = query.unwrap_or("all");
            Ok(vec![
                serde_json::from_value(json!({
                    "incidentId": 7, "incidentName": name, "status": "IN_PROGRESS"
                }))
                .unwrap(),
                serde_json::from_value(json!({"incidentName": format!("{name} 2")})).unwrap(),
            ])
        }

        async fn get_incident_detail(&self, id: i64) -> Result<IncidentDetail, ClientError> {
            self.calls.lock().unwrap().push(format!("detail:{}", id));
            match self.fail_detail {
                Some(status) => Err(ClientError::Server { status }),
                None => Ok(IncidentDetail {
                    detail: format!("incident {id}"),
                    departure: "Phòng Tích hợp".into(),
                    reason_list: vec![],
                }),
            }
        }

        async fn create_incident(
            &self,
            incident: &NewIncident,
        ) -> Result<CreatedIncident, ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create:{}", incident.name));
            match self.reject_create {
                Some(status) => Err(ClientError::Validation {
                    status,
                    message: "rejected".into(),
                }),
                None => Ok(CreatedIncident {
                    record: json!({"incidentId": 99}),
                }),
            }
        }

        async fn suggest_department(&self, title: &str) -> Option<String> {
            self.calls.lock().unwrap().push(format!("suggest:{}", title));
            self.suggestion.clone()
        }
    }

    fn controller(repo: FakeRepo) -> (Controller, mpsc::Receiver<Completion>, Arc<FakeRepo>) {
        let repo = Arc::new(repo);
        let (controller, rx) = Controller::new(repo.clone());
        (controller, rx, repo)
    }

    async fn pump(controller: &mut Controller, rx: &mut mpsc::Receiver<Completion>) -> bool {
        let completion = rx.recv().await.expect("completion channel closed");
        controller.apply(completion)
    }

    #[tokio::test]
    async fn entering_list_fetches_and_normalizes() {
        let (mut c, mut rx, repo) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        assert!(c.list.is_loading());

        assert!(pump(&mut c, &mut rx).await);
        assert!(!c.list.is_loading());
        let ids: Vec<i64> = c.list.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 1]);
        assert_eq!(repo.calls(), vec!["list:None"]);
    }

    #[tokio::test]
    async fn query_is_trimmed_and_blank_means_all() {
        let (mut c, mut rx, repo) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;

        c.set_query(" DB ");
        pump(&mut c, &mut rx).await;
        c.set_query("  ");
        pump(&mut c, &mut rx).await;

        assert_eq!(
            repo.calls(),
            vec!["list:None", "list:Some(\"DB\")", "list:None"]
        );
    }

    #[tokio::test]
    async fn stale_list_response_is_dropped() {
        let (mut c, mut rx, _) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        c.set_query("D");
        c.set_query("DB");

        let mut applied = 0;
        for _ in 0..3 {
            if pump(&mut c, &mut rx).await {
                applied += 1;
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(c.list.items[0].name, "DB");
    }

    #[tokio::test]
    async fn list_failure_degrades_to_empty_with_message() {
        let (mut c, mut rx, _) = controller(FakeRepo {
            fail_list: true,
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        assert!(c.list.items.is_empty());
        assert_eq!(
            c.list.error.as_deref(),
            Some("Không tải được danh sách sự cố: server returned HTTP 500")
        );
    }

    #[tokio::test]
    async fn select_row_opens_detail_with_list_status() {
        let (mut c, mut rx, repo) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;

        assert_eq!(c.open_selected(), Ok(Screen::IncidentDetail(7)));
        assert_eq!(c.detail.severity(), Severity::S2);
        pump(&mut c, &mut rx).await;
        assert_eq!(c.detail.detail.as_ref().unwrap().detail, "incident 7");
        assert_eq!(c.detail.fallback, None);
        assert!(repo.calls().contains(&"detail:7".to_string()));

        assert_eq!(c.navigate(Nav::Back), Ok(Screen::IncidentsList));
        assert!(c.detail.detail.is_none());
    }

    #[tokio::test]
    async fn detail_failure_shows_placeholder_in_place() {
        let (mut c, mut rx, _) = controller(FakeRepo {
            fail_detail: Some(404),
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::Select(7)).unwrap();
        pump(&mut c, &mut rx).await;

        assert_eq!(c.screen(), Screen::IncidentDetail(7));
        assert_eq!(c.detail.detail, Some(IncidentDetail::placeholder()));
        assert_eq!(c.detail.fallback, Some(FallbackReason::Status(404)));
    }

    #[tokio::test]
    async fn detail_arriving_after_leaving_is_dropped() {
        let (mut c, mut rx, _) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;

        c.navigate(Nav::Select(7)).unwrap();
        c.navigate(Nav::Back).unwrap();
        // detail completion and the list reload both arrive; only the list applies
        let mut results = Vec::new();
        for _ in 0..2 {
            let completion = rx.recv().await.unwrap();
            let is_detail = matches!(completion, Completion::Detail { .. });
            results.push((is_detail, c.apply(completion)));
        }
        assert!(results.contains(&(true, false)));
        assert!(results.contains(&(false, true)));
        assert!(c.detail.detail.is_none());
    }

    #[tokio::test]
    async fn create_success_returns_to_list_and_reloads() {
        let (mut c, mut rx, repo) = controller(FakeRepo::default());
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::CreateNew).unwrap();
        c.create.form.title = "DB down".into();
        c.submit_create();
        assert!(c.create.is_submitting());
        pump(&mut c, &mut rx).await;

        assert_eq!(c.screen(), Screen::IncidentsList);
        assert_eq!(c.take_notice().as_deref(), Some("Đã tạo sự cố #99"));
        pump(&mut c, &mut rx).await;
        assert_eq!(
            repo.calls(),
            vec!["list:None", "create:DB down", "list:None"]
        );
    }

    #[tokio::test]
    async fn create_rejection_stays_on_form_with_error() {
        let (mut c, mut rx, _) = controller(FakeRepo {
            reject_create: Some(400),
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::CreateNew).unwrap();
        c.submit_create();
        pump(&mut c, &mut rx).await;

        assert_eq!(c.screen(), Screen::CreateIncident);
        assert_eq!(
            c.create.form.error.as_deref(),
            Some("incident rejected (HTTP 400): rejected")
        );
    }

    #[tokio::test]
    async fn description_blur_triggers_suggestion() {
        let (mut c, mut rx, repo) = controller(FakeRepo {
            suggestion: Some("Phòng Tích hợp".into()),
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::CreateNew).unwrap();

        // No title yet: leaving the description does nothing
        c.focus_form(FormField::Description);
        c.focus_form(FormField::Department);
        assert!(!c.create.is_suggesting());

        c.create.form.title = "Gateway 502".into();
        c.focus_form(FormField::Description);
        c.focus_form_next();
        assert!(c.create.is_suggesting());
        pump(&mut c, &mut rx).await;

        assert_eq!(c.create.form.department, Some(2));
        assert!(repo.calls().contains(&"suggest:Gateway 502".to_string()));
    }

    #[tokio::test]
    async fn every_description_blur_asks_again_and_latest_wins() {
        let (mut c, mut rx, repo) = controller(FakeRepo {
            suggestion: Some("Phòng Tích hợp".into()),
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::CreateNew).unwrap();

        c.create.form.title = "Gateway 502".into();
        c.focus_form(FormField::Description);
        c.focus_form(FormField::Department);
        c.create.form.title = "Gateway 504".into();
        c.focus_form(FormField::Description);
        c.focus_form(FormField::Title);

        let mut completions = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        completions.sort_by_key(|done| match done {
            Completion::Suggestion { ticket, .. } => *ticket,
            other => panic!("unexpected completion {:?}", other),
        });
        let mut completions = completions.into_iter();

        assert!(!c.apply(completions.next().unwrap()));
        assert_eq!(c.create.form.department, None);
        assert!(c.create.is_suggesting());

        assert!(c.apply(completions.next().unwrap()));
        assert_eq!(c.create.form.department, Some(2));
        assert!(!c.create.is_suggesting());

        let mut suggests: Vec<String> = repo
            .calls()
            .into_iter()
            .filter(|call| call.starts_with("suggest:"))
            .collect();
        suggests.sort();
        assert_eq!(suggests, vec!["suggest:Gateway 502", "suggest:Gateway 504"]);
    }

    #[tokio::test]
    async fn unmatched_suggestion_leaves_selection_unset() {
        let (mut c, mut rx, _) = controller(FakeRepo {
            suggestion: Some("Unknown Dept".into()),
            ..Default::default()
        });
        c.navigate(Nav::Sidebar(SidebarItem::Incidents)).unwrap();
        pump(&mut c, &mut rx).await;
        c.navigate(Nav::CreateNew).unwrap();
        c.create.form.title = "something".into();
        c.focus_form(FormField::Description);
        c.focus_form(FormField::Title);
        pump(&mut c, &mut rx).await;

        assert_eq!(c.create.form.department, None);
        assert_eq!(
            c.create.form.popup.as_deref(),
            Some("Không tìm thấy phòng phù hợp cho: \"Unknown Dept\"")
        );
    }

    #[tokio::test]
    async fn placeholder_on_http_error_status() {
        let (client, _) = spawn_backend(canned(500, "boom")).await;
        let (detail, reason) = detail_or_placeholder(&client, 3).await;
        assert_eq!(detail, IncidentDetail::placeholder());
        assert_eq!(reason, Some(FallbackReason::Status(500)));
    }

    #[tokio::test]
    async fn placeholder_on_network_failure() {
        let client = dead_backend().await;
        let (detail, reason) = detail_or_placeholder(&client, 3).await;
        assert_eq!(detail, IncidentDetail::placeholder());
        assert_eq!(reason, Some(FallbackReason::Network));
    }

    #[tokio::test]
    async fn placeholder_on_malformed_body() {
        let (client, _) = spawn_backend(canned(200, "[1, 2, 3]")).await;
        let (detail, reason) = detail_or_placeholder(&client, 3).await;
        assert_eq!(detail, IncidentDetail::placeholder());
        assert_eq!(reason, Some(FallbackReason::Malformed));
    }

    #[tokio::test]
    async fn real_detail_passes_through() {
        let body = json!({"detail": "VPN down", "departure": "", "reasonList": []});
        let (client, _) = spawn_backend(canned(200, body.to_string())).await;
        let (detail, reason) = detail_or_placeholder(&client, 3).await;
        assert_eq!(detail.detail, "VPN down");
        assert_eq!(detail.department_display(), "Chưa rõ");
        assert_eq!(reason, None);
    }
}
