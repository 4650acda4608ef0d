//! Test doubles for the transport and view seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::api::{ApiRequest, RawResponse, RequestBody, Transport};
use crate::config::ClientConfig;
use crate::controller::ClientController;
use crate::error::ClientError;
use crate::router::Route;
use crate::session::MemoryStore;
use crate::view::{Field, ListTarget, View};

impl ApiRequest {
    pub fn json(&self) -> serde_json::Value {
        match &self.body {
            RequestBody::Json(body) => serde_json::from_str(body).unwrap(),
            other => panic!("not a JSON body: {:?}", other),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, String>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, reason: &str) {
        self.replies.borrow_mut().push_back(Err(reason.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(ClientError::Transport(reason)),
            None => Err(ClientError::Transport("no scripted reply".to_string())),
        }
    }
}

#[derive(Default)]
struct Recorded {
    alerts: Vec<String>,
    navigations: Vec<Route>,
    fields: HashMap<Field, String>,
    display_name: String,
    question: String,
    pending_question_id: String,
    lists: HashMap<ListTarget, Vec<String>>,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    recorded: Rc<RefCell<Recorded>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, field: Field, value: &str) -> Self {
        self.recorded
            .borrow_mut()
            .fields
            .insert(field, value.to_string());
        self
    }

    pub fn with_pending_question(self, id: &str) -> Self {
        self.recorded.borrow_mut().pending_question_id = id.to_string();
        self
    }

    pub fn with_list(self, target: ListTarget, items: &[&str]) -> Self {
        self.recorded
            .borrow_mut()
            .lists
            .insert(target, items.iter().map(|i| i.to_string()).collect());
        self
    }

    pub fn alerts(&self) -> Vec<String> {
        self.recorded.borrow().alerts.clone()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.recorded.borrow().navigations.clone()
    }

    pub fn field(&self, field: Field) -> String {
        self.field_value(field)
    }

    pub fn display_name(&self) -> String {
        self.recorded.borrow().display_name.clone()
    }

    pub fn question(&self) -> String {
        self.recorded.borrow().question.clone()
    }

    pub fn list(&self, target: ListTarget) -> Vec<String> {
        self.recorded
            .borrow()
            .lists
            .get(&target)
            .cloned()
            .unwrap_or_default()
    }
}

impl View for RecordingView {
    fn alert(&self, message: &str) {
        self.recorded.borrow_mut().alerts.push(message.to_string());
    }

    fn navigate(&self, route: Route) {
        self.recorded.borrow_mut().navigations.push(route);
    }

    fn field_value(&self, field: Field) -> String {
        self.recorded
            .borrow()
            .fields
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn clear_field(&self, field: Field) {
        self.recorded.borrow_mut().fields.insert(field, String::new());
    }

    fn set_display_name(&self, name: &str) {
        self.recorded.borrow_mut().display_name = name.to_string();
    }

    fn show_question(&self, text: &str) {
        self.recorded.borrow_mut().question = text.to_string();
    }

    fn pending_question_id(&self) -> String {
        self.recorded.borrow().pending_question_id.clone()
    }

    fn set_pending_question_id(&self, id: &str) {
        self.recorded.borrow_mut().pending_question_id = id.to_string();
    }

    fn render_list(&self, target: ListTarget, items: Vec<String>) {
        self.recorded.borrow_mut().lists.insert(target, items);
    }
}

pub struct Harness {
    pub controller: ClientController<MockTransport, MemoryStore, RecordingView>,
    pub transport: MockTransport,
    pub store: MemoryStore,
    pub view: RecordingView,
}

pub fn harness(view: RecordingView) -> Harness {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    let config = ClientConfig::default().with_api_url("http://quiz.test");
    let controller = ClientController::new(
        Rc::new(config),
        transport.clone(),
        store.clone(),
        view.clone(),
    );
    Harness {
        controller,
        transport,
        store,
        view,
    }
}
