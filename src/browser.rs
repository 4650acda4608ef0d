use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::functional::UseForceUpdateHandle;
use yew::NodeRef;
use yew_router::Routable;

use crate::error::ClientError;
use crate::router::Route;
use crate::session::KeyValueStore;
use crate::types::UploadFile;
use crate::view::{Field, ListTarget, View};

/// Browser `localStorage`. Unavailable storage reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, ClientError> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("window not available".to_string()))?
            .local_storage()
            .map_err(|_| ClientError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| ClientError::Storage("localStorage not available".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| ClientError::Storage(format!("cannot write {}", key)))
    }

    fn clear(&self) -> Result<(), ClientError> {
        Self::storage()?
            .clear()
            .map_err(|_| ClientError::Storage("cannot clear localStorage".to_string()))
    }
}

/// Everything the flows render that is not an input field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageModel {
    pub display_name: String,
    pub question: String,
    pub pending_question_id: String,
    pub history: Vec<String>,
    pub users: Vec<String>,
}

/// Uncontrolled inputs, one node ref per field.
#[derive(Clone, PartialEq)]
pub struct FieldRefs {
    refs: HashMap<Field, NodeRef>,
}

impl FieldRefs {
    pub fn new() -> Self {
        Self {
            refs: Field::ALL
                .iter()
                .map(|field| (*field, NodeRef::default()))
                .collect(),
        }
    }

    pub fn node(&self, field: Field) -> NodeRef {
        self.refs.get(&field).cloned().unwrap_or_default()
    }

    pub fn value(&self, field: Field) -> String {
        let node = self.node(field);
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| node.cast::<HtmlSelectElement>().map(|select| select.value()))
            .unwrap_or_default()
    }

    pub fn clear(&self, field: Field) {
        if let Some(input) = self.node(field).cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

impl Default for FieldRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// `View` backed by the Yew page: model changes trigger a re-render.
#[derive(Clone)]
pub struct BrowserView {
    model: Rc<RefCell<PageModel>>,
    refresh: UseForceUpdateHandle,
    fields: Rc<FieldRefs>,
}

impl BrowserView {
    pub fn new(model: Rc<RefCell<PageModel>>, refresh: UseForceUpdateHandle, fields: Rc<FieldRefs>) -> Self {
        Self { model, refresh, fields }
    }

    fn update(&self, apply: impl FnOnce(&mut PageModel)) {
        apply(&mut self.model.borrow_mut());
        self.refresh.force_update();
    }
}

impl View for BrowserView {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(&route.to_path()) {
            tracing::error!(error = ?e, ?route, "navigation failed");
        }
    }

    fn field_value(&self, field: Field) -> String {
        self.fields.value(field)
    }

    fn clear_field(&self, field: Field) {
        self.fields.clear(field);
    }

    fn set_display_name(&self, name: &str) {
        self.update(|model| model.display_name = name.to_string());
    }

    fn show_question(&self, text: &str) {
        self.update(|model| model.question = text.to_string());
    }

    fn pending_question_id(&self) -> String {
        self.model.borrow().pending_question_id.clone()
    }

    fn set_pending_question_id(&self, id: &str) {
        self.update(|model| model.pending_question_id = id.to_string());
    }

    fn render_list(&self, target: ListTarget, items: Vec<String>) {
        self.update(|model| match target {
            ListTarget::History => model.history = items,
            ListTarget::Users => model.users = items,
        });
    }
}

/// Reads the first file selected in a file input.
pub async fn read_selected_file(input: &NodeRef) -> Result<Option<UploadFile>, JsValue> {
    let Some(file) = input
        .cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
    else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Some(UploadFile {
        name: file.name(),
        contents: js_sys::Uint8Array::new(&buffer).to_vec(),
    }))
}
