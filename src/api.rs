use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{
    AnswerFeedback, AnswerSubmission, Credentials, HistoryEntry, LoginReply, MessageReply,
    NewQuestion, Question, QuestionReply, SignupReply, UploadFile, UserRecord,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// Sent as `multipart/form-data` under the `file` field.
    Upload(UploadFile),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip. No retries, no timeout beyond the platform default.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError>;
}

#[derive(Clone)]
pub struct ApiClient<T> {
    config: Rc<ClientConfig>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Rc<ClientConfig>, transport: T) -> Self {
        Self { config, transport }
    }

    pub async fn login(&self, credentials: &Credentials<'_>) -> Result<LoginReply, ClientError> {
        let raw = self.post_json("/login", credentials).await?;
        expect_success(&raw)
    }

    pub async fn signup(&self, credentials: &Credentials<'_>) -> Result<SignupReply, ClientError> {
        let raw = self.post_json("/signup", credentials).await?;
        expect_success(&raw)
    }

    /// `None` when the backend has nothing left to ask, including a non-2xx reply.
    pub async fn get_question(&self) -> Result<Option<Question>, ClientError> {
        let raw = self.get("/get_question").await?;
        let reply: QuestionReply = decode(&raw)?;
        Ok(match reply.question {
            Some(text) if raw.is_success() && !text.is_empty() => Some(Question { id: reply.id, text }),
            _ => None,
        })
    }

    pub async fn submit_answer(&self, submission: &AnswerSubmission<'_>) -> Result<AnswerFeedback, ClientError> {
        let raw = self.post_json("/submit_answer", submission).await?;
        expect_success(&raw)
    }

    pub async fn get_history(&self, username: &str) -> Result<Vec<HistoryEntry>, ClientError> {
        let raw = self.get(&format!("/get_history/{}", username)).await?;
        list_or_empty(&raw)
    }

    /// Reported on whatever the status, so the reply is returned undecided.
    pub async fn add_question(&self, question: &NewQuestion<'_>) -> Result<MessageReply, ClientError> {
        let raw = self.post_json("/admin/add_question", question).await?;
        decode(&raw)
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let raw = self.get("/admin/get_all_users").await?;
        list_or_empty(&raw)
    }

    pub async fn upload_questions(&self, file: UploadFile) -> Result<MessageReply, ClientError> {
        let raw = self
            .send(Method::Post, "/admin/upload_questions", RequestBody::Upload(file))
            .await?;
        decode(&raw)
    }

    async fn get(&self, path: &str) -> Result<RawResponse, ClientError> {
        self.send(Method::Get, path, RequestBody::Empty).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, ClientError> {
        let json = serde_json::to_string(body)?;
        self.send(Method::Post, path, RequestBody::Json(json)).await
    }

    async fn send(&self, method: Method, path: &str, body: RequestBody) -> Result<RawResponse, ClientError> {
        let url = self.config.endpoint(path);
        tracing::debug!(method = method.as_str(), %url, "sending request");
        let response = self.transport.send(ApiRequest { method, url, body }).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn decode<B: DeserializeOwned>(raw: &RawResponse) -> Result<B, ClientError> {
    Ok(serde_json::from_str(&raw.body)?)
}

fn expect_success<B: DeserializeOwned>(raw: &RawResponse) -> Result<B, ClientError> {
    if raw.is_success() {
        return decode(raw);
    }
    let value: serde_json::Value = decode(raw)?;
    Err(ClientError::Backend {
        status: raw.status,
        message: value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string),
    })
}

/// Lists degrade to empty on a non-2xx reply or a non-array body.
fn list_or_empty<B: DeserializeOwned>(raw: &RawResponse) -> Result<Vec<B>, ClientError> {
    let value: serde_json::Value = decode(raw)?;
    if !raw.is_success() || !value.is_array() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        fetch(request).await.map_err(js_error)
    }
}

async fn fetch(request: ApiRequest) -> Result<RawResponse, JsValue> {
    let opts = web_sys::RequestInit::new();
    opts.set_method(request.method.as_str());
    match request.body {
        RequestBody::Empty => {}
        RequestBody::Json(json) => {
            let headers = web_sys::Headers::new()?;
            headers.set("Content-Type", "application/json")?;
            opts.set_headers(&headers);
            opts.set_body(&JsValue::from_str(&json));
        }
        RequestBody::Upload(file) => {
            let form = web_sys::FormData::new()?;
            let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.contents.as_slice()));
            let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
            form.append_with_blob_and_filename("file", &blob, &file.name)?;
            opts.set_body(&form.into());
        }
    }

    let request = web_sys::Request::new_with_str_and_init(&request.url, &opts)?;
    let window = web_sys::window().ok_or("window not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

fn js_error(value: JsValue) -> ClientError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ClientError::Transport(message)
}
