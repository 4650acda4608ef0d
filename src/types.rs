use std::fmt;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;
use serde_json::Value;

pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];
pub const DEFAULT_DIFFICULTY: &str = "medium";

const UNAVAILABLE: &str = "unavailable";

/// Role as the client routes on it. The backend's role string itself is
/// stored untouched; only `admin` selects the admin destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn of(role: &str) -> Self {
        match role {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Session as read back from persistent storage. Either field may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredSession {
    pub username: Option<String>,
    pub role: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: String,
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct LoginReply {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SignupReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: Option<String>,
}

/// Used by the admin endpoints, which the client reports on whatever the status.
#[derive(Deserialize, Debug, Default)]
pub struct MessageReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageReply {
    pub fn text(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct QuestionReply {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub id: String,
}

#[derive(Serialize, Debug)]
pub struct AnswerSubmission<'a> {
    pub username: Option<&'a str>,
    pub question_id: &'a str,
    pub answer: &'a str,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct AnswerFeedback {
    #[serde(default)]
    pub feedback: Option<String>,
    /// Shown as sent: a number or a string both pass through.
    #[serde(default)]
    pub confidence: Value,
}

impl fmt::Display for AnswerFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feedback: {}\nConfidence: ", shown(&self.feedback))?;
        match &self.confidence {
            Value::Null => f.write_str(UNAVAILABLE),
            Value::String(text) => f.write_str(text),
            Value::Number(n) => match n.as_f64() {
                Some(n) => write!(f, "{}", n),
                None => write!(f, "{}", n),
            },
            other => write!(f, "{}", other),
        }
    }
}

fn shown(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(UNAVAILABLE)
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} [{}]",
            shown(&self.question),
            shown(&self.answer),
            shown(&self.feedback)
        )
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", shown(&self.username), shown(&self.role))
    }
}

#[derive(Serialize, Debug)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub difficulty: &'a str,
}

/// A file picked for bulk question upload, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub contents: Vec<u8>,
}
