use super::ClientController;
use crate::api::Transport;
use crate::session::KeyValueStore;
use crate::types::AnswerSubmission;
use crate::view::{Field, ListTarget, View};

pub const NO_MORE_QUESTIONS: &str = "⚠️ No more questions available.";
pub const ANSWER_REQUIRED: &str = "Please enter your answer.";
pub const NO_QUESTION_SELECTED: &str = "No question selected.";
pub const NO_HISTORY: &str = "No history found.";

impl<T, S, V> ClientController<T, S, V>
where
    T: Transport,
    S: KeyValueStore,
    V: View,
{
    /// On a transport failure the pending question id is left as it was.
    pub async fn load_question(&self) {
        match self.api.get_question().await {
            Ok(Some(question)) => {
                self.view.show_question(&question.text);
                self.view.set_pending_question_id(&question.id);
            }
            Ok(None) => {
                self.view.show_question(NO_MORE_QUESTIONS);
                self.view.set_pending_question_id("");
            }
            Err(err) => self.report(err, "Error fetching question.", "Error fetching question."),
        }
    }

    pub async fn next_question(&self) {
        self.load_question().await
    }

    pub async fn submit_answer(&self) {
        let answer = self.view.field_value(Field::Answer);
        let answer = answer.trim();
        if answer.is_empty() {
            return self.view.alert(ANSWER_REQUIRED);
        }
        let question_id = self.view.pending_question_id();
        if question_id.is_empty() {
            return self.view.alert(NO_QUESTION_SELECTED);
        }

        let session = self.sessions.get_session();
        let submission = AnswerSubmission {
            username: session.username.as_deref(),
            question_id: &question_id,
            answer,
        };
        match self.api.submit_answer(&submission).await {
            Ok(feedback) => {
                self.view.alert(&feedback.to_string());
                self.view.clear_field(Field::Answer);
                self.load_question().await;
            }
            Err(err) => self.report(
                err,
                "Error submitting answer",
                "Server error while submitting answer.",
            ),
        }
    }

    /// A failed request leaves the rendered list untouched. Without a stored
    /// username there is nothing to look up and the placeholder is shown.
    pub async fn load_history(&self) {
        let Some(username) = self
            .sessions
            .get_session()
            .username
            .filter(|name| !name.is_empty())
        else {
            tracing::debug!("no stored username, history not requested");
            return self.view.render_list(ListTarget::History, vec![NO_HISTORY.to_string()]);
        };
        match self.api.get_history(&username).await {
            Ok(entries) => self.render_lines(ListTarget::History, entries, NO_HISTORY),
            Err(err) => self.report(err, "Error loading history.", "Error loading history."),
        }
    }
}
