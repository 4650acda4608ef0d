use super::ClientController;
use crate::api::Transport;
use crate::session::KeyValueStore;
use crate::types::{NewQuestion, UploadFile};
use crate::view::{Field, ListTarget, View};

pub const QUESTION_REQUIRED: &str = "Please enter a question.";
pub const UPLOAD_FILE_REQUIRED: &str = "Please choose a file to upload.";
pub const NO_USERS: &str = "No users found.";

impl<T, S, V> ClientController<T, S, V>
where
    T: Transport,
    S: KeyValueStore,
    V: View,
{
    /// Any decoded reply, success or not, is alerted and clears the input.
    pub async fn add_question(&self) {
        let question = self.view.field_value(Field::NewQuestion);
        let question = question.trim();
        if question.is_empty() {
            return self.view.alert(QUESTION_REQUIRED);
        }
        let difficulty = self.view.field_value(Field::Difficulty);

        let request = NewQuestion {
            question,
            difficulty: &difficulty,
        };
        match self.api.add_question(&request).await {
            Ok(reply) => {
                let text = reply.text();
                self.view
                    .alert(text.as_deref().unwrap_or("Error adding question."));
                self.view.clear_field(Field::NewQuestion);
            }
            Err(err) => self.report(err, "Error adding question.", "Error adding question."),
        }
    }

    pub async fn load_users(&self) {
        match self.api.get_all_users().await {
            Ok(users) => self.render_lines(ListTarget::Users, users, NO_USERS),
            Err(err) => self.report(err, "Error loading users.", "Error loading users."),
        }
    }

    pub async fn upload_questions(&self, file: Option<UploadFile>) {
        let Some(file) = file else {
            return self.view.alert(UPLOAD_FILE_REQUIRED);
        };

        tracing::info!(file = %file.name, bytes = file.contents.len(), "uploading questions");
        match self.api.upload_questions(file).await {
            Ok(reply) => {
                let text = reply.text();
                self.view
                    .alert(text.as_deref().unwrap_or("Error uploading questions."));
            }
            Err(err) => self.report(
                err,
                "Error uploading questions.",
                "Error uploading questions.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestBody;
    use crate::test_support::{harness, RecordingView};
    use futures::executor::block_on;

    #[test]
    fn test_blank_question_is_local() {
        let h = harness(RecordingView::new().with_field(Field::NewQuestion, "  \n"));

        block_on(h.controller.add_question());

        assert_eq!(h.view.alerts(), vec![QUESTION_REQUIRED]);
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_add_question_passes_difficulty_through_and_clears() {
        let h = harness(
            RecordingView::new()
                .with_field(Field::NewQuestion, " What does `?` do? ")
                .with_field(Field::Difficulty, "extreme"),
        );
        h.transport.reply(200, r#"{"message": "Question added successfully"}"#);

        block_on(h.controller.add_question());

        assert_eq!(h.view.alerts(), vec!["Question added successfully"]);
        assert_eq!(h.view.field(Field::NewQuestion), "");
        assert_eq!(
            h.transport.requests()[0].json(),
            serde_json::json!({"question": "What does `?` do?", "difficulty": "extreme"})
        );
    }

    #[test]
    fn test_add_question_clears_after_backend_failure() {
        let h = harness(
            RecordingView::new()
                .with_field(Field::NewQuestion, "Explain borrowing")
                .with_field(Field::Difficulty, "medium"),
        );
        h.transport.reply(500, r#"{"error": "database is locked"}"#);

        block_on(h.controller.add_question());

        assert_eq!(h.view.alerts(), vec!["database is locked"]);
        assert_eq!(h.view.field(Field::NewQuestion), "");
    }

    #[test]
    fn test_add_question_transport_failure() {
        let h = harness(RecordingView::new().with_field(Field::NewQuestion, "Explain borrowing"));
        h.transport.fail("offline");

        block_on(h.controller.add_question());

        assert_eq!(h.view.alerts(), vec!["Error adding question."]);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[test]
    fn test_users_render_and_placeholder() {
        let h = harness(RecordingView::new().with_list(ListTarget::Users, &["old"]));
        h.transport.reply(
            200,
            r#"[{"username": "admin", "role": "admin"}, {"username": "alice", "role": "user"}]"#,
        );
        h.transport.reply(200, "[]");

        block_on(h.controller.load_users());
        assert_eq!(h.view.list(ListTarget::Users), vec!["admin (admin)", "alice (user)"]);

        block_on(h.controller.load_users());
        assert_eq!(h.view.list(ListTarget::Users), vec![NO_USERS]);
    }

    #[test]
    fn test_users_transport_failure() {
        let h = harness(RecordingView::new());
        h.transport.fail("offline");

        block_on(h.controller.load_users());

        assert_eq!(h.view.alerts(), vec!["Error loading users."]);
    }

    #[test]
    fn test_upload_requires_file() {
        let h = harness(RecordingView::new());

        block_on(h.controller.upload_questions(None));

        assert_eq!(h.view.alerts(), vec![UPLOAD_FILE_REQUIRED]);
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_upload_reports_backend_reply() {
        let h = harness(RecordingView::new());
        h.transport.reply(400, r#"{"error": "Only CSV or PDF allowed"}"#);
        let file = UploadFile {
            name: "questions.txt".to_string(),
            contents: b"What is a trait?".to_vec(),
        };

        block_on(h.controller.upload_questions(Some(file.clone())));

        assert_eq!(h.view.alerts(), vec!["Only CSV or PDF allowed"]);
        assert_eq!(h.transport.requests()[0].body, RequestBody::Upload(file));
    }

    #[test]
    fn test_upload_transport_failure() {
        let h = harness(RecordingView::new());
        h.transport.fail("offline");
        let file = UploadFile {
            name: "questions.csv".to_string(),
            contents: b"question,difficulty\n".to_vec(),
        };

        block_on(h.controller.upload_questions(Some(file)));

        assert_eq!(h.view.alerts(), vec!["Error uploading questions."]);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[test]
    fn test_upload_reply_without_message_or_error() {
        let h = harness(RecordingView::new());
        h.transport.reply(200, "{}");
        let file = UploadFile {
            name: "questions.pdf".to_string(),
            contents: b"%PDF-1.4".to_vec(),
        };

        block_on(h.controller.upload_questions(Some(file)));

        assert_eq!(h.view.alerts(), vec!["Error uploading questions."]);
    }
}
