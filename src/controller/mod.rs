mod admin;
mod auth;
mod quiz;

use std::fmt::Display;
use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::router::{self, ActiveSession, AdminSession, PageEntry, Route};
use crate::session::{KeyValueStore, SessionManager};
use crate::view::{ListTarget, View};

pub use admin::{NO_USERS, QUESTION_REQUIRED, UPLOAD_FILE_REQUIRED};
pub use auth::CREDENTIALS_REQUIRED;
pub use quiz::{ANSWER_REQUIRED, NO_HISTORY, NO_MORE_QUESTIONS, NO_QUESTION_SELECTED};

/// Every user action and the page-load hook go through here. Each flow
/// issues at most the requests it needs, in order, and ends in view updates
/// or a single alert.
#[derive(Clone)]
pub struct ClientController<T, S, V> {
    api: ApiClient<T>,
    sessions: SessionManager<S>,
    view: V,
}

impl<T, S, V> ClientController<T, S, V>
where
    T: Transport,
    S: KeyValueStore,
    V: View,
{
    pub fn new(config: Rc<ClientConfig>, transport: T, store: S, view: V) -> Self {
        Self {
            api: ApiClient::new(config, transport),
            sessions: SessionManager::new(store),
            view,
        }
    }

    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn on_page_load(&self, route: Route) {
        match router::guard(route, &self.sessions.get_session()) {
            PageEntry::Public => {}
            PageEntry::User(session) => self.enter_user_page(&session).await,
            PageEntry::Admin(session) => self.enter_admin_page(&session).await,
            PageEntry::Redirect { alert, to } => {
                tracing::info!(?route, ?to, "page requires a session, redirecting");
                if let Some(message) = alert {
                    self.view.alert(message);
                }
                self.view.navigate(to);
            }
        }
    }

    pub async fn enter_user_page(&self, session: &ActiveSession) {
        self.view.set_display_name(session.username());
        self.load_question().await;
    }

    pub async fn enter_admin_page(&self, _session: &AdminSession) {
        self.load_users().await;
    }

    pub fn logout(&self) {
        if let Err(err) = self.sessions.clear_session() {
            tracing::warn!(error = %err, "failed to clear session");
        }
        self.view.navigate(Route::ENTRY);
    }

    /// `rejected` is the fallback when the backend gives no message,
    /// `unreachable` is shown for transport and decode failures.
    fn report(&self, err: ClientError, rejected: &str, unreachable: &str) {
        if err.is_transport() {
            tracing::error!(error = %err, "{}", unreachable);
            self.view.alert(unreachable);
        } else {
            tracing::warn!(error = %err, "request rejected");
            self.view.alert(&err.user_message(rejected));
        }
    }

    fn render_lines<D: Display>(&self, target: ListTarget, entries: Vec<D>, placeholder: &str) {
        let lines = if entries.is_empty() {
            vec![placeholder.to_string()]
        } else {
            entries.iter().map(ToString::to_string).collect()
        };
        self.view.render_list(target, lines);
    }
}
