use super::ClientController;
use crate::api::Transport;
use crate::error::ClientError;
use crate::router::Route;
use crate::session::KeyValueStore;
use crate::types::{Credentials, Role};
use crate::view::View;

pub const CREDENTIALS_REQUIRED: &str = "Please enter both username and password.";

fn validate_credentials<'a>(username: &'a str, password: &'a str) -> Result<Credentials<'a>, ClientError> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::Validation(CREDENTIALS_REQUIRED));
    }
    Ok(Credentials { username, password })
}

fn landing_page(role: &str) -> Route {
    match Role::of(role) {
        Role::Admin => Route::Admin,
        Role::User => Route::User,
    }
}

impl<T, S, V> ClientController<T, S, V>
where
    T: Transport,
    S: KeyValueStore,
    V: View,
{
    pub async fn login(&self, username: &str, password: &str) {
        let credentials = match validate_credentials(username, password) {
            Ok(credentials) => credentials,
            Err(err) => return self.view.alert(&err.to_string()),
        };

        match self.api.login(&credentials).await {
            Ok(reply) => {
                let role = reply.role.unwrap_or_default();
                let username = reply
                    .username
                    .unwrap_or_else(|| credentials.username.to_string());
                self.start_session(&username, &role);
            }
            Err(err) => self.report(err, "Login failed", "Server error during login."),
        }
    }

    /// The role is never sent; the backend assigns it.
    pub async fn signup(&self, username: &str, password: &str) {
        let credentials = match validate_credentials(username, password) {
            Ok(credentials) => credentials,
            Err(err) => return self.view.alert(&err.to_string()),
        };

        match self.api.signup(&credentials).await {
            Ok(reply) => {
                if let Some(message) = reply.message.as_deref() {
                    self.view.alert(message);
                }
                let role = reply.role.unwrap_or_default();
                self.start_session(credentials.username, &role);
            }
            Err(err) => self.report(err, "Signup failed", "Server error during signup."),
        }
    }

    fn start_session(&self, username: &str, role: &str) {
        if let Err(err) = self.sessions.save_session(username, role) {
            tracing::warn!(error = %err, "failed to persist session");
        }
        self.view.navigate(landing_page(role));
    }
}
