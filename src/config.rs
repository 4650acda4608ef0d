pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub log_level: String,
}

impl ClientConfig {
    /// Build-time configuration. The browser has no process environment, so
    /// overrides are baked in when the wasm bundle is compiled.
    pub fn from_build_env() -> Self {
        Self {
            api_url: option_env!("QUIZ_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            log_level: option_env!("QUIZ_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
