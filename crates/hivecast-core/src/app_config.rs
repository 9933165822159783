use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, loaded once at startup from environment
/// variables. Provider credentials are individually optional: a missing
/// platform token disables that publisher, and a missing LLM key degrades
/// every run to fallback-template content.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub themes_path: PathBuf,
    pub destination_link: String,
    pub schedule_cron: String,
    pub llm_model: String,
    pub request_timeout_secs: u64,
    pub deepseek_api_key: Option<String>,
    pub pinterest_access_token: Option<String>,
    pub twitter_access_token: Option<String>,
    pub threads_access_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("themes_path", &self.themes_path)
            .field("destination_link", &self.destination_link)
            .field("schedule_cron", &self.schedule_cron)
            .field("llm_model", &self.llm_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "deepseek_api_key",
                &self.deepseek_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "pinterest_access_token",
                &self.pinterest_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "twitter_access_token",
                &self.twitter_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "threads_access_token",
                &self.threads_access_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
