use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("HIVECAST_ENV", "development"));

    let bind_addr = parse_addr("HIVECAST_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("HIVECAST_LOG_LEVEL", "info");
    let themes_path = PathBuf::from(or_default("HIVECAST_THEMES_PATH", "./config/themes.yaml"));
    let destination_link = or_default("HIVECAST_DESTINATION_LINK", "https://amzn.to/4sklUiK");
    let schedule_cron = or_default("HIVECAST_SCHEDULE", "0 0 */3 * * *");
    let llm_model = or_default("HIVECAST_LLM_MODEL", "deepseek-chat");
    let request_timeout_secs = parse_u64("HIVECAST_REQUEST_TIMEOUT_SECS", "30")?;

    let deepseek_api_key = lookup("DEEPSEEK_API_KEY").ok();
    let pinterest_access_token = lookup("PINTEREST_ACCESS_TOKEN").ok();
    let twitter_access_token = lookup("TWITTER_ACCESS_TOKEN").ok();
    let threads_access_token = lookup("THREADS_ACCESS_TOKEN").ok();

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        themes_path,
        destination_link,
        schedule_cron,
        llm_model,
        request_timeout_secs,
        deepseek_api_key,
        pinterest_access_token,
        twitter_access_token,
        threads_access_token,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
