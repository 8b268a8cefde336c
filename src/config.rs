//! Application configuration
//!
//! Everything comes from the environment: the backend base URL plus the
//! booking window the date/time selector offers. Salon business rules
//! (conflicts, staff schedules) live server-side and are not configured here.

use crate::error::{AppError, AppResult};
use crate::picker::SlotWindow;
use log::info;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Runtime configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the salon REST backend.
    pub api_base_url: String,
    /// Daily window and minute granularity offered by the appointment picker.
    pub slot_window: SlotWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            slot_window: SlotWindow::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// * `SALONBOOK_API_URL` - backend base URL
    /// * `SALONBOOK_OPEN_HOUR` / `SALONBOOK_CLOSE_HOUR` - booking window `[open, close)`
    /// * `SALONBOOK_MINUTE_STEP` - slot granularity in minutes
    pub fn from_env() -> AppResult<Self> {
        let api_base_url =
            std::env::var("SALONBOOK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let defaults = SlotWindow::default();
        let start_hour = read_env_u32("SALONBOOK_OPEN_HOUR", defaults.start_hour)?;
        let end_hour = read_env_u32("SALONBOOK_CLOSE_HOUR", defaults.end_hour)?;
        let minute_step = read_env_u32("SALONBOOK_MINUTE_STEP", defaults.minute_step)?;

        let slot_window = SlotWindow::new(start_hour, end_hour, minute_step)
            .map_err(AppError::config)?;

        let config = Self {
            api_base_url,
            slot_window,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the resolved configuration.
    pub fn validate(&self) -> AppResult<()> {
        let parsed = url::Url::parse(&self.api_base_url)
            .map_err(|e| AppError::config(format!("Invalid API base URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::config(format!(
                "API base URL must be http(s), got '{}'",
                parsed.scheme()
            )));
        }
        info!(
            "Configuration OK: api={}, window=[{}, {}), step={}m",
            self.api_base_url,
            self.slot_window.start_hour,
            self.slot_window.end_hour,
            self.slot_window.minute_step
        );
        Ok(())
    }
}

fn read_env_u32(key: &str, default: u32) -> AppResult<u32> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|_| AppError::config(format!("{} must be a number, got '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_config_validates() {
        std::env::remove_var("SALONBOOK_API_URL");
        std::env::remove_var("SALONBOOK_OPEN_HOUR");
        std::env::remove_var("SALONBOOK_CLOSE_HOUR");
        std::env::remove_var("SALONBOOK_MINUTE_STEP");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_bad_url_scheme_rejected() {
        let config = AppConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_window_from_env() {
        std::env::set_var("SALONBOOK_OPEN_HOUR", "9");
        std::env::set_var("SALONBOOK_CLOSE_HOUR", "18");
        std::env::set_var("SALONBOOK_MINUTE_STEP", "15");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.slot_window.start_hour, 9);
        assert_eq!(config.slot_window.end_hour, 18);
        assert_eq!(config.slot_window.minute_step, 15);
        std::env::remove_var("SALONBOOK_OPEN_HOUR");
        std::env::remove_var("SALONBOOK_CLOSE_HOUR");
        std::env::remove_var("SALONBOOK_MINUTE_STEP");
    }

    #[test]
    #[serial]
    fn test_garbage_hour_is_config_error() {
        std::env::set_var("SALONBOOK_OPEN_HOUR", "noon");
        let result = AppConfig::from_env();
        std::env::remove_var("SALONBOOK_OPEN_HOUR");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
