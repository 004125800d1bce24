use dioxus::logger::tracing::warn;

use super::{error::AppError, visit_gate::REPROMPT_WINDOW_MS};

pub const DEFAULT_SHOW_DELAY_MS: u64 = 1_200;

/// Alert tuning baked in at compile time (see build.rs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
  pub reprompt_window_ms: u64,
  pub show_delay_ms: u64,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self { reprompt_window_ms: REPROMPT_WINDOW_MS, show_delay_ms: DEFAULT_SHOW_DELAY_MS }
  }
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_values(option_env!("ALERT_REPROMPT_MS"), option_env!("ALERT_SHOW_DELAY_MS"))
  }

  fn from_values(reprompt: Option<&str>, delay: Option<&str>) -> Self {
    let defaults = Self::default();
    Self {
      reprompt_window_ms: parse_or_default("ALERT_REPROMPT_MS", reprompt, defaults.reprompt_window_ms),
      show_delay_ms: parse_or_default("ALERT_SHOW_DELAY_MS", delay, defaults.show_delay_ms),
    }
  }
}

fn parse_or_default(key: &str, raw: Option<&str>, default: u64) -> u64 {
  match parse_millis(key, raw) {
    Ok(Some(ms)) => ms,
    Ok(None) => default,
    Err(e) => {
      warn!("{}, falling back to {}ms", e, default);
      default
    }
  }
}

pub fn parse_millis(key: &str, raw: Option<&str>) -> Result<Option<u64>, AppError> {
  let Some(raw) = raw else {
    return Ok(None);
  };
  raw.trim()
    .parse::<u64>()
    .map(Some)
    .map_err(|e| AppError::ConfigError(format!("{}={:?}: {}", key, raw, e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unset_keys_use_defaults() {
    let config = AppConfig::from_values(None, None);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.reprompt_window_ms, 300_000);
  }

  #[test]
  fn values_are_trimmed_and_parsed() {
    let config = AppConfig::from_values(Some(" 60000 "), Some("250"));
    assert_eq!(config.reprompt_window_ms, 60_000);
    assert_eq!(config.show_delay_ms, 250);
  }

  #[test]
  fn malformed_value_falls_back() {
    let config = AppConfig::from_values(Some("five minutes"), Some("-1"));
    assert_eq!(config, AppConfig::default());
  }

  #[test]
  fn parse_error_names_the_key() {
    let err = parse_millis("ALERT_SHOW_DELAY_MS", Some("soon")).unwrap_err();
    assert!(matches!(err, AppError::ConfigError(ref msg) if msg.starts_with("ALERT_SHOW_DELAY_MS=")));
  }
}
