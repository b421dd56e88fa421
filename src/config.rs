use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::DotPaintResult;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Pacing for synthesized device actions. The defaults suit a local editor;
/// remote desktops or slow canvases may need larger delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Pause after each synthesized click, in milliseconds.
    #[serde(default = "default_click_delay_ms")]
    pub click_delay_ms: u64,
    /// Pause between pointer steps while tracing the region outline.
    #[serde(default = "default_highlight_step_ms")]
    pub highlight_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: default_click_delay_ms(),
            highlight_step_ms: default_highlight_step_ms(),
        }
    }
}

impl TimingConfig {
    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(self.click_delay_ms)
    }

    pub fn highlight_step(&self) -> Duration {
        Duration::from_millis(self.highlight_step_ms)
    }
}

fn default_click_delay_ms() -> u64 {
    5
}

fn default_highlight_step_ms() -> u64 {
    10
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join("config.toml");
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Some(candidate);
            }
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join("config.toml");
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in working directory");
            return Some(candidate);
        }
    }

    None
}

pub fn load_config() -> DotPaintResult<AppConfig> {
    let Some(path) = resolve_config_path() else {
        tracing::debug!("no config.toml found, using defaults");
        return Ok(AppConfig::default());
    };
    let content = std::fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Startup never fails on configuration problems; a broken config.toml is
/// reported and the defaults are used instead.
pub fn load_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.timing.click_delay_ms, 5);
        assert_eq!(config.timing.highlight_step_ms, 10);
    }

    #[test]
    fn partial_toml_falls_back_per_field() {
        let config: AppConfig = toml::from_str("[timing]\nclick_delay_ms = 25\n").unwrap();
        assert_eq!(config.timing.click_delay_ms, 25);
        assert_eq!(config.timing.highlight_step_ms, 10);
        assert_eq!(config.timing.click_delay(), Duration::from_millis(25));
    }
}
