use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency_symbol: String,
    pub log_filter: String,
    pub seed_demo: bool,
    pub id_start: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "£".into(),
            log_filter: "info".into(),
            seed_demo: true,
            id_start: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    currency_symbol: Option<String>,
    log_filter: Option<String>,
    seed_demo: Option<bool>,
    id_start: Option<u64>,
}

/// Defaults, then the TOML file at `path` if it exists, then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.currency_symbol {
        settings.currency_symbol = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.seed_demo {
        settings.seed_demo = v;
    }
    if let Some(v) = file_cfg.id_start {
        settings.id_start = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("MENU_CURRENCY_SYMBOL") {
        settings.currency_symbol = v;
    }
    if let Some(v) = lookup("APP__CURRENCY_SYMBOL") {
        settings.currency_symbol = v;
    }

    if let Some(v) = lookup("MENU_LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("APP__SEED_DEMO") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.seed_demo = parsed;
        }
    }

    if let Some(v) = lookup("APP__ID_START") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.id_start = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
