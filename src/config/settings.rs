use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_PROFILE: &str = "default";

/// The two configuration fields the resolver reads: where profile files
/// live and which profile name to fall back to. Sourced from the config
/// file when present, overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_respath")]
    pub respath: PathBuf,
    #[serde(default = "default_profile")]
    pub profile: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            respath: default_respath(),
            profile: default_profile(),
        }
    }
}

fn default_respath() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

pub fn resolve_profile_name(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return DEFAULT_PROFILE.to_string();
    }

    trimmed.to_string()
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}
