pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{DEFAULT_PROFILE, Settings, resolve_profile_name};

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.config_file())
}
