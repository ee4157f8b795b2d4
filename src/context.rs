use std::path::PathBuf;

use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::output::Output;
use crate::resolver::Resolver;

pub struct AppContext {
    pub resolver: Resolver,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        respath: Option<PathBuf>,
        profile: Option<String>,
        json: bool,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let mut settings = config::load_settings(&paths)?;

        if let Some(respath) = respath {
            settings.respath = respath;
        }
        if let Some(profile) = profile {
            settings.profile = config::resolve_profile_name(&profile);
        }

        Ok(Self {
            resolver: Resolver::new(settings),
            output: Output::new(json),
        })
    }
}
