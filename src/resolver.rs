use tracing::warn;

use crate::config::Settings;
use crate::error::AppResult;
use crate::profile::{self, ProfileDescriptor};
use crate::render::{self, FormatArgs, MessageAdapter, Rendered};
use crate::tag;

/// Ties the loader and the tag walk together for one call at a time.
///
/// `settings` is public and re-read on every call, so an embedding
/// application (or a test harness) may change the resource root or default
/// profile between calls without rebuilding the resolver.
pub struct Resolver {
    pub settings: Settings,
    adapter: Option<Box<dyn MessageAdapter>>,
}

impl Resolver {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            adapter: None,
        }
    }

    pub fn with_adapter(settings: Settings, adapter: Box<dyn MessageAdapter>) -> Self {
        Self {
            settings,
            adapter: Some(adapter),
        }
    }

    /// Resolves `tag` against the effective profile (the `profile` override
    /// when given, else the configured default) and applies placeholder
    /// substitution. With an adapter the result is a wrapped host message;
    /// without one it is a plain string.
    pub fn render(
        &self,
        tag: &str,
        args: &FormatArgs,
        profile: Option<ProfileDescriptor>,
    ) -> AppResult<Rendered> {
        let descriptor =
            profile.unwrap_or_else(|| ProfileDescriptor::Name(self.settings.profile.clone()));
        let document = profile::load(&self.settings.respath, &descriptor, &self.settings.profile)?;
        let raw = tag::resolve(tag, &document)?;

        match &self.adapter {
            Some(adapter) => Ok(Rendered::Message(adapter.template(&raw).format(args)?)),
            None => {
                warn!(%tag, "no message adapter configured; returning a plain string");
                Ok(Rendered::Text(render::format_str(&raw, args)?))
            }
        }
    }

    #[deprecated(since = "0.1.0", note = "use `render` instead")]
    pub fn parse(
        &self,
        tag: &str,
        args: &FormatArgs,
        profile: Option<ProfileDescriptor>,
    ) -> AppResult<Rendered> {
        warn!("Resolver::parse is deprecated; use Resolver::render");
        self.render(tag, args, profile)
    }
}
