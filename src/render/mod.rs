pub mod format;

use std::fmt;

use indexmap::IndexMap;

pub use format::format_str;

use crate::error::AppResult;
use crate::profile::Scalar;

/// Substitution arguments for a resolved template: positional values in
/// order plus named values by key. Mixed use is permitted.
#[derive(Debug, Clone, Default)]
pub struct FormatArgs {
    positional: Vec<Scalar>,
    named: IndexMap<String, Scalar>,
}

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Scalar>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn named(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Scalar> {
        self.positional.get(index)
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.named.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// A host-supplied message object. The core never builds one itself; it only
/// passes resolved text through the injected adapter.
pub trait MessageLike: fmt::Debug + fmt::Display {}

pub trait MessageTemplate {
    fn format(&self, args: &FormatArgs) -> AppResult<Box<dyn MessageLike>>;
}

/// Capability injected at resolver construction. `template` receives the raw
/// resolved string and returns a handle whose `format` applies the
/// substitution arguments with the host's own template engine.
pub trait MessageAdapter {
    fn template(&self, raw: &str) -> Box<dyn MessageTemplate>;
}

/// Output of one resolution: a wrapped host message when an adapter was
/// configured, a plain substituted string otherwise.
#[derive(Debug)]
pub enum Rendered {
    Message(Box<dyn MessageLike>),
    Text(String),
}

impl Rendered {
    pub fn into_text(self) -> String {
        match self {
            Rendered::Message(message) => message.to_string(),
            Rendered::Text(text) => text,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Message(message) => fmt::Display::fmt(message, f),
            Rendered::Text(text) => f.write_str(text),
        }
    }
}
