use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::profile::ProfileDescriptor;
use crate::render::FormatArgs;

#[derive(Debug, Serialize)]
struct ResolveView {
    tag: String,
    profile: String,
    text: String,
}

pub fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let mut format_args = FormatArgs::new();
    for value in &args.values {
        format_args = format_args.arg(value.as_str());
    }
    for pair in &args.named {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            AppError::InvalidInput(format!("expected KEY=VALUE for --arg, got `{pair}`"))
        })?;
        format_args = format_args.named(key, value);
    }

    let descriptor = args.profile_file.clone().map(ProfileDescriptor::from);
    let profile_label = match &descriptor {
        Some(ProfileDescriptor::Path(path)) => path.display().to_string(),
        _ => ctx.resolver.settings.profile.clone(),
    };

    let text = ctx
        .resolver
        .render(&args.tag, &format_args, descriptor)?
        .into_text();

    let view = ResolveView {
        tag: args.tag,
        profile: profile_label,
        text: text.clone(),
    };
    ctx.output.emit(&text, &view)
}
