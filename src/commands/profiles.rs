use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profile::loader;

#[derive(Debug, Clone, Serialize)]
struct ProfileView {
    name: String,
    format: String,
    path: PathBuf,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let respath = &ctx.resolver.settings.respath;
    let mut views = Vec::new();

    for entry in fs::read_dir(respath)? {
        let path = entry?.path();
        if !path.is_file() || !loader::has_accepted_extension(&path) {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_string();
        views.push(ProfileView { name, format, path });
    }

    views.sort_by(|a, b| a.path.cmp(&b.path));

    if ctx.output.mode() == OutputMode::Text {
        if views.is_empty() {
            println!("0 profiles in {}", respath.display());
            return Ok(());
        }

        for (index, view) in views.iter().enumerate() {
            println!(
                "{}. {} [{}] ({})",
                index + 1,
                view.name,
                view.format,
                view.path.display()
            );
        }

        return Ok(());
    }

    let text = format!("{} profiles", views.len());
    ctx.output.emit(&text, &views)
}
