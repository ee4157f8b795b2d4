use serde::Serialize;

use crate::cli::CheckArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;
use crate::profile::{self, Profile, ProfileDescriptor, Value};

#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    pub tag: String,
    pub detail: String,
    pub usable: bool,
}

pub fn run(ctx: &AppContext, args: CheckArgs) -> AppResult<()> {
    let settings = &ctx.resolver.settings;
    let name = args.name.as_deref().unwrap_or(&settings.profile);

    let descriptor = ProfileDescriptor::from(name);
    let document = profile::load(&settings.respath, &descriptor, &settings.profile)?;
    let reports = collect_reports(&document);
    let broken = reports.iter().filter(|report| !report.usable).count();

    if ctx.output.mode() == OutputMode::Text {
        for report in &reports {
            let marker = if report.usable { "ok " } else { "bad" };
            println!("{marker} {} ({})", report.tag, report.detail);
        }
        println!(
            "{} tags, {} unusable in {}",
            reports.len(),
            broken,
            document.path.display()
        );
    } else {
        let text = format!("{} tags, {broken} unusable", reports.len());
        ctx.output.emit(&text, &reports)?;
    }

    if broken > 0 {
        return Err(AppError::Config(format!(
            "profile {name} has {broken} unusable tag(s)"
        )));
    }

    Ok(())
}

pub fn collect_reports(document: &Profile) -> Vec<TagReport> {
    let mut reports = Vec::new();
    for (key, value) in &document.root {
        walk(key.clone(), value, &mut reports);
    }
    reports
}

fn walk(tag: String, value: &Value, reports: &mut Vec<TagReport>) {
    match value {
        Value::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                walk(format!("{tag}.{key}"), child, reports);
            }
        }
        _ => reports.push(classify(tag, value)),
    }
}

fn classify(tag: String, value: &Value) -> TagReport {
    match value {
        Value::Scalar(_) => TagReport {
            tag,
            detail: "value".to_string(),
            usable: true,
        },
        Value::List(items) if !items.is_empty() => {
            if items.iter().all(|item| item.as_scalar().is_some()) {
                TagReport {
                    tag,
                    detail: format!("{} choices", items.len()),
                    usable: true,
                }
            } else {
                TagReport {
                    tag,
                    detail: "list holds non-scalar elements".to_string(),
                    usable: false,
                }
            }
        }
        Value::List(_) => TagReport {
            tag,
            detail: "empty list".to_string(),
            usable: false,
        },
        Value::Map(_) => TagReport {
            tag,
            detail: "empty mapping".to_string(),
            usable: false,
        },
        Value::Null => TagReport {
            tag,
            detail: "null".to_string(),
            usable: false,
        },
    }
}
