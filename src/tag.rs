use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::profile::{Profile, Scalar, Value};

/// Walks `tag` (dot-delimited segments) through the profile's nested
/// mappings and stringifies the terminal value. A terminal list of scalars
/// yields one element chosen uniformly at random on every call.
pub fn resolve(tag: &str, profile: &Profile) -> AppResult<String> {
    let mut current: Option<&Value> = None;

    for segment in tag.split('.') {
        let map = match current {
            None => &profile.root,
            Some(Value::Map(map)) => map,
            Some(_) => return Err(AppError::TagNotFound(tag.to_string())),
        };

        current = Some(
            map.get(segment)
                .ok_or_else(|| AppError::TagNotFound(tag.to_string()))?,
        );
    }

    match current {
        Some(Value::Scalar(scalar)) => Ok(scalar.to_string()),
        Some(Value::List(items)) => pick_scalar(tag, items),
        _ => Err(AppError::UnsupportedTagType(tag.to_string())),
    }
}

fn pick_scalar(tag: &str, items: &[Value]) -> AppResult<String> {
    let scalars: Vec<&Scalar> = items.iter().filter_map(Value::as_scalar).collect();

    // An empty list has nothing to select; a list holding any non-scalar is
    // a profile contract violation.
    if scalars.is_empty() || scalars.len() != items.len() {
        return Err(AppError::UnsupportedTagType(tag.to_string()));
    }

    let choice = scalars[rand::thread_rng().gen_range(0..scalars.len())];
    Ok(choice.to_string())
}
