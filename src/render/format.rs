use super::FormatArgs;
use crate::error::{AppError, AppResult};
use crate::profile::Scalar;

/// Plain `{}`-style placeholder substitution, used when no message adapter
/// is configured. `{}` consumes the next automatic positional argument,
/// `{2}` takes positional argument 2, `{name}` takes a named argument, and
/// `{{` / `}}` are literal braces. Unfilled placeholders are an error;
/// surplus arguments are ignored.
pub fn format_str(template: &str, args: &FormatArgs) -> AppResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut auto_index = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(AppError::Substitution(
                    "single `}` without a matching `{`".to_string(),
                ));
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => field.push(inner),
                        None => {
                            return Err(AppError::Substitution(
                                "unclosed placeholder".to_string(),
                            ));
                        }
                    }
                }

                let value = lookup(&field, args, &mut auto_index)?;
                out.push_str(&value.to_string());
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

fn lookup<'a>(field: &str, args: &'a FormatArgs, auto_index: &mut usize) -> AppResult<&'a Scalar> {
    if field.contains(':') {
        return Err(AppError::Substitution(format!(
            "format specs are not supported by the plain renderer: `{{{field}}}`"
        )));
    }

    if field.is_empty() {
        let index = *auto_index;
        *auto_index += 1;
        return args
            .positional(index)
            .ok_or_else(|| AppError::Substitution(format!("missing positional argument {index}")));
    }

    if field.chars().all(|ch| ch.is_ascii_digit()) {
        let index: usize = field
            .parse()
            .map_err(|_| AppError::Substitution(format!("invalid positional index `{field}`")))?;
        return args
            .positional(index)
            .ok_or_else(|| AppError::Substitution(format!("missing positional argument {index}")));
    }

    args.get(field)
        .ok_or_else(|| AppError::Substitution(format!("missing named argument `{field}`")))
}
