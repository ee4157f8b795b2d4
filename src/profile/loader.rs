use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::value::Value;
use super::{Profile, ProfileDescriptor};
use crate::error::{AppError, AppResult};

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Locates and parses the profile file named by `descriptor`.
///
/// A descriptor that denotes an existing file with a recognized extension is
/// loaded directly; a relative file path is probed as given first, then
/// joined onto `root`. Otherwise the descriptor selects a search directory
/// (itself if it is a directory, else `root`) and a search name (itself if
/// it is a bare name, else `default_name`), and the directory is scanned for
/// files whose stem equals the search name. When several extensions match
/// the same stem, the lexicographically first file name wins.
pub fn load(root: &Path, descriptor: &ProfileDescriptor, default_name: &str) -> AppResult<Profile> {
    let file = locate(root, descriptor, default_name)?;
    parse(&file)
}

fn locate(root: &Path, descriptor: &ProfileDescriptor, default_name: &str) -> AppResult<PathBuf> {
    if let Some(file) = direct_file(root, descriptor.as_path()) {
        return Ok(file);
    }

    let (dir, name) = match descriptor {
        ProfileDescriptor::Name(name) => (root.to_path_buf(), name.as_str()),
        ProfileDescriptor::Path(path) if path.is_dir() => (path.clone(), default_name),
        ProfileDescriptor::Path(path) => {
            return Err(AppError::ProfileNotFound(path.display().to_string()));
        }
    };

    search(&dir, name)
}

fn direct_file(root: &Path, path: &Path) -> Option<PathBuf> {
    if !has_accepted_extension(path) {
        return None;
    }

    if path.is_file() {
        return Some(path.to_path_buf());
    }

    if path.is_relative() {
        let joined = root.join(path);
        if joined.is_file() {
            return Some(joined);
        }
    }

    None
}

fn search(dir: &Path, name: &str) -> AppResult<PathBuf> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let stem_matches = path.file_stem().is_some_and(|stem| stem == name);
        if path.is_file() && stem_matches && has_accepted_extension(&path) {
            candidates.push(path);
        }
    }

    if candidates.is_empty() {
        return Err(AppError::ProfileNotFound(name.to_string()));
    }

    candidates.sort();
    let selected = candidates.swap_remove(0);
    debug!(file = %selected.display(), "selected profile file");
    Ok(selected)
}

pub(crate) fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext))
}

fn parse(path: &Path) -> AppResult<Profile> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => parse_error(path, "file content is not valid utf-8"),
        _ => AppError::Io(err),
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let parsed: Value = if is_json {
        serde_json::from_str(&raw).map_err(|err| parse_error(path, err))?
    } else {
        serde_yaml::from_str(&raw).map_err(|err| parse_error(path, err))?
    };

    match parsed {
        Value::Map(root) => Ok(Profile {
            path: path.to_path_buf(),
            root,
        }),
        _ => Err(parse_error(path, "document root is not a mapping")),
    }
}

fn parse_error(path: &Path, reason: impl fmt::Display) -> AppError {
    AppError::ProfileParse {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
