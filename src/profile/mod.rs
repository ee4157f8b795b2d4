pub mod loader;
pub mod value;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

pub use loader::{ACCEPTED_EXTENSIONS, load};
pub use value::{Scalar, Value};

/// How a caller points at a profile: a bare name searched under the resource
/// root, or a filesystem path to a profile file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDescriptor {
    Name(String),
    Path(PathBuf),
}

impl ProfileDescriptor {
    pub(crate) fn as_path(&self) -> &Path {
        match self {
            ProfileDescriptor::Name(name) => Path::new(name),
            ProfileDescriptor::Path(path) => path,
        }
    }
}

impl From<&str> for ProfileDescriptor {
    fn from(name: &str) -> Self {
        ProfileDescriptor::Name(name.to_string())
    }
}

impl From<String> for ProfileDescriptor {
    fn from(name: String) -> Self {
        ProfileDescriptor::Name(name)
    }
}

impl From<&Path> for ProfileDescriptor {
    fn from(path: &Path) -> Self {
        ProfileDescriptor::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ProfileDescriptor {
    fn from(path: PathBuf) -> Self {
        ProfileDescriptor::Path(path)
    }
}

/// One fully parsed profile file. Built fresh on every resolution call and
/// discarded afterwards; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub path: PathBuf,
    pub root: IndexMap<String, Value>,
}
