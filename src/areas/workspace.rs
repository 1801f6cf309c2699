//! Snapshot directories
//!
//! A workspace is a directory holding one revision of a set of files. It
//! lists the files it contains and reads their content; content that cannot
//! be read is reported as absent rather than as an error.

use anyhow::Context;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to open {}", path.display()))?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        Ok(Self::new(path.into_boxed_path()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files under the workspace, relative to its root, sorted by path
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .map(PathBuf::from)
                    .with_context(|| format!("{} escaped the workspace", entry.path().display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        files.sort();
        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        read_text(&self.path.join(file_path))
    }

    pub fn read_file_lossy(&self, file_path: &Path) -> Option<String> {
        read_text_lossy(&self.path.join(file_path))
    }
}

pub fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))
}

/// Content of `path`, or `None` when it is missing or not valid UTF-8
pub fn read_text_lossy(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(content) => Some(content),
        Err(err) => {
            log::warn!("{err:#}, treating it as empty");
            None
        }
    }
}

/// Relative path rendered with `/` separators on every platform
pub fn display_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
