//! Next / previous navigation between images in the same directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PixviewError, Result};

/// Whether `path` has one of `extensions` (lowercase, no dot), ignoring case.
pub fn is_image<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|e| e.as_ref() == ext)
        })
}

/// List the images next to `path` (or inside it, if it is a directory),
/// sorted by file name.
pub fn list_images_in_same_directory<S: AsRef<str>>(
    path: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>> {
    let dir = if path.is_dir() {
        path
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            Some(_) => Path::new("."),
            None => return Err(PixviewError::InvalidPath(path.to_path_buf())),
        }
    };

    let entries = std::fs::read_dir(dir).map_err(|source| PixviewError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.metadata().is_ok_and(|m| m.is_file()))
        .map(|entry| entry.path())
        .filter(|p| is_image(p, extensions))
        .collect();
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(dir = %dir.display(), count = images.len(), "listed sibling images");
    Ok(images)
}

/// The current image and its siblings, in navigation order.
#[derive(Clone, Debug)]
pub struct ImageNavigator {
    extensions: Vec<String>,
    paths: Vec<PathBuf>,
    current: Option<PathBuf>,
}

impl ImageNavigator {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            paths: Vec::new(),
            current: None,
        }
    }

    /// Make `path` current and list its siblings. The current path is set
    /// even if listing fails, so the image can still be shown.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.current = Some(path.to_path_buf());
        self.paths.clear();
        self.paths = list_images_in_same_directory(path, self.extensions.as_slice())?;
        Ok(())
    }

    /// Re-list the directory, keeping the current path.
    pub fn refresh(&mut self) -> Result<()> {
        match self.current.clone() {
            Some(path) => self.open(&path),
            None => Ok(()),
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// 1-based position of the current image, and the total count.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index().map(|i| (i + 1, self.paths.len()))
    }

    /// Advance to the next image. `None` at the end of the list or when the
    /// current image is not in it.
    pub fn next(&mut self) -> Option<PathBuf> {
        let index = self.current_index()?;
        self.move_to(index.checked_add(1)?)
    }

    /// Step back to the previous image. `None` at the start of the list or
    /// when the current image is not in it.
    pub fn previous(&mut self) -> Option<PathBuf> {
        let index = self.current_index()?;
        self.move_to(index.checked_sub(1)?)
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.paths.iter().position(|p| p == current)
    }

    fn move_to(&mut self, index: usize) -> Option<PathBuf> {
        let path = self.paths.get(index)?.clone();
        self.current = Some(path.clone());
        Some(path)
    }
}
