//! Output sink seam.
//!
//! The emitter only ever needs three primitives: replace the output root,
//! create a module subdirectory, write a file. [`DirectorySink`] backs them
//! with the real filesystem; [`MemorySink`] captures everything in memory
//! for tests.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::GenerateError;

/// Destination for generated files.
pub trait OutputSink {
    /// Delete the output root if present, then (re)create it empty. A full
    /// replace: anything previously in the output tree is destroyed.
    fn replace_root(&mut self) -> Result<(), GenerateError>;

    /// Create a module subdirectory under the root if absent.
    fn create_module_dir(&mut self, module: &str) -> Result<(), GenerateError>;

    /// Write one file, given its path relative to the root.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), GenerateError>;
}

/// Filesystem-backed sink rooted at an output directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// A sink writing under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root this sink writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirectorySink {
    fn replace_root(&mut self) -> Result<(), GenerateError> {
        if self.root.exists() {
            debug!(root = %self.root.display(), "Removing existing output directory.");
            fs::remove_dir_all(&self.root).map_err(|err| GenerateError::io(&self.root, err))?;
        }
        fs::create_dir_all(&self.root).map_err(|err| GenerateError::io(&self.root, err))
    }

    fn create_module_dir(&mut self, module: &str) -> Result<(), GenerateError> {
        let dir = self.root.join(module);
        if !dir.exists() {
            fs::create_dir(&dir).map_err(|err| GenerateError::io(&dir, err))?;
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), GenerateError> {
        let full = self.root.join(path);
        fs::write(&full, contents).map_err(|err| GenerateError::io(&full, err))
    }
}

/// In-memory sink capturing written files for assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Relative path -> contents, in write order.
    pub files: IndexMap<PathBuf, String>,
    /// Module directories created, in creation order.
    pub dirs: IndexSet<String>,
    /// How many times the root was replaced.
    pub replacements: usize,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a written file, if any.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn replace_root(&mut self) -> Result<(), GenerateError> {
        self.files.clear();
        self.dirs.clear();
        self.replacements += 1;
        Ok(())
    }

    fn create_module_dir(&mut self, module: &str) -> Result<(), GenerateError> {
        self.dirs.insert(module.to_string());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), GenerateError> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
