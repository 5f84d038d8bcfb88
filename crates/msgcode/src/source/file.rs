use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;
use crate::source::{Catalog, MessageSource, parse_catalog};

/// A JSON catalog read from disk each time it is loaded.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LoadError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let catalog = parse_catalog(&self.name(), &content)?;
        debug!(path = %self.path.display(), entries = catalog.len(), "loaded message file");
        Ok(catalog)
    }
}
