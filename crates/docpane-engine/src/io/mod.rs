use relative_path::{Component, RelativePath};
use std::future::Future;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
    #[error("Invalid document name: {0}")]
    InvalidName(String),
    #[error("Content source unavailable: {0}")]
    Unavailable(String),
}

/// Where documentation text comes from.
///
/// Both calls may suspend; callers treat every error as a retrieval failure.
pub trait ContentSource: Send + Sync {
    /// File names available in the source, not filtered by extension.
    fn list_files(&self) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;

    fn fetch_text(&self, filename: &str)
    -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// A local folder of markdown files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `filename` under the root, refusing names that climb out of it.
    fn resolve(&self, filename: &str) -> Result<PathBuf, SourceError> {
        let relative = RelativePath::new(filename);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir));
        if filename.is_empty() || escapes {
            return Err(SourceError::InvalidName(filename.to_string()));
        }
        Ok(relative.to_path(&self.root))
    }
}

impl ContentSource for DirectorySource {
    /// Top-level regular files, sorted by name.
    async fn list_files(&self) -> Result<Vec<String>, SourceError> {
        validate_docs_dir(&self.root)?;

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut files = vec![];
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(name) => log::debug!("skipping non UTF-8 file name {name:?}"),
            }
        }
        files.sort();
        Ok(files)
    }

    async fn fetch_text(&self, filename: &str) -> Result<String, SourceError> {
        let path = self.resolve(filename)?;
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(filename.to_string())
            } else {
                SourceError::Io(e)
            }
        })
    }
}

pub fn validate_docs_dir(path: &Path) -> Result<(), SourceError> {
    if !path.exists() || !path.is_dir() {
        return Err(SourceError::InvalidDocsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
