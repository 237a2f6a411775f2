//! Concurrent markdown document loading.

use std::path::{Path, PathBuf};

use doclint_parser::SourceDoc;
use tokio::task::JoinSet;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("docs path does not exist: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document read task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LoadError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Directory to lint under `path`: its `docs/api` subdirectory when one exists,
/// else `path` itself.
#[must_use]
pub fn docs_root(path: &Path) -> PathBuf {
    let nested = path.join("docs").join("api");
    if nested.is_dir() { nested } else { path.to_path_buf() }
}

/// Read every `*.md` file under `root` (recursively), sorted by path. A single
/// markdown file is accepted as well.
pub async fn load_docs(root: &Path) -> Result<Vec<SourceDoc>, LoadError> {
    let metadata = tokio::fs::metadata(root)
        .await
        .map_err(|_| LoadError::Missing(root.to_path_buf()))?;

    let paths = if metadata.is_file() {
        vec![root.to_path_buf()]
    } else {
        markdown_files(root).await?
    };

    let mut reads = JoinSet::new();
    for path in paths {
        reads.spawn(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(markdown) => Ok(SourceDoc::new(path, markdown)),
                Err(source) => Err(LoadError::io(&path, source)),
            }
        });
    }

    let mut docs = Vec::with_capacity(reads.len());
    while let Some(joined) = reads.join_next().await {
        docs.push(joined??);
    }
    docs.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(root = %root.display(), documents = docs.len(), "documents loaded");
    Ok(docs)
}

async fn markdown_files(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|source| LoadError::io(&dir, source))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| LoadError::io(&dir, source))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| LoadError::io(&path, source))?;

            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
    }

    Ok(files)
}
