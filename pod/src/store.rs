//! Pod storage seams.
//!
//! A pod is an opaque document store addressed by URL; the wire protocol
//! is the collaborator's concern. [`PodStore`] is the seam, with two
//! implementations: an in-memory store for tests and demos, and a
//! file-backed store that keeps each document as an N-Triples file.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use solid_graph::{parse_ntriples, to_ntriples, Dataset, ParseError};

/// Failure to read or write pod documents, or to know where to look.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No session is established, so there is no WebID document to read.
    #[error("not logged in")]
    NotLoggedIn,
    /// The application has no pod URL configured.
    #[error("no pod URL configured")]
    NoPodUrl,
    /// The store has no document at the given URL.
    #[error("no document at {0}")]
    NotFound(String),
    /// The underlying storage failed.
    #[error("storage failure for {url}")]
    Io {
        /// The document URL being accessed.
        url: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The stored document is not valid N-Triples.
    #[error("malformed document at {url}")]
    Malformed {
        /// The document URL being accessed.
        url: String,
        /// The parse failure.
        #[source]
        source: ParseError,
    },
}

/// Opaque pod storage collaborator.
pub trait PodStore {
    /// Fetches the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no document exists at `url`,
    /// or another [`StoreError`] if the document cannot be read.
    fn fetch(&self, url: &str) -> Result<Dataset, StoreError>;

    /// Saves `dataset` as the document at `url`, replacing any previous
    /// content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the document cannot be written.
    fn save(&self, url: &str, dataset: &Dataset) -> Result<(), StoreError>;
}

/// In-memory pod store.
#[derive(Debug, Default)]
pub struct MemoryPod {
    documents: Mutex<HashMap<String, Dataset>>,
}

impl MemoryPod {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a document, for test setup.
    pub fn insert(&self, url: impl Into<String>, dataset: Dataset) {
        self.lock().insert(url.into(), dataset);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Dataset>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PodStore for MemoryPod {
    fn fetch(&self, url: &str) -> Result<Dataset, StoreError> {
        self.lock()
            .get(url)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(url.to_owned()))
    }

    fn save(&self, url: &str, dataset: &Dataset) -> Result<(), StoreError> {
        self.lock().insert(url.to_owned(), dataset.clone());
        Ok(())
    }
}

/// Pod store keeping one N-Triples file per document under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FilePod {
    root: PathBuf,
}

impl FilePod {
    /// Creates a store rooted at `root`. The directory is created on the
    /// first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a document URL to its on-disk path. URLs are flattened to a
    /// single file name; the scheme separator and path characters become
    /// underscores.
    #[must_use]
    pub fn document_path(&self, url: &str) -> PathBuf {
        let name: String = url
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.nt"))
    }
}

impl PodStore for FilePod {
    fn fetch(&self, url: &str) -> Result<Dataset, StoreError> {
        let path = self.document_path(url);
        if !path.exists() {
            return Err(StoreError::NotFound(url.to_owned()));
        }
        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            url: url.to_owned(),
            source,
        })?;
        parse_ntriples(&content).map_err(|source| StoreError::Malformed {
            url: url.to_owned(),
            source,
        })
    }

    fn save(&self, url: &str, dataset: &Dataset) -> Result<(), StoreError> {
        let io = |source| StoreError::Io { url: url.to_owned(), source };
        std::fs::create_dir_all(&self.root).map_err(io)?;
        std::fs::write(self.document_path(url), to_ntriples(dataset)).map_err(io)
    }
}
