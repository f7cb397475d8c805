use thiserror::Error;

/// Failures that may cross the capability boundary.
///
/// Every variant carries a short, user-facing message. Backend error text
/// never ends up in here; it is logged where the failure is caught.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotebookError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Invalid URI scheme: {0}")]
    InvalidUri(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
    #[error("Note {0} already exists.")]
    NoteAlreadyExists(String),
    #[error("Note {0} does not exist.")]
    NoteDoesNotExist(String),
    #[error("{0}")]
    NoteOperationFailure(String),
    #[error("Could not load resources")]
    ResourceListFailure,
    #[error("Could not get resource {0}.")]
    ResourceReadFailure(String),
}

impl NotebookError {
    /// Domain-state conflicts are authoritative and propagate unchanged.
    pub fn is_domain_conflict(&self) -> bool {
        matches!(self, Self::NoteAlreadyExists(_) | Self::NoteDoesNotExist(_))
    }

    pub(crate) fn create_failed(name: &str) -> Self {
        Self::NoteOperationFailure(format!(
            "Issue occurred creating note {}. Please try again.",
            name
        ))
    }

    pub(crate) fn remove_failed(name: &str) -> Self {
        Self::NoteOperationFailure(format!(
            "Issue occurred removing note {}. Please try again.",
            name
        ))
    }
}

/// Backend failures raised by a note store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}
