//! Error types

use std::path::PathBuf;

use crate::LookupKind;

/// Query failure.
///
/// Zero matches is never an error; only a uniqueness-assuming query that
/// finds more than one element fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("expected at most one element with {kind} \"{key}\", found {count}")]
    TooManyElementsFound {
        kind: LookupKind,
        key: String,
        count: usize,
    },
}

/// View rendering failure
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("view not found: {}", path.display())]
    ViewNotFound { path: PathBuf },

    #[error("failed to read view {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model could not be serialized: {0}")]
    Model(#[from] serde_json::Error),

    #[error("view {view} references unknown model property @Model.{property}")]
    UnknownProperty { view: String, property: String },

    #[error("malformed partial in view {view}: {reason}")]
    MalformedPartial { view: String, reason: String },

    #[error("partial {name} nested deeper than {max} levels")]
    PartialDepthExceeded { name: String, max: usize },
}
