//! Elmer errors.

use arcstr::ArcStr;
use thiserror::Error as ThisError;

/// The result type returned by Elmer library functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible Elmer errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// No solution schema is registered for the given tool tag.
    #[error("no Elmer solution found for tool `{0}`")]
    UnknownTool(ArcStr),
    /// A parameter name not declared by the selected schema.
    #[error("unknown parameter `{field}` for tool `{tool}`")]
    UnknownField {
        /// The tool tag whose schema was selected.
        tool: ArcStr,
        /// The rejected parameter name.
        field: String,
    },
    /// Solution parameters failed schema validation.
    #[error("invalid solution parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}
