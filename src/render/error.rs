use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    // Structural setup defect: the requested container does not exist on the surface
    #[error("Rendering surface '{0}' is not available")]
    MissingSurface(String),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Output directory '{0}' does not exist")]
    OutputDirMissing(PathBuf),

    #[error("Failed to write output file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to move rendered file into place at '{0}'")]
    Persist(PathBuf, #[source] tempfile::PersistError),

    #[error("Failed to build chart data for '{container}'")]
    Frame {
        container: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to serialize map data")]
    Serialize(#[from] serde_json::Error),
}
