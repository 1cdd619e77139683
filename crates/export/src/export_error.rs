use std::path::PathBuf;

use rendering::RasterError;
use thiserror::Error;

/// Errors that can occur while exporting a chart image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("chart rendering failed: {0}")]
    Raster(#[from] RasterError),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
