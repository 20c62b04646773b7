//! Raster payload representations accepted by the generator.

use std::path::{Path, PathBuf};

/// The closed set of raster inputs the generator accepts.
///
/// Every representation is backed by a file holding the raw raster
/// bytes; dispatch is an exhaustive match, not open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterPayload {
    /// Raw grid coverage already materialized to a file.
    RawGrid { path: PathBuf },
    /// GeoTIFF file.
    GeoTiff { path: PathBuf },
    /// Generic GIS file wrapper.
    GenericFile { path: PathBuf },
}

impl RasterPayload {
    /// Filesystem path backing the raw raster bytes.
    pub fn file_path(&self) -> &Path {
        match self {
            RasterPayload::RawGrid { path }
            | RasterPayload::GeoTiff { path }
            | RasterPayload::GenericFile { path } => path,
        }
    }
}
