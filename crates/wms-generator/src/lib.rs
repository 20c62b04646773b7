//! VISS WMS output generator library.
//!
//! Output-format plugin logic for a geoprocessing service: turns a raster
//! result into a stored resource and drives a VISS server to produce a
//! JSON time series mapping timestamps to WMS GetMap URLs.
//!
//! The host framework supplies the raster payload and the result store;
//! both are modeled as narrow seams ([`RasterPayload`],
//! [`ComplexValueStore`]). The VISS conversation itself lives in the
//! `viss-client` crate.

pub mod config;
pub mod error;
mod generator;
mod payload;
mod storage;

// Re-exports
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::VissWmsGenerator;
pub use payload::RasterPayload;
pub use storage::ComplexValueStore;
