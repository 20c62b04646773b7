//! Client for the VISS visualization service.
//!
//! Drives the VISS HTTP/JSON API to register a stored raster resource,
//! read the dataset's temporal extent, create one map visualizer per time
//! instant, and assemble the resulting WMS GetMap URLs into a JSON
//! time-series document.
//!
//! The conversation is strictly sequential: register the dataset, fetch
//! its temporal extent, then one visualizer request per timestamp. A
//! failing visualizer only drops its own timestamp from the result; setup
//! failures abort the whole upload.

pub mod error;
pub mod extent;
pub mod time;
pub mod transport;
pub mod wms;
mod document;
mod json;
mod uploader;

// Re-exports
pub use document::TimeSeries;
pub use error::{VissError, VissResult};
pub use extent::TemporalExtent;
pub use transport::{HttpTransport, VissTransport};
pub use uploader::VissUploader;
