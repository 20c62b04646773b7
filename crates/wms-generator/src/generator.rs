//! VISS WMS output generation.

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;
use viss_client::{HttpTransport, VissTransport, VissUploader};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::payload::RasterPayload;
use crate::storage::ComplexValueStore;

/// Content-description tag for stored results.
const STORAGE_TYPE_TAG: &str = "ComplexDataResponse";

/// MIME type of the stored complex value.
const STORAGE_MIME_TYPE: &str = "application/x-uncertweb-viss-wms";

/// Suffix appended to freshly minted storage identifiers.
const IDENTIFIER_SUFFIX: &str = "-viss-result";

/// Output generator that stores a raster result and registers it with a
/// VISS server, producing a JSON time series of WMS GetMap URLs.
pub struct VissWmsGenerator<S, T> {
    store: S,
    uploader: VissUploader<T>,
}

impl<S: ComplexValueStore> VissWmsGenerator<S, HttpTransport> {
    /// Create a generator talking to the VISS server over HTTP.
    pub fn new(config: GeneratorConfig, store: S) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, store, transport))
    }
}

impl<S: ComplexValueStore, T: VissTransport> VissWmsGenerator<S, T> {
    /// Create a generator with an explicit transport.
    pub fn with_transport(config: GeneratorConfig, store: S, transport: T) -> Self {
        Self {
            store,
            uploader: VissUploader::new(config.viss_server_host, transport),
        }
    }

    /// Produce the plugin output stream for `payload`.
    ///
    /// Reads the raster bytes, persists them under a fresh identifier,
    /// registers the stored resource with the VISS server and returns the
    /// resulting time-series document as UTF-8 bytes.
    pub async fn generate(&self, payload: &RasterPayload) -> Result<Bytes> {
        let document = self.store_layer(payload).await?;
        Ok(Bytes::from(document.into_bytes()))
    }

    /// Store the raster and run the VISS upload, returning the JSON document.
    pub async fn store_layer(&self, payload: &RasterPayload) -> Result<String> {
        let data = tokio::fs::read(payload.file_path()).await?;

        let identifier = format!("{}{}", Uuid::new_v4(), IDENTIFIER_SUFFIX);

        let resource_url = self
            .store
            .store(
                &identifier,
                Bytes::from(data),
                STORAGE_TYPE_TAG,
                STORAGE_MIME_TYPE,
            )
            .await
            .map_err(|e| GeneratorError::Storage(e.to_string()))?;

        info!(resource_url = %resource_url, "stored raster result");

        Ok(self.uploader.create_viss_resource(&resource_url).await?)
    }
}
