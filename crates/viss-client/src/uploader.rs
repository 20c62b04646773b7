//! Upload orchestration against the VISS API.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::document::TimeSeries;
use crate::error::{VissError, VissResult};
use crate::extent::TemporalExtent;
use crate::json;
use crate::transport::VissTransport;
use crate::wms;

/// Media type requested for the registered dataset.
const RESPONSE_MEDIA_TYPE: &str = "application/x-netcdf";

/// Visualizer kind created for every timestamp.
const VISUALIZER_PATH: &str = "/visualizers/Distribution-Normal-Mean";

/// Dataset registration request body.
#[derive(Serialize)]
struct RegisterDataset<'a> {
    url: &'a str,
    #[serde(rename = "responseMediaType")]
    response_media_type: &'a str,
}

/// Visualizer creation request body.
#[derive(Serialize)]
struct CreateVisualizer<'a> {
    time: &'a str,
}

/// Drives the VISS conversation for one stored resource.
pub struct VissUploader<T> {
    viss_server_host: String,
    transport: T,
}

impl<T: VissTransport> VissUploader<T> {
    pub fn new(viss_server_host: impl Into<String>, transport: T) -> Self {
        Self {
            viss_server_host: viss_server_host.into(),
            transport,
        }
    }

    /// Register `resource_url` with the VISS server, create one visualizer
    /// per instant of the dataset's temporal extent, and return the JSON
    /// time-series document mapping timestamps to WMS GetMap URLs.
    ///
    /// Setup failures (registration, extent retrieval) abort the call.
    /// Failures while creating a single visualizer are logged and that
    /// timestamp is omitted from the result. A failure while assembling
    /// the final document degrades to the literal `"{}"`.
    pub async fn create_viss_resource(&self, resource_url: &str) -> VissResult<String> {
        let body = serde_json::to_string(&RegisterDataset {
            url: resource_url,
            response_media_type: RESPONSE_MEDIA_TYPE,
        })?;

        let response = self
            .transport
            .post_json(&self.viss_server_host, &body)
            .await?;
        let href = extract_dataset_href(&serde_json::from_str(&response)?)?;

        info!(href = %href, "registered VISS resource");

        let dataset_info: Value = serde_json::from_str(&self.transport.get(&href).await?)?;
        let extent_node =
            dataset_info
                .get("temporalExtent")
                .ok_or_else(|| VissError::MissingField {
                    field: "temporalExtent".to_string(),
                    node: dataset_info.to_string(),
                })?;
        let extent = TemporalExtent::from_json(extent_node)?;

        let visualizer_url = format!("{}{}", href, VISUALIZER_PATH);

        let mut results = TimeSeries::new();
        for timestamp in extent.timestamps() {
            match self.create_visualizer(&visualizer_url, &timestamp).await {
                Ok(wms_url) => results.insert(timestamp, wms_url),
                Err(e) => {
                    warn!(
                        timestamp = %timestamp,
                        error = %e,
                        "could not create visualizer, skipping timestamp"
                    );
                }
            }
        }

        match results.to_json() {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(error = %e, "could not assemble result document");
                Ok("{}".to_string())
            }
        }
    }

    /// Create one visualizer and build its WMS GetMap URL.
    async fn create_visualizer(&self, visualizer_url: &str, timestamp: &str) -> VissResult<String> {
        let body = serde_json::to_string(&CreateVisualizer { time: timestamp })?;
        let response = self.transport.post_json(visualizer_url, &body).await?;
        extract_wms_url(&serde_json::from_str(&response)?)
    }
}

/// Locate the dataset `href` in a registration response.
///
/// `dataSets` is either an array of objects or a single object.
fn extract_dataset_href(response: &Value) -> VissResult<String> {
    let data_sets = response
        .get("dataSets")
        .ok_or_else(|| VissError::MissingField {
            field: "dataSets".to_string(),
            node: response.to_string(),
        })?;

    let href = match data_sets {
        Value::Array(elements) => elements.first().and_then(|e| e.get("href")),
        other => other.get("href"),
    };

    href.and_then(json::text_value)
        .ok_or_else(|| VissError::MalformedResponse(format!("no dataset href in {}", data_sets)))
}

/// Build the WMS GetMap URL from a visualizer-creation response.
///
/// Descends into `reference.url` and `reference.layers`; `layers` may be
/// a single string or an array whose first element is used.
fn extract_wms_url(response: &Value) -> VissResult<String> {
    let reference = response
        .get("reference")
        .ok_or_else(|| VissError::MissingField {
            field: "reference".to_string(),
            node: response.to_string(),
        })?;

    let url = json::mandatory_field(reference, "url")?;

    let layers = reference
        .get("layers")
        .ok_or_else(|| VissError::MissingField {
            field: "layers".to_string(),
            node: reference.to_string(),
        })?;
    let layer = match layers {
        Value::Array(elements) => elements.first().and_then(json::text_value),
        other => json::text_value(other),
    }
    .ok_or_else(|| VissError::MalformedResponse(format!("no usable layer in {}", layers)))?;

    Ok(wms::get_map_url(&url, &layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_href_from_array() {
        let href = extract_dataset_href(&json!({"dataSets": [{"href": "A"}]})).unwrap();
        assert_eq!(href, "A");
    }

    #[test]
    fn test_dataset_href_from_object() {
        let href = extract_dataset_href(&json!({"dataSets": {"href": "B"}})).unwrap();
        assert_eq!(href, "B");
    }

    #[test]
    fn test_dataset_href_from_empty_array_fails() {
        let err = extract_dataset_href(&json!({"dataSets": []})).unwrap_err();
        assert!(matches!(err, VissError::MalformedResponse(_)));
    }

    #[test]
    fn test_dataset_href_missing_datasets_fails() {
        let err = extract_dataset_href(&json!({})).unwrap_err();
        assert!(matches!(err, VissError::MissingField { field, .. } if field == "dataSets"));
    }

    #[test]
    fn test_wms_url_from_layer_string() {
        let url = extract_wms_url(&json!({
            "reference": {"url": "http://host/wms", "layers": "layerA"}
        }))
        .unwrap();
        assert!(url.starts_with("http://host/wms?service=WMS"));
        assert!(url.contains("layers=layerA&"));
    }

    #[test]
    fn test_wms_url_from_layer_array_takes_first() {
        let url = extract_wms_url(&json!({
            "reference": {"url": "http://host/wms", "layers": ["layerA", "layerB"]}
        }))
        .unwrap();
        assert!(url.contains("layers=layerA&"));
    }

    #[test]
    fn test_wms_url_missing_reference_fails() {
        let err = extract_wms_url(&json!({})).unwrap_err();
        assert!(matches!(err, VissError::MissingField { field, .. } if field == "reference"));
    }
}
