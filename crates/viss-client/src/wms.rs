//! WMS GetMap URL construction for visualizer layers.

/// Fixed GetMap bounding box for generated visualizer layers (EPSG:31466).
const BBOX: &str = "385735.1640999372,5666656.270399797,386213.9640999382,5667007.770399805";

/// Build the GetMap request URL for a visualizer's WMS endpoint and layer.
pub fn get_map_url(base_url: &str, layer: &str) -> String {
    format!(
        "{}?service=WMS&version=1.1.0&request=GetMap&layers={}&styles=&bbox={}&width=512&height=375&srs=EPSG:31466&format=image/png",
        base_url, layer, BBOX
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_map_url() {
        assert_eq!(
            get_map_url("http://host/wms", "layerA"),
            "http://host/wms?service=WMS&version=1.1.0&request=GetMap&layers=layerA&styles=&bbox=385735.1640999372,5666656.270399797,386213.9640999382,5667007.770399805&width=512&height=375&srs=EPSG:31466&format=image/png"
        );
    }
}
