use std::path::Path;

use serde::Serialize;

use super::layers::{HeatmapLayer, MarkerLayer, RoadLayer, TimelineLayer};
use crate::Error;

const TEMPLATE: &str = include_str!("../../assets/map.html");
const DATA_PLACEHOLDER: &str = "__WIFIFLOW_MAP_DATA__";

/// Complete map: initial view plus the four overlays
#[derive(Debug, Clone, Serialize)]
pub struct MapDocument {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: MarkerLayer,
    pub heatmap: HeatmapLayer,
    pub roads: RoadLayer,
    pub timeline: TimelineLayer,
}

impl MapDocument {
    /// Self-contained Leaflet page with the layer data embedded as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the layers cannot be serialized
    pub fn to_html(&self) -> Result<String, Error> {
        // keep "</script>" inside strings from closing the data block
        let data = serde_json::to_string(self)?.replace("</", "<\\/");
        Ok(TEMPLATE.replace(DATA_PLACEHOLDER, &data))
    }

    /// Writes the page to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn write_html(&self, path: &Path) -> Result<(), Error> {
        let html = self.to_html()?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        std::fs::write(path, html).map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::{Bounds, Sniffer, SnifferRegistry};
    use crate::render::{heatmap_layer, marker_layer, road_layer, timeline_layer};

    fn document(address: &str) -> MapDocument {
        let sniffers = SnifferRegistry::new(vec![Sniffer {
            guid: "g1".into(),
            geometry: Point::new(37.6, 54.2),
            address: address.into(),
        }]);
        MapDocument {
            center: [54.1913, 37.6165],
            zoom: 13,
            markers: marker_layer(&sniffers),
            heatmap: heatmap_layer(&sniffers),
            roads: road_layer(&[], &Bounds::default()),
            timeline: timeline_layer(&[]).unwrap(),
        }
    }

    #[test]
    fn data_is_embedded_in_template() {
        let html = document("Lenina 1").to_html().unwrap();
        assert!(!html.contains(DATA_PLACEHOLDER));
        assert!(html.contains("\"popup\":\"g1 - Lenina 1\""));
        assert!(html.contains("\"period\":\"PT1H\""));
        assert!(html.contains("leaflet"));
    }

    #[test]
    fn script_close_in_data_is_escaped() {
        let html = document("</script><b>").to_html().unwrap();
        assert!(html.contains("g1 - <\\/script><b>"));
    }
}
