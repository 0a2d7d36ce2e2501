use geo::line_string;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde::Serialize;
use serde_json::json;

use crate::{
    Error,
    model::{Bounds, RoadSegment, SnifferRegistry, StyledEdge},
};

/// Popup-bearing marker at a sniffer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnifferMarker {
    pub lat: f64,
    pub lon: f64,
    /// `<guid> - <address>`
    pub popup: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLayer {
    pub name: &'static str,
    pub show: bool,
    pub markers: Vec<SnifferMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapLayer {
    pub name: &'static str,
    pub show: bool,
    /// `[lat, lon, weight]`
    pub points: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadLayer {
    pub name: &'static str,
    pub show: bool,
    pub color: &'static str,
    pub weight: u8,
    /// Polylines as `[lat, lon]` points
    pub lines: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayer {
    pub name: &'static str,
    pub show: bool,
    /// ISO-8601 duration each feature stays visible
    pub period: &'static str,
    pub auto_play: bool,
    pub add_last_point: bool,
    pub features: FeatureCollection,
}

pub fn marker_layer(sniffers: &SnifferRegistry) -> MarkerLayer {
    MarkerLayer {
        name: "Sniffer Markers",
        show: true,
        markers: sniffers
            .iter()
            .map(|s| SnifferMarker {
                lat: s.latitude(),
                lon: s.longitude(),
                popup: format!("{} - {}", s.guid, s.address),
            })
            .collect(),
    }
}

pub fn heatmap_layer(sniffers: &SnifferRegistry) -> HeatmapLayer {
    HeatmapLayer {
        name: "Sniffer Heatmap",
        show: false,
        points: sniffers
            .iter()
            .map(|s| [s.latitude(), s.longitude(), 1.0])
            .collect(),
    }
}

/// Roads with every point inside `bounds`
pub fn road_layer(roads: &[RoadSegment], bounds: &Bounds) -> RoadLayer {
    let lines: Vec<Vec<[f64; 2]>> = roads
        .iter()
        .filter(|road| road.is_within(bounds))
        .map(RoadSegment::lat_lon)
        .collect();
    log::debug!("{} of {} road segments inside bounds", lines.len(), roads.len());

    RoadLayer {
        name: "Routes",
        show: false,
        color: "#FF0000",
        weight: 3,
        lines,
    }
}

/// One animated line feature per styled edge, visible for its hour
///
/// # Errors
///
/// Returns an error if a feature cannot be assembled
pub fn timeline_layer(edges: &[StyledEdge]) -> Result<TimelineLayer, Error> {
    let features = edges
        .iter()
        .map(edge_feature)
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(TimelineLayer {
        name: "Traffic",
        show: true,
        period: "PT1H",
        auto_play: false,
        add_last_point: false,
        features: FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        },
    })
}

fn edge_feature(edge: &StyledEdge) -> Result<Feature, Error> {
    let line = line_string![
        (x: edge.from.x(), y: edge.from.y()),
        (x: edge.to.x(), y: edge.to.y())
    ];
    let geometry = Geometry::new(GeoJsonValue::from(&line));
    let time = edge.slot.label();

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "from_router_id": edge.edge.from_router_id,
            "to_router_id": edge.edge.to_router_id,
            "popup": edge.popup(),
            "times": [time, time],
            "style": {
                "color": edge.color.to_hex(),
                "opacity": edge.opacity,
                "weight": edge.width,
            },
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
