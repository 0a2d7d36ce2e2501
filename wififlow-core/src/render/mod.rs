//! Interactive map output
//!
//! Four independently toggleable overlays: sniffer markers, a sniffer
//! density heatmap, road polylines clipped to a bounding box, and the
//! styled edges as a time-animated layer with one-hour windows.

mod builder;
mod html;
mod layers;

pub use builder::build_traffic_map;
pub use html::MapDocument;
pub use layers::{
    HeatmapLayer, MarkerLayer, RoadLayer, SnifferMarker, TimelineLayer, heatmap_layer,
    marker_layer, road_layer, timeline_layer,
};
