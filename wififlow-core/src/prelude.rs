pub use crate::Error;

// Re-export key components
pub use crate::loading::{
    MapConfig, PreprocessConfig, load_road_network, load_sniffers, read_day, read_detections,
    write_hourly_edges,
};
pub use crate::model::{
    Bounds, DetectionEvent, EdgeAggregate, EdgeKey, HourSlot, HourlyEdges, RoadSegment, Sniffer,
    SnifferRegistry, StyledEdge, Transition,
};
pub use crate::preprocess::{
    PreprocessSummary, aggregate_edges, extract_transitions, run_preprocessor,
};
pub use crate::render::{MapDocument, build_traffic_map};
pub use crate::styling::{Rgb, style_hour};

// Core scalar types
pub use crate::Hour;
pub use crate::RouterId;
