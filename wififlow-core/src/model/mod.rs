//! Data model for sniffer detections and the edges derived from them
//!
//! Raw detections become transitions, transitions become hourly edge
//! aggregates, and aggregates become styled edges ready for rendering.

pub mod detection;
pub mod edge;
pub mod network;
pub mod styled;

pub use detection::{DetectionEvent, Transition};
pub use edge::{EdgeAggregate, EdgeKey, HourSlot, HourlyEdges};
pub use network::{Bounds, RoadSegment, Sniffer, SnifferRegistry};
pub use styled::StyledEdge;
