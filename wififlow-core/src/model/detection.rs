//! Detection events and the transitions inferred from them

use chrono::{DateTime, FixedOffset, Timelike};

use super::edge::EdgeKey;
use crate::{Hour, RouterId};

/// One log line: a device seen by a sniffer at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvent {
    /// Device identifier (MAC address in the raw logs)
    pub user: String,
    pub router_id: RouterId,
    pub timestamp: DateTime<FixedOffset>,
}

/// Movement of one device between two consecutive, distinct sniffers
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from_router_id: RouterId,
    pub to_router_id: RouterId,
    /// Time between the two sightings, in seconds
    pub seconds: f64,
    /// Timestamp of the second sighting
    pub ended_at: DateTime<FixedOffset>,
}

impl Transition {
    pub fn edge(&self) -> EdgeKey {
        EdgeKey::new(&self.from_router_id, &self.to_router_id)
    }

    /// Hour of day of the arrival, in the timestamp's own offset
    pub fn hour(&self) -> Hour {
        self.ended_at.hour()
    }
}
