use geo::Point;

use super::edge::{EdgeAggregate, HourSlot};
use crate::styling::Rgb;

/// Edge aggregate enriched with distance, speed and display attributes
#[derive(Debug, Clone, PartialEq)]
pub struct StyledEdge {
    pub edge: EdgeAggregate,
    pub slot: HourSlot,
    pub from: Point<f64>,
    pub to: Point<f64>,
    pub seconds_avr: f64,
    pub minutes_avr: f64,
    pub hours_avr: f64,
    pub distance_km: f64,
    /// Capped average speed, km/h
    pub speed_kmh: f64,
    pub color: Rgb,
    /// 3 for edges at or above the hour's mean count, 1 otherwise
    pub width: u8,
    /// `count / mean_count`; not clamped, may exceed 1
    pub opacity: f64,
}

impl StyledEdge {
    pub fn popup(&self) -> String {
        format!(
            "distance: {:.2} km <br> time: {:.2} min <br> speed: {:.2} km/h <br> count:{}",
            self.distance_km, self.minutes_avr, self.speed_kmh, self.edge.count
        )
    }
}
