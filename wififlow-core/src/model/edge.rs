//! Edge keys and per-hour edge aggregates

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Hour, RouterId};

/// Ordered (from, to) sniffer pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub from_router_id: RouterId,
    pub to_router_id: RouterId,
}

impl EdgeKey {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from_router_id: from.to_string(),
            to_router_id: to.to_string(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_router_id, self.to_router_id)
    }
}

/// Filtered transitions of one edge within one hour, reduced to sum and count.
///
/// Field order matches the columns of the hourly edge files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAggregate {
    pub from_router_id: RouterId,
    pub to_router_id: RouterId,
    /// Sum of the kept transition durations
    pub seconds: f64,
    /// Number of kept transitions
    pub count: u64,
}

impl EdgeAggregate {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from_router_id, &self.to_router_id)
    }

    /// Mean duration of the kept transitions
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_seconds(&self) -> f64 {
        self.seconds / self.count as f64
    }
}

/// One hour of one day, the unit the edge files are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourSlot {
    pub date: NaiveDate,
    pub hour: Hour,
}

impl HourSlot {
    pub fn new(date: NaiveDate, hour: Hour) -> Self {
        Self { date, hour }
    }

    /// All 24 slots of a day in order
    pub fn day(date: NaiveDate) -> impl Iterator<Item = Self> {
        (0..crate::HOURS_PER_DAY).map(move |hour| Self::new(date, hour))
    }

    /// ISO-8601 start of the hour, as consumed by the time slider
    pub fn label(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:00:00",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.hour
        )
    }
}

/// Edge aggregates of one hour slot
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEdges {
    pub slot: HourSlot,
    pub edges: Vec<EdgeAggregate>,
}

impl HourlyEdges {
    /// Mean transition count over the edges of this hour, `None` when empty
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_count(&self) -> Option<f64> {
        if self.edges.is_empty() {
            return None;
        }
        let total: u64 = self.edges.iter().map(|e| e.count).sum();
        Some(total as f64 / self.edges.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(from: &str, to: &str, seconds: f64, count: u64) -> EdgeAggregate {
        EdgeAggregate {
            from_router_id: from.into(),
            to_router_id: to.into(),
            seconds,
            count,
        }
    }

    #[test]
    fn label_is_zero_padded_iso() {
        let slot = HourSlot::new(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap(), 7);
        assert_eq!(slot.label(), "2022-12-01T07:00:00");
    }

    #[test]
    fn day_yields_every_hour_once() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();
        let hours: Vec<Hour> = HourSlot::day(date).map(|s| s.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn mean_count_over_edges() {
        let hourly = HourlyEdges {
            slot: HourSlot::new(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap(), 0),
            edges: vec![aggregate("a", "b", 10.0, 1), aggregate("b", "a", 40.0, 4)],
        };
        assert_eq!(hourly.mean_count(), Some(2.5));
    }

    #[test]
    fn mean_count_of_empty_hour_is_none() {
        let hourly = HourlyEdges {
            slot: HourSlot::new(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap(), 0),
            edges: vec![],
        };
        assert_eq!(hourly.mean_count(), None);
    }
}
