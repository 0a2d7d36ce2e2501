use chrono::NaiveDate;

use super::outliers::aggregate_edges;
use crate::{
    HOURS_PER_DAY,
    model::{HourSlot, HourlyEdges, Transition},
};

/// Splits transitions into 24 hour-of-day buckets by their arrival hour,
/// regardless of date. Index `h` holds hour `h`.
pub fn bucket_by_hour(transitions: Vec<Transition>) -> Vec<Vec<Transition>> {
    let mut buckets: Vec<Vec<Transition>> = (0..HOURS_PER_DAY).map(|_| Vec::new()).collect();
    for transition in transitions {
        // hour() is always < 24
        buckets[transition.hour() as usize].push(transition);
    }
    buckets
}

/// Buckets a day's transitions by hour and aggregates every bucket, giving
/// exactly 24 hourly edge sets for `date`
pub fn hourly_edges(date: NaiveDate, transitions: Vec<Transition>) -> Vec<HourlyEdges> {
    HourSlot::day(date)
        .zip(bucket_by_hour(transitions))
        .map(|(slot, bucket)| HourlyEdges {
            slot,
            edges: aggregate_edges(&bucket),
        })
        .collect()
}
