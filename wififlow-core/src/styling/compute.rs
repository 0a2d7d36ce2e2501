use geo::{Distance, Geodesic, Point};

use super::gradient::speed_color;
use crate::{
    Error, SECONDS_EPSILON,
    model::{HourlyEdges, SnifferRegistry, StyledEdge},
};

/// Geodesic (WGS-84) distance in kilometres between two lon/lat points
pub fn distance_km(from: Point<f64>, to: Point<f64>) -> f64 {
    Geodesic.distance(from, to) / 1000.0
}

/// `distance / hours`, never above `cap_kmh`
pub fn average_speed_kmh(distance_km: f64, hours: f64, cap_kmh: f64) -> f64 {
    (distance_km / hours).min(cap_kmh)
}

/// 3 for edges at or above the hour's mean count, 1 below it
#[allow(clippy::cast_precision_loss)]
pub fn edge_width(count: u64, mean_count: f64) -> u8 {
    if (count as f64) < mean_count { 1 } else { 3 }
}

/// Styles every edge of one hour.
///
/// Colours are relative to the fastest edge of this hour only; widths and
/// opacities are relative to this hour's mean count.
///
/// # Errors
///
/// Returns [`Error::UnknownRouter`] if an edge references a sniffer that is
/// not in `sniffers`
#[allow(clippy::cast_precision_loss)]
pub fn style_hour(
    hourly: &HourlyEdges,
    sniffers: &SnifferRegistry,
    speed_cap_kmh: f64,
) -> Result<Vec<StyledEdge>, Error> {
    let Some(mean_count) = hourly.mean_count() else {
        log::warn!("No edges for {}", hourly.slot.label());
        return Ok(Vec::new());
    };

    let mut styled = hourly
        .edges
        .iter()
        .map(|edge| {
            let from = sniffers.location(&edge.from_router_id)?;
            let to = sniffers.location(&edge.to_router_id)?;

            let seconds_avr = (edge.seconds + SECONDS_EPSILON) / edge.count as f64;
            let minutes_avr = seconds_avr / 60.0;
            let hours_avr = minutes_avr / 60.0;
            let distance_km = distance_km(from, to);

            Ok(StyledEdge {
                edge: edge.clone(),
                slot: hourly.slot,
                from,
                to,
                seconds_avr,
                minutes_avr,
                hours_avr,
                distance_km,
                speed_kmh: average_speed_kmh(distance_km, hours_avr, speed_cap_kmh),
                color: speed_color(0.0),
                width: edge_width(edge.count, mean_count),
                opacity: edge.count as f64 / mean_count,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let max_speed = styled.iter().map(|s| s.speed_kmh).fold(0.0_f64, f64::max);
    if max_speed > 0.0 {
        for edge in &mut styled {
            edge.color = speed_color(edge.speed_kmh / max_speed);
        }
    }

    Ok(styled)
}
