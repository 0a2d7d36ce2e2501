//! Per-hour speed and display attributes of edge aggregates

mod compute;
mod gradient;

pub use compute::{average_speed_kmh, distance_km, edge_width, style_hour};
pub use gradient::{Rgb, speed_color};
