//! Static network entities: sniffers and road segments

use geo::{LineString, Point};
use hashbrown::HashMap;
use serde::Deserialize;

use crate::{Error, RouterId};

/// Fixed WiFi-scanning device
#[derive(Debug, Clone, PartialEq)]
pub struct Sniffer {
    pub guid: RouterId,
    /// Location, x = longitude, y = latitude
    pub geometry: Point<f64>,
    /// Street address in the configured language
    pub address: String,
}

impl Sniffer {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Read-only sniffer table with lookup by guid
#[derive(Debug, Clone, Default)]
pub struct SnifferRegistry {
    sniffers: Vec<Sniffer>,
    by_guid: HashMap<RouterId, usize>,
}

impl SnifferRegistry {
    pub fn new(sniffers: Vec<Sniffer>) -> Self {
        let by_guid = sniffers
            .iter()
            .enumerate()
            .map(|(idx, sniffer)| (sniffer.guid.clone(), idx))
            .collect();
        Self { sniffers, by_guid }
    }

    /// Sniffer with the given guid
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRouter`] if the guid is not in the table
    pub fn get(&self, guid: &str) -> Result<&Sniffer, Error> {
        self.by_guid
            .get(guid)
            .map(|&idx| &self.sniffers[idx])
            .ok_or_else(|| Error::UnknownRouter {
                guid: guid.to_string(),
            })
    }

    pub fn location(&self, guid: &str) -> Result<Point<f64>, Error> {
        self.get(guid).map(|s| s.geometry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sniffer> {
        self.sniffers.iter()
    }

    pub fn len(&self) -> usize {
        self.sniffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sniffers.is_empty()
    }
}

/// Road polyline with its grouping metadata
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    /// Points as (lon, lat)
    pub geometry: LineString<f64>,
    pub group_id: String,
}

impl RoadSegment {
    /// True when every point of the segment lies inside `bounds`
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.geometry
            .points()
            .all(|p| bounds.contains(p.y(), p.x()))
    }

    /// Points as `[lat, lon]` pairs
    pub fn lat_lon(&self) -> Vec<[f64; 2]> {
        self.geometry.points().map(|p| [p.y(), p.x()]).collect()
    }
}

/// Latitude/longitude box, inclusive on every side
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_lat: 54.164_616_619_067_9,
            max_lat: 54.249_176_184_173_9,
            min_lon: 37.572_662_859_548_3,
            max_lon: 37.679_35,
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::line_string;

    use super::*;

    fn sniffer(guid: &str, lat: f64, lon: f64) -> Sniffer {
        Sniffer {
            guid: guid.into(),
            geometry: Point::new(lon, lat),
            address: String::new(),
        }
    }

    #[test]
    fn registry_finds_known_guid() {
        let registry = SnifferRegistry::new(vec![sniffer("a", 54.2, 37.6), sniffer("b", 54.3, 37.7)]);
        let found = registry.get("b").unwrap();
        assert_eq!(found.latitude(), 54.3);
        assert_eq!(found.longitude(), 37.7);
    }

    #[test]
    fn registry_reports_unknown_guid() {
        let registry = SnifferRegistry::new(vec![sniffer("a", 54.2, 37.6)]);
        let err = registry.get("missing").unwrap_err();
        assert!(matches!(err, Error::UnknownRouter { guid } if guid == "missing"));
    }

    #[test]
    fn segment_inside_bounds() {
        let bounds = Bounds {
            min_lat: 0.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 10.0,
        };
        let inside = RoadSegment {
            geometry: line_string![(x: 1.0, y: 1.0), (x: 5.0, y: 5.0), (x: 10.0, y: 0.0)],
            group_id: "1".into(),
        };
        let partly_outside = RoadSegment {
            geometry: line_string![(x: 1.0, y: 1.0), (x: 5.0, y: 5.0), (x: 10.5, y: 0.0)],
            group_id: "2".into(),
        };
        assert!(inside.is_within(&bounds));
        assert!(!partly_outside.is_within(&bounds));
    }

    #[test]
    fn segment_points_are_lat_lon() {
        let segment = RoadSegment {
            geometry: line_string![(x: 37.6, y: 54.2), (x: 37.7, y: 54.3)],
            group_id: String::new(),
        };
        assert_eq!(segment.lat_lon(), vec![[54.2, 37.6], [54.3, 37.7]]);
    }
}
