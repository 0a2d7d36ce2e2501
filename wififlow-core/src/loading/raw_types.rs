use serde::Deserialize;

/// Row of a raw detection log; other columns are ignored
#[derive(Debug, Deserialize, Clone)]
pub struct RawDetection {
    pub user_mac: String,
    pub router_id: String,
    pub tm: String,
}

/// Row of `wifi_routers.csv`
#[derive(Debug, Deserialize, Clone)]
pub struct RawSniffer {
    pub guid: String,
    /// `POINT (<lon> <lat>)`
    pub geom: String,
    /// JSON object keyed by language code
    pub address_json: String,
}

/// Row of `road_network.csv`
#[derive(Debug, Deserialize, Clone)]
pub struct RawRoadSegment {
    /// `LINESTRING (<lon> <lat>, <lon> <lat>, <lon> <lat>)`
    pub geom: String,
    pub group_id: String,
}
