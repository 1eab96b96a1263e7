use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based position of the round in the catalogue file.
    pub id: usize,
    pub truth: LatLng,
    /// Opaque key the UI resolves to the photo of the location.
    pub asset_key: String,
    pub location_name: String,
}

/// One line of the NDJSON round catalogue.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub lat: f64,
    pub lng: f64,
    pub location_name: String,
    #[serde(default)]
    pub asset_key: Option<String>,
}
