use serde::Serialize;

use crate::geo::Coordinate;

/// Two-point route payload for an external map client: both endpoints plus
/// the camera center halfway between them. Nothing is rendered server-side.
#[derive(Debug, Serialize, Clone)]
pub struct RoutePoints {
    pub restaurant: Coordinate,
    pub destination: Coordinate,
    pub center: Coordinate,
}

#[derive(Debug, Serialize, Clone)]
pub struct PredictionOut {
    pub ts_ms: i64,
    pub minutes: f32,
    pub distance_km: f64,
    pub route: RoutePoints,
}
