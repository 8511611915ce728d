//! Coordinate types: planar map units and WGS-84 geographic coordinates.
//!
//! The road map works in **normalized map units**: positions lie in `[0, 1]`
//! on both axes and distances are plain Euclidean.  One map unit corresponds
//! to `metric_scale` meters (the larger extent of the source map), so a raw
//! map-unit distance converts to meters with a single multiply.
//!
//! `GeoPoint` exists for ingestion only: the OSM loader measures the source
//! bounding box with haversine before projecting every node into map units.

/// A position in normalized planar map units.
///
/// Uses `f32` throughout; at city scale one unit is on the order of 10 km,
/// so single precision resolves well below a meter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line Euclidean distance in map units.
    ///
    /// This is the model-native metric: edge lengths, accumulated path
    /// costs, and the A* heuristic are all expressed in it.
    #[inline]
    pub fn distance(self, other: MapPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in meters.
    ///
    /// Accuracy: ±0.5 % (f32 rounding) — sufficient for deriving the metric
    /// scale of a city-sized map.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, meters

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
