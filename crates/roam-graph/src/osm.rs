//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use roam_graph::osm::load_from_pbf;
//!
//! let map = load_from_pbf(Path::new("mobile_al.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only drivable `highway=*` ways are included (see [`is_drivable`]).  All
//! other features (footways, buildings, POIs, relations) are ignored.
//! One-way roads add a single directed edge; two-way roads add both
//! directions.  Edge lengths are the projected straight-line distances
//! between adjacent way nodes.
//!
//! # Projection
//!
//! Node latitude/longitude pairs are projected equirectangularly into
//! normalized map units: the source bounding box is measured with haversine,
//! positions are scaled so the larger extent spans `[0, 1]`, and that extent
//! in meters becomes the map's metric scale.  Distances computed in map
//! units therefore convert to meters with a single multiply.
//!
//! # Memory note
//!
//! The loader buffers all OSM nodes in a hash map for the first pass (needed
//! because ways reference node IDs by OSM integer ID).  For a mid-size city
//! this is a few million entries (≈ 100–200 MB).  The map is freed before
//! the R-tree is built.

use std::path::Path;

use log::info;
use osmpbf::{Element, ElementReader};
use rustc_hash::{FxHashMap, FxHashSet};

use roam_core::{GeoPoint, MapPoint, NodeId};

use crate::GraphError;
use crate::map::{RoadMap, RoadMapBuilder};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road map from an OSM PBF file.
///
/// Only car-drivable roads are included.  Use [`RoadMapBuilder`] directly
/// for non-OSM sources.
///
/// # Errors
///
/// Returns [`GraphError::Osm`] on parse errors or when the file contains no
/// drivable roads, [`GraphError::Io`] on file errors.
pub fn load_from_pbf(path: &Path) -> Result<RoadMap, GraphError> {
    // ── Phase 1: collect all OSM nodes + road ways in one sequential pass ──
    let reader = ElementReader::from_path(path)?;

    let mut all_nodes: FxHashMap<i64, GeoPoint> = FxHashMap::default();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat() as f32, n.lon() as f32));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat() as f32, n.lon() as f32));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(hw) = highway
                    && is_drivable(hw)
                {
                    let oneway = is_oneway(hw, &tags);
                    let refs: Vec<i64> = w.refs().collect();
                    road_ways.push(OsmWay { refs, oneway });
                }
            }
            _ => {}
        })
        .map_err(|e| GraphError::Osm(e.to_string()))?;

    // ── Phase 2: identify road-referenced node IDs ────────────────────────
    let road_node_ids: FxHashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    // ── Phase 3: fit the projection frame over the road nodes ─────────────
    let frame = Frame::fit(
        road_node_ids
            .iter()
            .filter_map(|id| all_nodes.get(id).copied()),
    )
    .ok_or_else(|| GraphError::Osm("no drivable roads in file".into()))?;

    // ── Phase 4: build the map ────────────────────────────────────────────
    // Pre-allocate: ~2× road nodes for edges (rough estimate).
    let mut builder =
        RoadMapBuilder::with_capacity(road_node_ids.len(), road_node_ids.len() * 2);
    builder.metric_scale(frame.extent_m);

    // Map OSM node IDs → our NodeIds, adding only road-relevant nodes.
    let mut osm_to_roam: FxHashMap<i64, NodeId> = FxHashMap::default();
    osm_to_roam.reserve(road_node_ids.len());

    for osm_id in &road_node_ids {
        if let Some(&geo) = all_nodes.get(osm_id) {
            let id = builder.add_node(frame.project(geo));
            osm_to_roam.insert(*osm_id, id);
        }
    }

    // Free the full node map — no longer needed.
    drop(all_nodes);
    drop(road_node_ids);

    // Add directed edges from way node sequences.
    for way in &road_ways {
        for window in way.refs.windows(2) {
            let (osm_a, osm_b) = (window[0], window[1]);
            if let (Some(&from), Some(&to)) =
                (osm_to_roam.get(&osm_a), osm_to_roam.get(&osm_b))
            {
                let len = builder.node_pos(from).distance(builder.node_pos(to));
                builder.add_directed_edge(from, to, len);
                if !way.oneway {
                    builder.add_directed_edge(to, from, len);
                }
            }
        }
    }

    info!(
        "loaded {} road nodes, {} directed edges from {} (scale {:.0} m/unit)",
        builder.node_count(),
        builder.edge_count(),
        path.display(),
        frame.extent_m,
    );

    Ok(builder.build())
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    refs: Vec<i64>,
    oneway: bool,
}

/// Equirectangular projection frame: maps lat/lon into `[0, 1]` map units
/// normalized by the larger bounding-box extent.
struct Frame {
    min: GeoPoint,
    /// Meters per degree of longitude/latitude at this bounding box.
    m_per_deg_lon: f32,
    m_per_deg_lat: f32,
    /// Larger bounding-box extent in meters — the map's metric scale.
    extent_m: f32,
}

impl Frame {
    /// Fit a frame to a set of coordinates.  Returns `None` for an empty
    /// input.  A degenerate (single-point) box gets extent 1 m so that
    /// projection and scale stay finite.
    fn fit(points: impl Iterator<Item = GeoPoint>) -> Option<Frame> {
        let mut min = GeoPoint::new(f32::INFINITY, f32::INFINITY);
        let mut max = GeoPoint::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut seen = false;
        for p in points {
            seen = true;
            min.lat = min.lat.min(p.lat);
            min.lon = min.lon.min(p.lon);
            max.lat = max.lat.max(p.lat);
            max.lon = max.lon.max(p.lon);
        }
        if !seen {
            return None;
        }

        // Measure the box edges with haversine, then linearize: within a
        // city-sized box the equirectangular error is far below f32 noise.
        let width_m = min.distance_m(GeoPoint::new(min.lat, max.lon));
        let height_m = min.distance_m(GeoPoint::new(max.lat, min.lon));

        let lon_span = max.lon - min.lon;
        let lat_span = max.lat - min.lat;
        let m_per_deg_lon = if lon_span > 0.0 { width_m / lon_span } else { 0.0 };
        let m_per_deg_lat = if lat_span > 0.0 { height_m / lat_span } else { 0.0 };

        let extent_m = width_m.max(height_m).max(1.0);

        Some(Frame {
            min,
            m_per_deg_lon,
            m_per_deg_lat,
            extent_m,
        })
    }

    fn project(&self, p: GeoPoint) -> MapPoint {
        MapPoint::new(
            (p.lon - self.min.lon) * self.m_per_deg_lon / self.extent_m,
            (p.lat - self.min.lat) * self.m_per_deg_lat / self.extent_m,
        )
    }
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// Whether a `highway` value is drivable by car.
///
/// Unknown road types are kept rather than dropped — a missing residential
/// variant should not disconnect the graph.
fn is_drivable(highway: &str) -> bool {
    match highway {
        "motorway" | "motorway_link"
        | "trunk" | "trunk_link"
        | "primary" | "primary_link"
        | "secondary" | "secondary_link"
        | "tertiary" | "tertiary_link"
        | "residential" | "living_street"
        | "service" | "unclassified" => true,
        // Explicitly non-car:
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track" => false,
        _ => true,
    }
}

/// Determine whether a way should be treated as one-way for car traffic.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
fn is_oneway(highway: &str, tags: &[(&str, &str)]) -> bool {
    let explicit = tags
        .iter()
        .any(|(k, v)| *k == "oneway" && matches!(*v, "yes" | "1" | "true"));
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}
