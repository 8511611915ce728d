//! Unit tests for roam-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_cast() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(EdgeId(7).index(), 7);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }
}

#[cfg(test)]
mod map_point {
    use crate::MapPoint;

    #[test]
    fn zero_distance() {
        let p = MapPoint::new(0.25, 0.75);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        // 3-4-5 triangle scaled into the unit square.
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(0.3, 0.4);
        assert!((a.distance(b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn symmetric() {
        let a = MapPoint::new(0.1, 0.9);
        let b = MapPoint::new(0.8, 0.2);
        assert_eq!(a.distance(b), b.distance(a));
    }
}

#[cfg(test)]
mod geo_point {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}
