//! Orientation du périmètre selon l'axe des foyers

use geo::{Coord, LineString, Point, Rotate};

use crate::GeoPoint;

/// Angle (degrés) du vecteur focus1 → focus2, mesuré depuis l'axe des
/// longitudes dans le plan lng/lat
pub fn bearing_deg(focus1: GeoPoint, focus2: GeoPoint) -> f64 {
    (focus2.lat - focus1.lat)
        .atan2(focus2.lng - focus1.lng)
        .to_degrees()
}

/// Tourne la courbe autour de `center` de `angle_deg` (sens trigonométrique).
///
/// Le plan lng/lat est traité comme cartésien pour cette étape. L'ordre des
/// points est conservé.
pub fn align(points: &[GeoPoint], center: GeoPoint, angle_deg: f64) -> Vec<GeoPoint> {
    let curve: LineString = points.iter().map(|&p| Coord::from(p)).collect();
    let pivot = Point::from(Coord::from(center));

    curve
        .rotate_around_point(angle_deg, pivot)
        .coords()
        .map(|&c| GeoPoint::from(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(p: GeoPoint, lat: f64, lng: f64) {
        assert!(
            (p.lat - lat).abs() < 1e-9 && (p.lng - lng).abs() < 1e-9,
            "{:?} != ({}, {})",
            p,
            lat,
            lng
        );
    }

    #[test]
    fn test_bearing() {
        let o = GeoPoint::new(0.0, 0.0);
        assert_eq!(bearing_deg(o, GeoPoint::new(0.0, 1.0)), 0.0);
        assert!((bearing_deg(o, GeoPoint::new(1.0, 0.0)) - 90.0).abs() < 1e-12);
        assert!((bearing_deg(o, GeoPoint::new(1.0, 1.0)) - 45.0).abs() < 1e-12);
        assert!((bearing_deg(o, GeoPoint::new(0.0, -1.0)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_is_counterclockwise() {
        let center = GeoPoint::new(10.0, 20.0);
        let points = vec![GeoPoint::new(10.0, 21.0), GeoPoint::new(11.0, 20.0)];
        let rotated = align(&points, center, 90.0);

        // est → nord, nord → ouest
        assert_close(rotated[0], 11.0, 20.0);
        assert_close(rotated[1], 10.0, 19.0);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let center = GeoPoint::new(32.08, 34.78);
        let points = vec![
            GeoPoint::new(32.08, 34.77),
            GeoPoint::new(32.09, 34.78),
            GeoPoint::new(32.08, 34.79),
        ];
        let rotated = align(&points, center, 0.0);
        for (r, p) in rotated.iter().zip(&points) {
            assert_close(*r, p.lat, p.lng);
        }
    }

    #[test]
    fn test_center_is_fixed() {
        let center = GeoPoint::new(-33.9, 151.2);
        let rotated = align(&[center], center, 37.0);
        assert_close(rotated[0], center.lat, center.lng);
    }
}
