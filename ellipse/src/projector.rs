//! Projection du repère local (mètres) vers les coordonnées géographiques
//!
//! Approximation équirectangulaire locale : la correction de convergence des
//! méridiens utilise la latitude du centre pour tous les points. Valable tant
//! que l'ellipse reste petite devant le rayon terrestre.

use crate::earth::Sphere;
use crate::{EllipseError, GeoPoint, LocalPoint};

/// En deçà, cos(lat) est considéré nul (pôle)
const MIN_COS_LAT: f64 = 1e-12;

/// Point milieu des deux foyers (moyenne arithmétique)
pub fn midpoint(focus1: GeoPoint, focus2: GeoPoint) -> GeoPoint {
    GeoPoint::new(
        (focus1.lat + focus2.lat) / 2.0,
        (focus1.lng + focus2.lng) / 2.0,
    )
}

/// Décale `center` de `dx` mètres vers l'est et `dy` mètres vers le nord
pub fn offset_by_meters(center: GeoPoint, dx: f64, dy: f64) -> GeoPoint {
    let to_degrees = 180.0 / std::f64::consts::PI;
    let cos_lat = (center.lat * std::f64::consts::PI / 180.0).cos();

    let d_lng = (dx / Sphere::R) * to_degrees / cos_lat;
    let d_lat = (dy / Sphere::R) * to_degrees;

    GeoPoint::new(center.lat + d_lat, center.lng + d_lng)
}

/// Vérifie que l'échelle des longitudes est définie au centre
pub fn check_center(center: GeoPoint) -> Result<(), EllipseError> {
    if center.lat.to_radians().cos().abs() < MIN_COS_LAT {
        return Err(EllipseError::PolarMidpoint { lat: center.lat });
    }
    Ok(())
}

/// Projette les points locaux autour de `center`, dans le même ordre
///
/// # Errors
///
/// `PolarMidpoint` si le centre est sur un pôle.
pub fn project(center: GeoPoint, points: &[LocalPoint]) -> Result<Vec<GeoPoint>, EllipseError> {
    check_center(center)?;

    Ok(points
        .iter()
        .map(|p| offset_by_meters(center, p.x, p.y))
        .collect())
}
