//! Distance entre les foyers et demi-axes de l'ellipse

use crate::earth::Sphere;
use crate::{AxisLengths, EllipseError, GeoPoint};

/// Distance orthodromique (formule de haversine) en mètres
pub fn haversine_meters(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let (lat1, lng1, lat2, lng2) = (
        p1.lat.to_radians(),
        p1.lng.to_radians(),
        p2.lat.to_radians(),
        p2.lng.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    Sphere::R * c
}

/// Calcule les demi-axes à partir des foyers et du rayon focal total.
///
/// Le rayon correspond au grand axe (2a). Il doit être au moins égal à la
/// distance entre les foyers ; à égalité le demi-petit axe est nul et
/// l'ellipse se réduit au segment entre les foyers.
///
/// # Errors
///
/// - `InvalidRadius` si le rayon est non fini ou plus court que la distance focale
/// - `DegenerateEllipse` si le demi-grand axe est nul
pub fn axis_lengths(
    focus1: GeoPoint,
    focus2: GeoPoint,
    radius: f64,
) -> Result<AxisLengths, EllipseError> {
    axes_from_distance(haversine_meters(focus1, focus2), radius)
}

/// Demi-axes pour une distance focale `d` déjà connue (mètres)
pub fn axes_from_distance(d: f64, radius: f64) -> Result<AxisLengths, EllipseError> {
    if !radius.is_finite() || radius < d {
        return Err(EllipseError::invalid_radius(radius, d));
    }

    let a = radius / 2.0;
    if a == 0.0 {
        return Err(EllipseError::DegenerateEllipse);
    }

    // max(0) : a² - (d/2)² peut être -ε quand radius == d
    let b = (a.powi(2) - (d / 2.0).powi(2)).max(0.0).sqrt();

    Ok(AxisLengths {
        semi_major: a,
        semi_minor: b,
    })
}
