//! Types de données pour le crate ellipse

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::EllipseError;

/// Point en coordonnées géographiques (degrés décimaux)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude en degrés
    pub lat: f64,
    /// Longitude en degrés
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Vérifie que le point est fini et dans les bornes WGS84
    pub fn validate(self) -> Result<Self, EllipseError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if lat_ok && lng_ok {
            Ok(self)
        } else {
            Err(EllipseError::InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Couple (lat, lng), l'ordre attendu par les cartes
    pub fn to_lat_lng(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Plan longitude/latitude : x = lng, y = lat
impl From<GeoPoint> for Coord {
    fn from(p: GeoPoint) -> Self {
        Coord { x: p.lng, y: p.lat }
    }
}

impl From<Coord> for GeoPoint {
    fn from(c: Coord) -> Self {
        Self { lat: c.y, lng: c.x }
    }
}

/// Demi-axes de l'ellipse en mètres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLengths {
    /// Demi-grand axe (rayon / 2)
    pub semi_major: f64,
    /// Demi-petit axe, nul pour une ellipse aplatie en segment
    pub semi_minor: f64,
}

/// Point du repère local plan (mètres), centré sur l'ellipse
///
/// L'axe x suit le grand axe avant rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: LocalPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Résultat complet du pipeline
#[derive(Debug, Clone, Serialize)]
pub struct EllipsePerimeter {
    /// Demi-axes calculés
    pub axes: AxisLengths,

    /// Distance haversine entre les foyers (mètres)
    pub focal_distance: f64,

    /// Point milieu des foyers, centre de projection et de rotation
    pub midpoint: GeoPoint,

    /// Orientation du grand axe (degrés, depuis l'axe des longitudes)
    pub bearing_deg: f64,

    /// Périmètre fermé, dans l'ordre de parcours
    pub points: Vec<GeoPoint>,
}

impl EllipsePerimeter {
    /// Couples (lat, lng) dans l'ordre du périmètre
    pub fn lat_lng_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| p.to_lat_lng()).collect()
    }
}
