//! Types d'erreurs pour le crate ellipse

use thiserror::Error;

/// Erreurs pouvant survenir lors du calcul du périmètre
///
/// Toutes les erreurs sont détectées avant l'échantillonnage : le pipeline ne
/// retourne jamais de résultat partiel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EllipseError {
    /// Rayon inférieur à la distance entre les foyers (ou non fini)
    #[error(
        "Invalid radius: {radius} m is smaller than the distance between the foci ({focal_distance:.1} m)"
    )]
    InvalidRadius { radius: f64, focal_distance: f64 },

    /// Demi-grand axe nul : l'ellipse se réduit à un point
    #[error("Degenerate ellipse: semi-major axis is zero")]
    DegenerateEllipse,

    /// Nombre de points insuffisant pour tracer une courbe fermée
    #[error("Invalid sample count: {0} (at least 2 points are required)")]
    InvalidSampleCount(usize),

    /// Coordonnée hors bornes ou non finie
    #[error("Invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Point milieu sur un pôle : l'échelle des longitudes n'est pas définie
    #[error("Midpoint latitude {lat} is at a pole, longitude offsets are undefined")]
    PolarMidpoint { lat: f64 },
}

impl EllipseError {
    /// Crée une erreur de rayon invalide
    pub fn invalid_radius(radius: f64, focal_distance: f64) -> Self {
        Self::InvalidRadius {
            radius,
            focal_distance,
        }
    }
}
