//! # ellipse
//!
//! Périmètre d'une ellipse géographique définie par deux foyers (lat/lng) et
//! un rayon focal total en mètres.
//!
//! ## Pipeline
//!
//! 1. Distance haversine entre les foyers → demi-axes ([`solver`])
//! 2. Échantillonnage du périmètre dans un repère local en mètres ([`sampler`])
//! 3. Projection autour du point milieu des foyers ([`projector`])
//! 4. Rotation selon l'axe des foyers ([`aligner`])
//!
//! ## Usage
//!
//! ```rust
//! use ellipse::{perimeter, GeoPoint};
//!
//! let focus1 = GeoPoint::new(32.076761, 34.792510);
//! let focus2 = GeoPoint::new(32.083257, 34.767737);
//!
//! let result = perimeter(focus1, focus2, 3000.0, 20)?;
//! assert_eq!(result.axes.semi_major, 1500.0);
//! for (lat, lng) in result.lat_lng_pairs() {
//!     println!("{lat}, {lng}");
//! }
//! # Ok::<(), ellipse::EllipseError>(())
//! ```

pub mod aligner;
pub mod earth;
pub mod error;
pub mod projector;
pub mod sampler;
pub mod solver;
pub mod types;

pub use error::EllipseError;
pub use sampler::DEFAULT_NUM_POINTS;
pub use types::{AxisLengths, EllipsePerimeter, GeoPoint, LocalPoint};

use tracing::{debug, trace};

/// Calcule le périmètre de l'ellipse autour de deux foyers.
///
/// # Arguments
///
/// * `focus1`, `focus2` - Foyers en degrés décimaux
/// * `radius` - Rayon focal total (grand axe) en mètres
/// * `num_points` - Nombre d'abscisses échantillonnées sur le grand axe (≥ 2)
///
/// # Returns
///
/// Un `EllipsePerimeter` dont `points` contient `2 * num_points - 2` points
/// (lat, lng) formant une courbe fermée.
///
/// # Errors
///
/// Retourne `EllipseError` si une entrée est invalide. Toutes les
/// vérifications ont lieu avant l'échantillonnage.
pub fn perimeter(
    focus1: GeoPoint,
    focus2: GeoPoint,
    radius: f64,
    num_points: usize,
) -> Result<EllipsePerimeter, EllipseError> {
    // 1. Valider les entrées
    let focus1 = focus1.validate()?;
    let focus2 = focus2.validate()?;
    if num_points < 2 {
        return Err(EllipseError::InvalidSampleCount(num_points));
    }
    let focal_distance = solver::haversine_meters(focus1, focus2);
    let axes = solver::axes_from_distance(focal_distance, radius)?;
    let midpoint = projector::midpoint(focus1, focus2);
    projector::check_center(midpoint)?;
    debug!(
        semi_major = axes.semi_major,
        semi_minor = axes.semi_minor,
        focal_distance,
        "Solved ellipse axes"
    );

    // 2. Échantillonner dans le repère local
    let local = sampler::sample_perimeter(axes, num_points)?;
    trace!(count = local.len(), "Sampled perimeter");

    // 3. Projeter autour du point milieu
    let projected = projector::project(midpoint, &local)?;

    // 4. Aligner le grand axe sur les foyers
    let bearing_deg = aligner::bearing_deg(focus1, focus2);
    debug!(
        midpoint.lat = midpoint.lat,
        midpoint.lng = midpoint.lng,
        bearing_deg,
        "Aligning perimeter"
    );
    let points = aligner::align(&projected, midpoint, bearing_deg);

    Ok(EllipsePerimeter {
        axes,
        focal_distance,
        midpoint,
        bearing_deg,
        points,
    })
}
