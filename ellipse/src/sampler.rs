//! Échantillonnage du périmètre dans le repère local (mètres)

use crate::{AxisLengths, EllipseError, LocalPoint};

/// Nombre de points par défaut sur le grand axe
pub const DEFAULT_NUM_POINTS: usize = 20;

/// Échantillonne le périmètre d'une ellipse centrée sur l'origine.
///
/// `num_points` abscisses régulièrement espacées couvrent `[-a, a]`. Les
/// sommets `(±a, 0)` sont émis une seule fois, chaque abscisse intérieure
/// donne un point sur chaque demi-ellipse. Le parcours part de `(-a, 0)`,
/// suit la branche `y > 0` de gauche à droite, passe par `(a, 0)` puis
/// revient par la branche `y < 0` : `2 * num_points - 2` points au total.
///
/// # Errors
///
/// - `InvalidSampleCount` si `num_points < 2`
/// - `DegenerateEllipse` si le demi-grand axe est nul
pub fn sample_perimeter(
    axes: AxisLengths,
    num_points: usize,
) -> Result<Vec<LocalPoint>, EllipseError> {
    if num_points < 2 {
        return Err(EllipseError::InvalidSampleCount(num_points));
    }

    let a = axes.semi_major;
    let b = axes.semi_minor;
    if !a.is_finite() || a <= 0.0 {
        return Err(EllipseError::DegenerateEllipse);
    }
    let ratio = b / a;

    let xs = interior_abscissas(a, num_points);
    let upper: Vec<LocalPoint> = xs
        .iter()
        .map(|&x| LocalPoint::new(x, (a * a - x * x).max(0.0).sqrt() * ratio))
        .collect();

    let mut points = Vec::with_capacity(2 * num_points - 2);
    points.push(LocalPoint::new(-a, 0.0));
    points.extend(upper.iter().copied());
    points.push(LocalPoint::new(a, 0.0));
    points.extend(upper.iter().rev().map(|p| LocalPoint::new(p.x, -p.y)));

    Ok(points)
}

/// Abscisses d'un linspace sur `[-a, a]`, sans les deux extrémités
fn interior_abscissas(a: f64, num_points: usize) -> Vec<f64> {
    let step = 2.0 * a / (num_points - 1) as f64;
    (1..num_points - 1)
        .map(|i| -a + i as f64 * step)
        .collect()
}
